use crate::body::Body;

/// An unordered pair of body indices, stored as `(min, max)` so that
/// both discovery orders compare equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair(usize, usize);

impl CollisionPair {
    pub fn new(i: usize, j: usize) -> Self {
        debug_assert_ne!(i, j);
        if i < j {
            Self(i, j)
        } else {
            Self(j, i)
        }
    }

    pub fn first(&self) -> usize {
        self.0
    }

    pub fn second(&self) -> usize {
        self.1
    }
}

/// Returns mutable references to two distinct bodies of the slice.
pub(super) fn get_pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolves an overlap between `a` and `b`: the velocities are
/// exchanged and both bodies are pushed apart along the line
/// connecting their centers until they just touch. Returns whether
/// the bodies overlapped.
///
/// Bodies with coincident centers are left untouched, since there
/// is no direction to separate them along.
pub fn resolve_pair(a: &mut Body, b: &mut Body) -> bool {
    let diff = a.center() - b.center();
    let distance = diff.length();
    let min_distance = a.radius() + b.radius();
    if !(distance > 0.0 && distance < min_distance) {
        return false;
    }
    std::mem::swap(&mut a.velocity, &mut b.velocity);
    let overlap = diff / distance * ((min_distance - distance) * 0.5);
    a.position += overlap;
    b.position -= overlap;
    true
}
