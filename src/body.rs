use crate::prelude::Float;
use crate::prelude::MVec;

/// A circular body moving through the arena. Bodies are identified
/// by their index in the body collection of the simulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    /// Top left corner of the bounding square of the body.
    pub position: MVec,
    pub velocity: MVec,
    radius: Float,
}

impl Body {
    /// `radius` must be positive. This is only checked in debug
    /// builds.
    pub fn new(position: MVec, radius: Float, velocity: MVec) -> Self {
        debug_assert!(radius > 0.0);
        Self {
            position,
            velocity,
            radius,
        }
    }

    /// Creates a body from the position of its center instead of
    /// its top left corner.
    pub fn from_center(center: MVec, radius: Float, velocity: MVec) -> Self {
        Self::new(center - MVec::splat(radius), radius, velocity)
    }

    pub fn radius(&self) -> Float {
        self.radius
    }

    pub fn center(&self) -> MVec {
        self.position + MVec::splat(self.radius)
    }

    /// Moves the body by `velocity * elapsed_time` and lets it bounce
    /// off the walls of an arena of size `arena_size`. The bounding
    /// square of the body always ends up inside the arena.
    pub fn update(&mut self, elapsed_time: Float, arena_size: MVec) {
        self.position += self.velocity * elapsed_time;
        let diameter = 2.0 * self.radius;
        if self.position.x <= 0.0 || self.position.x + diameter >= arena_size.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y <= 0.0 || self.position.y + diameter >= arena_size.y {
            self.velocity.y = -self.velocity.y;
        }
        self.position.x = clamp_to_arena(self.position.x, arena_size.x - diameter);
        self.position.y = clamp_to_arena(self.position.y, arena_size.y - diameter);
    }
}

fn clamp_to_arena(v: Float, max: Float) -> Float {
    // Not Float::clamp, which panics if the arena is smaller than the body.
    v.min(max).max(0.0)
}
