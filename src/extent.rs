use crate::prelude::Float;
use crate::prelude::MVec;

pub const NUM_QUADRANTS: usize = 4;

/// An axis-aligned rectangle in arena coordinates. The arena uses
/// screen coordinates, so `min` is the top left corner and the y
/// axis points downwards.
#[derive(Default, Clone, PartialEq)]
pub struct Extent {
    pub min: MVec,
    pub max: MVec,
    pub center: MVec,
}

impl Extent {
    pub fn new(min_x: Float, max_x: Float, min_y: Float, max_y: Float) -> Self {
        debug_assert!(min_x <= max_x);
        debug_assert!(min_y <= max_y);
        let min = MVec::new(min_x, min_y);
        let max = MVec::new(max_x, max_y);
        Self::from_min_max(min, max)
    }

    pub fn from_min_max(min: MVec, max: MVec) -> Self {
        Self {
            min,
            max,
            center: (min + max) * 0.5,
        }
    }

    /// The extent of an arena of the given size with its top left
    /// corner at the origin.
    pub fn from_size(size: MVec) -> Self {
        Self::from_min_max(MVec::ZERO, size)
    }

    /// A square with the given side length around `center`.
    pub fn square_around(center: MVec, side_length: Float) -> Self {
        let half = MVec::splat(side_length * 0.5);
        Self {
            min: center - half,
            max: center + half,
            center,
        }
    }

    pub fn side_lengths(&self) -> MVec {
        self.max - self.min
    }

    /// Half-open containment: the top and left edges belong to the
    /// extent, the bottom and right edges do not.
    pub fn contains(&self, pos: &MVec) -> bool {
        self.min.x <= pos.x && pos.x < self.max.x && self.min.y <= pos.y && pos.y < self.max.y
    }

    /// Whether the two extents share any area. Extents that only
    /// touch along an edge do not intersect.
    pub fn intersects(&self, other: &Extent) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Returns the four quadrants in the order top left, top right,
    /// bottom left, bottom right.
    pub fn get_quadrants(&self) -> [Self; NUM_QUADRANTS] {
        let top_left = Self::new(self.min.x, self.center.x, self.min.y, self.center.y);
        let top_right = Self::new(self.center.x, self.max.x, self.min.y, self.center.y);
        let bottom_left = Self::new(self.min.x, self.center.x, self.center.y, self.max.y);
        let bottom_right = Self::new(self.center.x, self.max.x, self.center.y, self.max.y);
        [top_left, top_right, bottom_left, bottom_right]
    }
}

impl std::fmt::Debug for Extent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Extent({:.3?} {:.3?})", self.min, self.max)
    }
}
