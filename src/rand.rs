use ::rand::Rng;

use crate::prelude::MVec;

/// Generates random vectors with components in the range min..=max.
/// ```
/// # use collisim::prelude::MVec;
/// # use collisim::rand::gen_range;
/// let min = MVec::new(0.0, 0.0);
/// let max = MVec::new(1.0, 5.0);
/// let v = gen_range(&mut rand::thread_rng(), min, max);
/// assert!(min.x <= v.x && v.x <= max.x);
/// assert!(min.y <= v.y && v.y <= max.y);
/// ```
pub fn gen_range<R: Rng>(rng: &mut R, min: MVec, max: MVec) -> MVec {
    MVec::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y))
}
