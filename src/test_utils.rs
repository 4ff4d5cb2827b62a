use crate::body::Body;
use crate::prelude::Float;
use crate::prelude::MVec;

pub fn assert_float_is_close(x: Float, y: Float) {
    assert!(
        (x - y).abs() < 10.0 * Float::EPSILON * x.abs().max(1.0),
        "{} {}",
        x,
        y
    )
}

pub fn assert_float_is_close_high_error(x: Float, y: Float) {
    assert!((x - y).abs() < 1e3 * Float::EPSILON * x.abs().max(1.0), "{} {}", x, y)
}

pub fn assert_vec_is_close(x: MVec, y: MVec) {
    assert!(
        (x - y).length() < 1e3 * Float::EPSILON * x.length().max(1.0),
        "{} {}",
        x,
        y
    )
}

/// A grid of `n * m` resting bodies whose centers are `spacing`
/// apart, starting at `(spacing, spacing)`.
pub fn get_body_grid(n: usize, m: usize, spacing: Float, radius: Float) -> Vec<Body> {
    (1..n + 1)
        .flat_map(move |x| {
            (1..m + 1).map(move |y| {
                Body::from_center(
                    MVec::new(x as Float * spacing, y as Float * spacing),
                    radius,
                    MVec::ZERO,
                )
            })
        })
        .collect()
}

/// Bodies with pseudo-random positions and velocities. Deterministic,
/// so that tests comparing strategies see the same arrangement.
pub fn get_scattered_bodies(num: usize, arena_size: MVec, radius: Float, seed: u64) -> Vec<Body> {
    use rand::rngs::StdRng;
    use rand::Rng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(seed);
    (0..num)
        .map(|_| {
            let position = MVec::new(
                rng.gen_range(0.0..arena_size.x - 2.0 * radius),
                rng.gen_range(0.0..arena_size.y - 2.0 * radius),
            );
            let velocity = MVec::new(rng.gen_range(-200.0..200.0), rng.gen_range(-200.0..200.0));
            Body::new(position, radius, velocity)
        })
        .collect()
}
