//! Collision detection and resolution between bodies.
//!
//! Two strategies are available:
//! - brute force: every unordered pair is compared, O(N²)
//! - quadtree: each body is only compared against the bodies found
//!   in a square neighborhood around it
//!
//! Both apply the same response to overlapping bodies (see
//! [`resolve_pair`]) and report how many pairs they compared.

mod brute_force;
mod indexed;
mod resolution;

use std::fmt;

pub use brute_force::resolve_collisions_brute_force;
use derive_custom::collisim_parameters;
pub use indexed::build_tree;
pub use indexed::neighborhood;
pub use indexed::resolve_collisions_quadtree;
pub use indexed::BodyTree;
pub use indexed::LeafData;
pub use resolution::resolve_pair;
pub use resolution::CollisionPair;

use crate::body::Body;
use crate::extent::Extent;
use crate::prelude::Float;
use crate::quadtree::QuadTreeConfig;

#[derive(Debug, Default, Copy, PartialEq, Eq, Hash)]
#[collisim_parameters]
pub enum CollisionStrategy {
    BruteForce,
    #[default]
    QuadTree,
}

impl CollisionStrategy {
    pub fn toggled(self) -> Self {
        match self {
            Self::BruteForce => Self::QuadTree,
            Self::QuadTree => Self::BruteForce,
        }
    }

    /// Identifier used for performance data categories.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::QuadTree => "quad_tree",
        }
    }
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BruteForce => write!(f, "BRUTE FORCE"),
            Self::QuadTree => write!(f, "QUADTREE"),
        }
    }
}

#[derive(Debug)]
#[collisim_parameters("collisions")]
#[serde(default)]
pub struct CollisionParameters {
    /// The strategy used at the start of the simulation.
    pub strategy: CollisionStrategy,
    /// Side length of the square searched for collision partners of
    /// a body in the quadtree strategy, in units of the radius of
    /// that body. The default of 4 covers all partners of at most
    /// the same radius.
    pub neighborhood_factor: Float,
}

impl Default for CollisionParameters {
    fn default() -> Self {
        Self {
            strategy: CollisionStrategy::default(),
            neighborhood_factor: 4.0,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CollisionStatistics {
    /// The number of pairwise distance checks.
    pub num_comparisons: usize,
    /// The pairs that overlapped, in the order they were resolved.
    pub resolved: Vec<CollisionPair>,
}

/// Finds and resolves all overlapping bodies with the given strategy.
pub fn resolve_collisions(
    strategy: CollisionStrategy,
    bodies: &mut [Body],
    arena: &Extent,
    parameters: &CollisionParameters,
    quadtree_config: &QuadTreeConfig,
) -> CollisionStatistics {
    match strategy {
        CollisionStrategy::BruteForce => resolve_collisions_brute_force(bodies),
        CollisionStrategy::QuadTree => resolve_collisions_quadtree(
            bodies,
            arena,
            quadtree_config,
            parameters.neighborhood_factor,
        ),
    }
}

#[cfg(test)]
#[generic_tests::define]
mod tests {
    use std::collections::HashSet;

    use super::resolve_collisions;
    use super::CollisionParameters;
    use super::CollisionStatistics;
    use super::CollisionStrategy;
    use crate::body::Body;
    use crate::extent::Extent;
    use crate::prelude::MVec;
    use crate::quadtree::QuadTreeConfig;
    use crate::test_utils::assert_float_is_close_high_error;
    use crate::test_utils::assert_vec_is_close;
    use crate::test_utils::get_body_grid;
    use crate::test_utils::get_scattered_bodies;

    const ARENA_SIZE: MVec = MVec::new(1200.0, 800.0);

    pub trait TestStrategy {
        const STRATEGY: CollisionStrategy;
    }

    pub struct BruteForce;
    pub struct QuadTree;

    impl TestStrategy for BruteForce {
        const STRATEGY: CollisionStrategy = CollisionStrategy::BruteForce;
    }

    impl TestStrategy for QuadTree {
        const STRATEGY: CollisionStrategy = CollisionStrategy::QuadTree;
    }

    #[instantiate_tests(<BruteForce>)]
    mod brute_force {}

    #[instantiate_tests(<QuadTree>)]
    mod quad_tree {}

    fn resolve<S: TestStrategy>(bodies: &mut [Body]) -> CollisionStatistics {
        resolve_collisions(
            S::STRATEGY,
            bodies,
            &Extent::from_size(ARENA_SIZE),
            &CollisionParameters::default(),
            &QuadTreeConfig::default(),
        )
    }

    /// Pairs of overlapping bodies which are far away from each other
    /// and from the remaining, non-overlapping bodies.
    fn get_isolated_pairs() -> (Vec<Body>, HashSet<(usize, usize)>) {
        let mut bodies = get_body_grid(6, 4, 150.0, 15.0);
        let mut expected = HashSet::new();
        let offsets = [
            MVec::new(10.0, 0.0),
            MVec::new(0.0, 29.0),
            MVec::new(-12.0, 12.0),
            MVec::new(5.0, -3.0),
        ];
        for (k, offset) in offsets.into_iter().enumerate() {
            let partner_of = 5 * k;
            let center = bodies[partner_of].center() + offset;
            bodies.push(Body::from_center(center, 15.0, MVec::new(1.0, 2.0)));
            expected.insert((partner_of, bodies.len() - 1));
        }
        (bodies, expected)
    }

    #[test]
    fn empty_collection_needs_no_comparisons<S: TestStrategy>() {
        let statistics = resolve::<S>(&mut []);
        assert_eq!(statistics.num_comparisons, 0);
        assert!(statistics.resolved.is_empty());
    }

    #[test]
    fn two_overlapping_bodies_separate<S: TestStrategy>() {
        let mut bodies = vec![
            Body::from_center(MVec::new(100.0, 100.0), 15.0, MVec::new(50.0, 0.0)),
            Body::from_center(MVec::new(120.0, 100.0), 15.0, MVec::new(-20.0, 10.0)),
        ];
        let statistics = resolve::<S>(&mut bodies);
        assert_eq!(statistics.num_comparisons, 1);
        assert_eq!(statistics.resolved.len(), 1);
        assert_vec_is_close(bodies[0].velocity, MVec::new(-20.0, 10.0));
        assert_vec_is_close(bodies[1].velocity, MVec::new(50.0, 0.0));
        assert_float_is_close_high_error(bodies[0].center().y, 100.0);
        assert_float_is_close_high_error(bodies[1].center().y, 100.0);
        assert_float_is_close_high_error(bodies[0].center().distance(bodies[1].center()), 30.0);
    }

    #[test]
    fn non_overlapping_bodies_do_not_collide<S: TestStrategy>() {
        let mut bodies = get_body_grid(10, 5, 100.0, 15.0);
        assert_eq!(bodies.len(), 50);
        let before = bodies.clone();
        let statistics = resolve::<S>(&mut bodies);
        assert!(statistics.resolved.is_empty());
        assert_eq!(bodies, before);
    }

    #[test]
    fn finds_all_isolated_pairs<S: TestStrategy>() {
        let (mut bodies, expected) = get_isolated_pairs();
        let statistics = resolve::<S>(&mut bodies);
        let found: HashSet<_> = statistics
            .resolved
            .iter()
            .map(|pair| (pair.first(), pair.second()))
            .collect();
        assert_eq!(found, expected);
        for (i, j) in expected {
            let distance = bodies[i].center().distance(bodies[j].center());
            assert_float_is_close_high_error(distance, 30.0);
        }
    }

    #[test]
    fn pairs_are_resolved_at_most_once<S: TestStrategy>() {
        // A dense cluster in which most bodies have several partners.
        let mut bodies: Vec<_> = get_scattered_bodies(40, MVec::new(150.0, 150.0), 15.0, 1)
            .into_iter()
            .map(|body| Body::new(body.position + MVec::splat(300.0), 15.0, body.velocity))
            .collect();
        let n = bodies.len();
        let statistics = resolve::<S>(&mut bodies);
        let unique: HashSet<_> = statistics.resolved.iter().collect();
        assert_eq!(unique.len(), statistics.resolved.len());
        assert!(!statistics.resolved.is_empty());
        assert!(statistics.num_comparisons <= n * (n - 1) / 2);
        assert!(statistics.resolved.len() <= statistics.num_comparisons);
    }

    #[test]
    fn coincident_bodies_are_left_alone<S: TestStrategy>() {
        let mut bodies = vec![
            Body::from_center(MVec::new(400.0, 400.0), 15.0, MVec::new(1.0, 0.0)),
            Body::from_center(MVec::new(400.0, 400.0), 15.0, MVec::new(0.0, 1.0)),
        ];
        let before = bodies.clone();
        let statistics = resolve::<S>(&mut bodies);
        assert_eq!(statistics.num_comparisons, 1);
        assert!(statistics.resolved.is_empty());
        assert_eq!(bodies, before);
    }

    #[test]
    fn bodies_stay_finite_over_many_steps<S: TestStrategy>() {
        let mut bodies = get_scattered_bodies(120, ARENA_SIZE, 15.0, 7);
        for _ in 0..200 {
            for body in bodies.iter_mut() {
                body.update(1.0 / 60.0, ARENA_SIZE);
            }
            resolve::<S>(&mut bodies);
            assert!(bodies
                .iter()
                .all(|body| body.position.is_finite() && body.velocity.is_finite()));
        }
    }

    #[test]
    fn undersized_neighborhood_misses_collisions<S: TestStrategy>() {
        let mut bodies = vec![
            Body::from_center(MVec::new(300.0, 300.0), 40.0, MVec::ZERO),
            Body::from_center(MVec::new(330.0, 300.0), 5.0, MVec::ZERO),
        ];
        let parameters = CollisionParameters {
            neighborhood_factor: 1.0,
            ..Default::default()
        };
        let statistics = resolve_collisions(
            S::STRATEGY,
            &mut bodies,
            &Extent::from_size(ARENA_SIZE),
            &parameters,
            &QuadTreeConfig::default(),
        );
        let expected_collisions: usize = match S::STRATEGY {
            CollisionStrategy::BruteForce => 1,
            CollisionStrategy::QuadTree => 0,
        };
        assert_eq!(statistics.resolved.len(), expected_collisions);
    }
}
