use super::resolution::get_pair_mut;
use super::resolution::resolve_pair;
use super::CollisionPair;
use super::CollisionStatistics;
use crate::body::Body;

/// Compares every unordered pair of bodies exactly once.
pub fn resolve_collisions_brute_force(bodies: &mut [Body]) -> CollisionStatistics {
    let mut statistics = CollisionStatistics::default();
    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            statistics.num_comparisons += 1;
            let (a, b) = get_pair_mut(bodies, i, j);
            if resolve_pair(a, b) {
                statistics.resolved.push(CollisionPair::new(i, j));
            }
        }
    }
    statistics
}
