use rand::Rng;

use crate::body::Body;
use crate::prelude::MVec;
use crate::rand::gen_range;
use crate::simulation::ArenaParameters;
use crate::simulation::PopulationParameters;

/// Creates a single body with a random position inside the spawn
/// region and a random velocity.
pub fn spawn_body<R: Rng>(
    rng: &mut R,
    arena: &ArenaParameters,
    population: &PopulationParameters,
) -> Body {
    let region = population.spawn_region(arena);
    let position = gen_range(rng, region.min, region.max);
    let max_velocity = MVec::splat(population.max_speed);
    let velocity = gen_range(rng, -max_velocity, max_velocity);
    Body::new(position, population.radius, velocity)
}

pub fn spawn_bodies<R: Rng>(
    rng: &mut R,
    num: usize,
    arena: &ArenaParameters,
    population: &PopulationParameters,
) -> Vec<Body> {
    (0..num)
        .map(|_| spawn_body(rng, arena, population))
        .collect()
}
