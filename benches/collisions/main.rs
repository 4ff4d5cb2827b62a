use std::time::Duration;

use collisim::collisions::resolve_collisions;
use collisim::collisions::CollisionParameters;
use collisim::collisions::CollisionStrategy;
use collisim::initial_conditions::spawn_bodies;
use collisim::prelude::Body;
use collisim::quadtree::QuadTreeConfig;
use collisim::simulation::ArenaParameters;
use collisim::simulation::PopulationParameters;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn get_bodies(num: usize) -> Vec<Body> {
    spawn_bodies(
        &mut StdRng::seed_from_u64(0),
        num,
        &ArenaParameters::default(),
        &PopulationParameters::default(),
    )
}

pub fn collisions_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("collisions");
    group.measurement_time(Duration::from_secs(5));
    let arena = ArenaParameters::default().extent();
    let parameters = CollisionParameters::default();
    let config = QuadTreeConfig::default();
    for strategy in [CollisionStrategy::BruteForce, CollisionStrategy::QuadTree] {
        for num_bodies in [50, 200, 1000] {
            let bodies = get_bodies(num_bodies);
            group.bench_with_input(
                BenchmarkId::new(strategy.identifier(), num_bodies),
                &bodies,
                |b, bodies| {
                    b.iter_batched_ref(
                        || bodies.clone(),
                        |bodies| resolve_collisions(strategy, bodies, &arena, &parameters, &config),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, collisions_benchmark);
criterion_main!(benches);
