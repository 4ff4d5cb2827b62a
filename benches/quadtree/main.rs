use std::time::Duration;

use collisim::collisions::build_tree;
use collisim::collisions::neighborhood;
use collisim::collisions::BodyTree;
use collisim::initial_conditions::spawn_bodies;
use collisim::prelude::Body;
use collisim::quadtree::QuadTreeConfig;
use collisim::simulation::ArenaParameters;
use collisim::simulation::PopulationParameters;
use criterion::criterion_group;
use criterion::criterion_main;
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

fn get_quadtree(bodies: &[Body], node_capacity: usize) -> BodyTree {
    let config = QuadTreeConfig {
        node_capacity,
        ..Default::default()
    };
    build_tree(bodies, &ArenaParameters::default().extent(), &config)
}

fn quadtree_range_search(quadtree: &BodyTree, bodies: &[Body]) -> usize {
    bodies
        .iter()
        .map(|body| quadtree.get_leaves_in_range(&neighborhood(body, 4.0)).len())
        .sum()
}

pub fn quadtree_construction_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_construction");
    group.measurement_time(Duration::from_secs(5));
    let bodies = get_bodies(2000);
    for node_capacity in [1, 4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(node_capacity),
            &node_capacity,
            |b, node_capacity| b.iter(|| get_quadtree(&bodies, *node_capacity)),
        );
    }
    group.finish();
}

pub fn quadtree_range_search_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_range_search");
    group
        .sample_size(200)
        .measurement_time(Duration::from_secs(5));
    let bodies = get_bodies(2000);
    for node_capacity in [1, 4, 16, 64] {
        group.bench_with_input(
            BenchmarkId::from_parameter(node_capacity),
            &get_quadtree(&bodies, node_capacity),
            |b, tree| b.iter(|| quadtree_range_search(tree, &bodies)),
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    quadtree_construction_benchmark,
    quadtree_range_search_benchmark
);
criterion_main!(benches);
