use std::collections::HashSet;

use log::debug;

use super::resolution::get_pair_mut;
use super::resolution::resolve_pair;
use super::CollisionPair;
use super::CollisionStatistics;
use crate::body::Body;
use crate::extent::Extent;
use crate::prelude::Float;
use crate::prelude::MVec;
use crate::quadtree::LeafDataType;
use crate::quadtree::QuadTree;
use crate::quadtree::QuadTreeConfig;

/// The entry stored in the tree for each body: its index in the
/// body collection and its center at the time the tree was built.
/// The center only decides where the entry is stored. Searches test
/// the current center of the body.
#[derive(Clone, Debug)]
pub struct LeafData {
    pub index: usize,
    pub pos: MVec,
}

impl LeafDataType for LeafData {
    fn pos(&self) -> &MVec {
        &self.pos
    }
}

pub type BodyTree = QuadTree<LeafData>;

/// Builds a tree over the centers of all bodies. Bodies whose
/// centers lie outside of `arena` are left out.
pub fn build_tree(bodies: &[Body], arena: &Extent, config: &QuadTreeConfig) -> BodyTree {
    let mut tree = QuadTree::make_empty_leaf_from_extent(config, arena.clone());
    for (index, body) in bodies.iter().enumerate() {
        let pos = body.center();
        if !tree.insert(LeafData { index, pos }) {
            debug!("Body {} at {:?} is outside of the arena, skipping", index, pos);
        }
    }
    tree
}

/// The square region searched for collision partners of `body`.
pub fn neighborhood(body: &Body, neighborhood_factor: Float) -> Extent {
    Extent::square_around(body.center(), body.radius() * neighborhood_factor)
}

/// Checks each body only against the bodies found by a tree search in
/// its neighborhood. Every unordered pair is checked at most once.
/// Bodies moved by an earlier resolution in the same pass are
/// searched for at their new center.
/// Collisions between bodies further apart than the neighborhood
/// size are missed, so `neighborhood_factor` should be chosen with
/// the largest radius in mind.
pub fn resolve_collisions_quadtree(
    bodies: &mut [Body],
    arena: &Extent,
    config: &QuadTreeConfig,
    neighborhood_factor: Float,
) -> CollisionStatistics {
    let tree = build_tree(bodies, arena, config);
    let mut statistics = CollisionStatistics::default();
    let mut checked: HashSet<CollisionPair> = HashSet::new();
    let mut neighbours = vec![];
    for i in 0..bodies.len() {
        let range = neighborhood(&bodies[i], neighborhood_factor);
        neighbours.clear();
        tree.add_leaves_in_range_by(
            &range,
            &|leaf: &LeafData| bodies[leaf.index].center(),
            &mut neighbours,
        );
        for neighbour in neighbours.iter() {
            let j = neighbour.index;
            if j == i {
                continue;
            }
            let pair = CollisionPair::new(i, j);
            if !checked.insert(pair) {
                continue;
            }
            statistics.num_comparisons += 1;
            let (a, b) = get_pair_mut(bodies, i, j);
            if resolve_pair(a, b) {
                statistics.resolved.push(pair);
            }
        }
    }
    statistics
}
