pub mod config;
mod range_search;

pub use config::QuadTreeConfig;

use crate::extent::Extent;
use crate::extent::NUM_QUADRANTS;
use crate::prelude::MVec;

pub trait LeafDataType: Clone {
    fn pos(&self) -> &MVec;
}

type Tree<L> = Box<[QuadTree<L>; NUM_QUADRANTS]>;

/// A quadtree in which every node stores up to `node_capacity`
/// entries directly. Entries that arrive at a full node are passed
/// down to one of its four children, which are created the first
/// time this happens.
#[derive(Debug)]
pub struct QuadTree<L> {
    pub extent: Extent,
    pub leaves: Vec<L>,
    pub children: Option<Tree<L>>,
    depth: usize,
    node_capacity: usize,
    max_depth: usize,
}

impl<L: LeafDataType> QuadTree<L> {
    pub fn new(
        config: &QuadTreeConfig,
        leaves: impl IntoIterator<Item = L>,
        extent: &Extent,
    ) -> Self {
        let mut tree = Self::make_empty_leaf_from_extent(config, extent.clone());
        for leaf in leaves {
            tree.insert(leaf);
        }
        tree
    }

    pub fn make_empty_leaf_from_extent(config: &QuadTreeConfig, extent: Extent) -> Self {
        Self::make_empty_node(extent, 0, config.node_capacity, config.max_depth)
    }

    fn make_empty_node(
        extent: Extent,
        depth: usize,
        node_capacity: usize,
        max_depth: usize,
    ) -> Self {
        Self {
            extent,
            leaves: vec![],
            children: None,
            depth,
            node_capacity,
            max_depth,
        }
    }

    /// Inserts the entry into the first node (from the root
    /// downwards) whose extent contains its position and which has
    /// room for it. Returns `false` if the position lies outside of
    /// the extent of the tree.
    pub fn insert(&mut self, leaf_data: L) -> bool {
        if !self.extent.contains(leaf_data.pos()) {
            return false;
        }
        if self.children.is_none()
            && (self.leaves.len() < self.node_capacity || self.depth >= self.max_depth)
        {
            self.leaves.push(leaf_data);
            return true;
        }
        if self.children.is_none() {
            self.subdivide();
        }
        let child = self.children.as_mut().and_then(|children| {
            children
                .iter_mut()
                .find(|child| child.extent.contains(leaf_data.pos()))
        });
        match child {
            Some(child) => child.insert(leaf_data),
            None => false,
        }
    }

    fn subdivide(&mut self) {
        debug_assert!(self.children.is_none());
        let (depth, node_capacity, max_depth) = (self.depth, self.node_capacity, self.max_depth);
        let quadrants = self.extent.get_quadrants();
        self.children = Some(Box::new(quadrants.map(|extent| {
            Self::make_empty_node(extent, depth + 1, node_capacity, max_depth)
        })));
    }

    pub fn is_subdivided(&self) -> bool {
        self.children.is_some()
    }

    pub fn depth_first_map_node<'a>(&'a self, closure: &mut impl FnMut(&'a Extent, &'a [L])) {
        closure(&self.extent, &self.leaves);
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.depth_first_map_node(closure);
            }
        }
    }

    pub fn num_nodes(&self) -> usize {
        let mut num_nodes = 0;
        self.depth_first_map_node(&mut |_, _| num_nodes += 1);
        num_nodes
    }

    pub fn num_leaves(&self) -> usize {
        let mut num_leaves = 0;
        self.depth_first_map_node(&mut |_, leaves| num_leaves += leaves.len());
        num_leaves
    }
}
