use derive_custom::collisim_parameters;

/// Parameters controlling the construction of a tree.
#[derive(Debug)]
#[collisim_parameters("quadtree")]
#[serde(default)]
pub struct QuadTreeConfig {
    /// The maximum number of bodies that a node holds directly.
    /// The node is subdivided when another body arrives after
    /// it is full.
    pub node_capacity: usize,
    /// The maximum depth of the tree. Nodes at this depth are never
    /// subdivided and accept bodies beyond their capacity. Should be
    /// high enough to keep the number of bodies per node close to
    /// the capacity, but low enough to prevent "infinite
    /// subdivisions" for many bodies at the same position.
    pub max_depth: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            node_capacity: 4,
            max_depth: 20,
        }
    }
}
