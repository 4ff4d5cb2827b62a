use super::LeafDataType;
use super::QuadTree;
use crate::extent::Extent;
use crate::prelude::MVec;

impl<L: LeafDataType> QuadTree<L> {
    /// Appends every entry of this node and its descendants whose
    /// position lies inside `range`. Subtrees whose extent does not
    /// intersect `range` are skipped entirely.
    pub fn add_leaves_in_range<'a>(&'a self, range: &Extent, leaves: &mut Vec<&'a L>) {
        self.add_leaves_in_range_by(range, &|leaf: &L| *leaf.pos(), leaves)
    }

    /// Like [add_leaves_in_range](Self::add_leaves_in_range), but
    /// tests the position returned by `get_pos` instead of the one
    /// stored in the entry. The stored position still decides which
    /// node an entry lives in, so entries whose position changed
    /// after insertion are only found if their node intersects
    /// `range`.
    pub fn add_leaves_in_range_by<'a, F: Fn(&L) -> MVec>(
        &'a self,
        range: &Extent,
        get_pos: &F,
        leaves: &mut Vec<&'a L>,
    ) {
        if !self.extent.intersects(range) {
            return;
        }
        leaves.extend(self.leaves.iter().filter(|leaf| range.contains(&get_pos(*leaf))));
        if let Some(ref children) = self.children {
            for child in children.iter() {
                child.add_leaves_in_range_by(range, get_pos, leaves);
            }
        }
    }

    pub fn get_leaves_in_range<'a>(&'a self, range: &Extent) -> Vec<&'a L> {
        let mut leaves = vec![];
        self.add_leaves_in_range(range, &mut leaves);
        leaves
    }
}
