//! Ordered set of 16-bit integers, backed by a B-tree.

use crate::DenseSet;
use std::{
    collections::{btree_set, BTreeSet},
    ptr::NonNull,
};

/// B-tree branching factor of the standard library.
const BRANCHING_FACTOR: usize = 6;

/// Maximum number of keys stored by a single node.
pub const NODE_CAPACITY: usize = 2 * BRANCHING_FACTOR - 1;

/// Maximum number of children of an internal node.
const EDGE_CAPACITY: usize = 2 * BRANCHING_FACTOR;

/// Keys in the right node after a split on the right edge: 6 stay on the
/// left, 1 moves up, 4 move right and the inserted key joins them.
const SPLIT_RIGHT_LEN: usize = NODE_CAPACITY - BRANCHING_FACTOR;

/// Mirror of the standard library leaf node, for a set of `u16`.
///
/// Never instantiated: it only exists to measure the node layout, since the
/// real one is private.
#[allow(dead_code)]
#[repr(C)]
struct LeafNode {
    parent: Option<NonNull<InternalNode>>,
    parent_idx: u16,
    len: u16,
    keys: [u16; NODE_CAPACITY],
}

/// Mirror of the standard library internal node, for a set of `u16`.
#[allow(dead_code)]
#[repr(C)]
struct InternalNode {
    data: LeafNode,
    edges: [NonNull<LeafNode>; EDGE_CAPACITY],
}

/// Ordered set of 16-bit integers.
///
/// Only the values present are stored, so the footprint grows with the
/// cardinality, plus the per-node overhead (parent link, lengths, child
/// links for internal nodes).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OrderedSet(BTreeSet<u16>);

impl OrderedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Size in bytes of one leaf node, where the keys live.
    pub const fn node_size() -> usize {
        size_of::<LeafNode>()
    }

    /// Size in bytes of one internal node.
    pub const fn internal_node_size() -> usize {
        size_of::<InternalNode>()
    }

    /// Adds a value to the set.
    ///
    /// If the set did not have this value present, true is returned.
    /// If the set did have this value present, false is returned.
    pub fn insert(&mut self, value: u16) -> bool {
        self.0.insert(value)
    }

    /// Removes a value from the set.
    ///
    /// Returns whether the value was present or not.
    pub fn remove(&mut self, value: u16) -> bool {
        self.0.remove(&value)
    }

    /// Returns true if the set contains the value.
    pub fn contains(&self, value: u16) -> bool {
        self.0.contains(&value)
    }

    /// Returns the number of values in the set.
    pub fn cardinality(&self) -> usize {
        self.0.len()
    }

    /// Finds the smallest value in the set.
    pub fn min(&self) -> Option<u16> {
        self.0.first().copied()
    }

    /// Finds the largest value in the set.
    pub fn max(&self) -> Option<u16> {
        self.0.last().copied()
    }

    /// Returns an iterator over the values, in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }

    /// Returns the estimated in-memory size of the set, in bytes.
    ///
    /// The node count is not observable, so it is derived from the split
    /// pattern of ascending inserts (nodes end up a bit more than half
    /// full). Allocator overhead is not included.
    pub fn mem_size(&self) -> usize {
        let (leaves, internals) = node_count(self.0.len());

        size_of_val(self)
            + leaves * Self::node_size()
            + internals * Self::internal_node_size()
    }
}

/// Counts the leaf and internal nodes of a tree built by inserting `len`
/// keys in ascending order, as the populators do.
///
/// A full node receiving a key on its right edge splits into a left node
/// keeping `BRANCHING_FACTOR` keys, one key moved up to the parent, and a
/// right node holding the rest plus the new key.
fn node_count(len: usize) -> (usize, usize) {
    // Per level, from the leaves up: keys in the rightmost node, node count.
    let mut levels: Vec<(usize, usize)> = Vec::new();

    for _ in 0..len {
        let mut level = 0;
        loop {
            let Some(&mut (ref mut keys, ref mut nodes)) = levels.get_mut(level)
            else {
                // New root.
                levels.push((1, 1));
                break;
            };
            if *keys < NODE_CAPACITY {
                *keys += 1;
                break;
            }
            *keys = SPLIT_RIGHT_LEN;
            *nodes += 1;
            level += 1;
        }
    }

    levels.split_first().map_or((0, 0), |(&(_, leaves), internals)| {
        (leaves, internals.iter().map(|&(_, nodes)| nodes).sum())
    })
}

impl DenseSet for OrderedSet {
    fn new() -> Self {
        Self::new()
    }

    fn insert(&mut self, value: u16) -> bool {
        self.insert(value)
    }

    fn contains(&self, value: u16) -> bool {
        self.contains(value)
    }

    fn cardinality(&self) -> usize {
        self.cardinality()
    }

    fn min(&self) -> Option<u16> {
        self.min()
    }

    fn max(&self) -> Option<u16> {
        self.max()
    }

    fn mem_size(&self) -> usize {
        self.mem_size()
    }
}

impl FromIterator<u16> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = u16>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OrderedSet {
    type Item = u16;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the values of an [`OrderedSet`].
pub struct Iter<'a>(btree_set::Iter<'a, u16>);

impl Iterator for Iter<'_> {
    type Item = u16;

    fn next(&mut self) -> Option<u16> {
        self.0.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
