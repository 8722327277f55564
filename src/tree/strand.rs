//! Tree storage and the depth-first append operations.
//!
//! Nodes are appended relative to the *rightmost path* (or last strand) of the tree, that is,
//! the path from the root level to the most recently appended node. A node can become a
//! sibling of any node on that path or a child of its deepest node. Skipping depths violates
//! the depth-first order and is a programming error.

use super::{DepthFirstIterator, DepthLevel, PreOrderIterator, TreeNode};
use crate::TreeError;
use itertools::Itertools;
use tracing::{debug, trace};
use tracing_attributes::instrument;

/// Append-only tree stored depth-first in a flat arena.
///
/// The tree is built by appending nodes in pre-order. Appended nodes are never moved or
/// removed, only the spans of their ancestors grow while descendants are added.
/// Iteration borrows the tree, hence it cannot be extended while it is traversed.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    /// Memory allocated area for nodes, sorted depth-first
    pub(super) buffer: Vec<TreeNode<T>>,
    /// Arena indices of the rightmost path, one per depth
    pub(super) last_strand: Vec<usize>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Tree {
            buffer: vec![],
            last_strand: vec![],
        }
    }

    /// Contructor that reserves room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Tree {
            buffer: Vec::with_capacity(capacity),
            last_strand: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// All nodes in depth-first order.
    pub fn nodes(&self) -> &[TreeNode<T>] {
        &self.buffer
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.buffer.get(index).map(TreeNode::get)
    }

    /// Length of the rightmost path. Appending is possible at any depth up to and including
    /// this value.
    pub fn depth(&self) -> usize {
        self.last_strand.len()
    }

    /// The load of the most recently appended node at `level` or `None` if the rightmost
    /// path does not reach that deep.
    pub fn last(&self, level: DepthLevel) -> Option<&T> {
        let index = self.last_strand.get(level.value())?;
        Some(&self.buffer[*index].data)
    }

    /// Loads along the rightmost path, starting at the root level.
    pub fn rightmost_path(&self) -> impl Iterator<Item = &T> + '_ {
        self.last_strand.iter().map(|index| &self.buffer[*index].data)
    }

    /// Appends a node at `level`. It becomes the last child of the node at `level - 1` on
    /// the rightmost path, and the rightmost path below `level` is discarded.
    ///
    /// # Panics
    ///
    /// If `level` exceeds [Tree::depth]. Use [Tree::try_append] to get an error instead.
    pub fn append(&mut self, data: T, level: DepthLevel) {
        if let Err(err) = self.try_append(data, level) {
            panic!("{err}");
        }
    }

    /// Same as [Tree::append] but reports a skipped depth as an error. The tree is left
    /// unchanged in that case.
    #[instrument(level = "trace", skip(self, data))]
    pub fn try_append(&mut self, data: T, level: DepthLevel) -> Result<(), TreeError> {
        let index = self.attach(level, 1)?;
        self.buffer.push(TreeNode::new(data, index));
        trace!(index, "Appended node");
        Ok(())
    }

    /// Appends a strand of nodes at `level`. Each element of the strand is a child of the
    /// previous one, so the strand extends the rightmost path by its length, starting at
    /// `level`. All nodes of the strand share the same span: the last node of the strand.
    ///
    /// # Panics
    ///
    /// If `level` exceeds [Tree::depth]. Use [Tree::try_append_strand] to get an error instead.
    pub fn append_strand<I>(&mut self, strand: I, level: DepthLevel)
    where
        I: IntoIterator<Item = T>,
    {
        if let Err(err) = self.try_append_strand(strand, level) {
            panic!("{err}");
        }
    }

    /// Same as [Tree::append_strand] but reports a skipped depth as an error. The tree is
    /// left unchanged in that case.
    #[instrument(level = "trace", skip(self, strand))]
    pub fn try_append_strand<I>(&mut self, strand: I, level: DepthLevel) -> Result<(), TreeError>
    where
        I: IntoIterator<Item = T>,
    {
        let strand = strand.into_iter().collect_vec();
        let count = strand.len();
        let start = self.attach(level, count)?;

        // only read if the strand is not empty
        let end = (start + count).saturating_sub(1);
        self.buffer
            .extend(strand.into_iter().map(|data| TreeNode::new(data, end)));
        trace!(start, count, "Appended strand");
        Ok(())
    }

    /// Depth-first iterator over the nodes at the root level. Each node comes with an
    /// iterator over its children (if it has any).
    pub fn iter(&self) -> DepthFirstIterator<'_, T> {
        DepthFirstIterator::new(self, 0, self.buffer.len())
    }

    /// Iterator over the children of the node at `index` (empty for a leaf), or `None` if
    /// there is no such node.
    pub fn iter_sub(&self, index: usize) -> Option<DepthFirstIterator<'_, T>> {
        let node = self.buffer.get(index)?;
        Some(DepthFirstIterator::new(self, index + 1, node.end + 1))
    }

    /// Flat depth-first iterator that yields every node with its depth.
    pub fn iter_depth(&self) -> PreOrderIterator<'_, T> {
        PreOrderIterator::new(self)
    }

    /// Makes room for `count` new nodes at `level` and returns the arena index of the first
    /// one:
    /// * Discards the rightmost path from `level` on
    /// * Widens the spans of the remaining ancestors
    /// * Appends the indices of the new nodes to the rightmost path
    fn attach(&mut self, level: DepthLevel, count: usize) -> Result<usize, TreeError> {
        let admissible = self.last_strand.len();
        if level.value() > admissible {
            debug!(%level, admissible, "Depth-first order violated");
            return Err(TreeError::DepthSkipped {
                requested: level,
                admissible,
            });
        }

        let start = self.buffer.len();
        self.last_strand.truncate(level.value());
        for parent in &self.last_strand {
            self.buffer[*parent].end += count;
        }
        self.last_strand.extend(start..start + count);
        Ok(start)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Appends every item at the root level.
impl<T> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for data in iter {
            self.append(data, DepthLevel::ROOT);
        }
    }
}

impl<T> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Tree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = <DepthFirstIterator<'a, T> as Iterator>::Item;
    type IntoIter = DepthFirstIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
