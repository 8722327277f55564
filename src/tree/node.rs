//! Node stored in the arena of a [Tree](super::Tree).

use core::fmt;

/// A node in the flat, depth-first arena. Instead of child references, it stores the index
/// of its last descendant so that the node and its sub-tree occupy the inclusive range
/// `index..=end` of the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    /// The user-defined load that the node owns
    pub(super) data: T,
    /// Arena index of the last descendant (the node's own index for a leaf)
    pub(super) end: usize,
}

impl<T> TreeNode<T> {
    pub(super) fn new(data: T, end: usize) -> Self {
        TreeNode { data, end }
    }

    pub fn get(&self) -> &T {
        &self.data
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of arena slots taken by the node and all its descendants. `index` is the
    /// node's own position in the arena.
    pub fn width(&self, index: usize) -> usize {
        self.end + 1 - index
    }

    pub fn is_leaf(&self, index: usize) -> bool {
        self.end == index
    }
}

impl<T> fmt::Display for TreeNode<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "End {}, payload: {}", self.end, self.data)
    }
}
