//! Depth of a node relative to the root level of a [Tree](super::Tree).

use core::fmt;

/// Depth in the tree, where `0` is the root level. A tree may have several nodes at the
/// root level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DepthLevel(usize);

impl DepthLevel {
    /// The level of the top-most nodes
    pub const ROOT: DepthLevel = DepthLevel(0);

    pub const fn new(level: usize) -> Self {
        DepthLevel(level)
    }

    pub const fn value(&self) -> usize {
        self.0
    }

    /// The level of the children of a node at this level
    pub const fn incremented(&self) -> Self {
        DepthLevel(self.0 + 1)
    }

    /// The level of the parent of a node at this level.
    ///
    /// Must not be called on [DepthLevel::ROOT] (overflows).
    pub const fn decremented(&self) -> Self {
        DepthLevel(self.0 - 1)
    }
}

impl From<usize> for DepthLevel {
    fn from(level: usize) -> Self {
        DepthLevel(level)
    }
}

impl fmt::Display for DepthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
