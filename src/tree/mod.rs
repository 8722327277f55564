//! Append-only, depth-first tree stored in a flat
//! [arena](https://en.wikipedia.org/wiki/Region-based_memory_management).
//!
//! The arena is always sorted in pre-order, so a node and its descendants occupy a
//! contiguous range of it. Each node records where that range ends, which is all that is
//! needed to walk the hierarchy without child references.

pub mod depth;
pub mod iterator;
pub mod node;
pub mod strand;

pub use depth::DepthLevel;
pub use iterator::{DepthFirstIterator, PreOrderIterator};
pub use node::TreeNode;
pub use strand::Tree;
