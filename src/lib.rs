//! ## About
//!
//! This crate contains an append-only tree that is stored *depth-first* in a single flat
//! buffer. It is meant for workloads that produce nodes strictly in pre-order, for instance a
//! parser that builds a syntax tree while scanning its input from left to right. Nodes are
//! never inserted at arbitrary positions, removed or reordered.
//!
//! Instead of references to children, each node stores the index of its last descendant (its
//! *span*). Traversal reconstructs the hierarchy from these spans on demand, see
//! [DepthFirstIterator].
//!
//! See the [Tree] struct to get started.
//!
//! ```rust
//! use strandtree::{DepthLevel, Tree};
//!
//! let mut tree = Tree::new();
//! tree.append("A", DepthLevel::ROOT);
//! tree.append("B", DepthLevel::new(1));
//! tree.append("C", DepthLevel::new(1));
//! tree.append("D", DepthLevel::ROOT);
//!
//! assert_eq!(tree.last(DepthLevel::ROOT), Some(&"D"));
//! assert_eq!(tree.last(DepthLevel::new(1)), None);
//!
//! let mut roots = tree.iter();
//! let (a, children) = roots.next().unwrap();
//! assert_eq!(*a, "A");
//! assert_eq!(children.unwrap().map(|(data, _)| *data).collect::<Vec<_>>(), ["B", "C"]);
//! ```
//!
//! ## Naming conventions
//! * Structs – substantives that indicate entities implementing a behavior
//! * Methods – imperative forms (`append`), getters are substantives without a `get_` prefix
//!             (`last`, `nodes`). Fallible variants of panicking methods carry a `try_` prefix

pub mod errors;
pub mod tree;

pub use errors::TreeError;
pub use tree::{DepthFirstIterator, DepthLevel, PreOrderIterator, Tree, TreeNode};
