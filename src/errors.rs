//! Provides the error type used throughout this crate.

use crate::DepthLevel;
use thiserror::Error;

/// The error type used throughout this crate.
///
/// The tree assumes a disciplined caller that emits nodes in depth-first order. Errors
/// therefore signal a broken contract in the calling code and are not meant to be recovered
/// from in practice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Nodes can only attach to the current rightmost path or one level below its deepest node.
    #[error("Cannot append at depth {requested}: the deepest admissible depth is {admissible}")]
    DepthSkipped { requested: DepthLevel, admissible: usize },
}
