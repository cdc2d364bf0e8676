use thiserror::Error;

/// A broken red-black invariant reported by [`RBTreeSet::validate`](crate::RBTreeSet::validate).
///
/// Insertion maintains every invariant, so any of these indicates a bug in the tree itself rather
/// than a recoverable condition. `depth` counts edges from the root (the root is at depth 0).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("root node is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    ConsecutiveReds { depth: usize },
    #[error("node at depth {depth} has black height {left} on the left and {right} on the right")]
    BlackHeightMismatch {
        depth: usize,
        left: usize,
        right: usize,
    },
    #[error("node at depth {depth} is out of order with respect to an ancestor")]
    OutOfOrder { depth: usize },
    #[error("tree records {recorded} values but holds {counted}")]
    LengthMismatch { recorded: usize, counted: usize },
}
