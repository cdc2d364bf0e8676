use alloc::boxed::Box;
use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use tracing::debug;

use super::node::{Link, Node, is_red};
use super::rebalance::rebalance;
use crate::{Color, InvariantViolation};

/// The red-black tree backing `RBTreeSet`.
#[derive(Clone, Debug)]
pub(crate) struct RawRBTree<T> {
    /// Root node, if the tree is non-empty.
    root: Link<T>,
    /// Number of values stored.
    len: usize,
}

impl<T> RawRBTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Takes the whole tree out, leaving it empty.
    pub(crate) fn take_root(&mut self) -> Link<T> {
        self.len = 0;
        self.root.take()
    }

    pub(crate) fn clear(&mut self) {
        drop(self.take_root());
    }

    /// Inserts `value`, returning `false` if an equal value was already present.
    pub(crate) fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (mut root, inserted) = insert_at(self.root.take(), value);
        root.color = Color::Black;
        self.root = Some(root);

        if inserted {
            self.len += 1;
        } else {
            debug!(len = self.len, "value already present, tree unchanged");
        }

        #[cfg(feature = "strict-invariants")]
        debug_assert_eq!(self.validate().err(), None, "red-black invariant broken by insert");

        inserted
    }

    pub(crate) fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut node = self.root();
        while let Some(n) = node {
            node = match value.cmp(n.value.borrow()) {
                Less => n.left(),
                Greater => n.right(),
                Equal => return Some(&n.value),
            };
        }
        None
    }

    pub(crate) fn first(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(&node.value)
    }

    pub(crate) fn last(&self) -> Option<&T> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(&node.value)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        fn height<T>(node: Option<&Node<T>>) -> usize {
            node.map_or(0, |n| 1 + height(n.left()).max(height(n.right())))
        }
        height(self.root())
    }

    /// Black nodes below the root on any root-to-gap path. Only meaningful on a valid tree.
    pub(crate) fn black_height(&self) -> usize {
        let Some(root) = self.root() else {
            return 0;
        };
        let mut blacks = 0;
        let mut node = root.left();
        while let Some(n) = node {
            if n.color.is_black() {
                blacks += 1;
            }
            node = n.left();
        }
        blacks
    }

    /// Checks every red-black invariant plus search order and the recorded length.
    /// Returns the black height on success.
    pub(crate) fn validate(&self) -> Result<usize, InvariantViolation>
    where
        T: Ord,
    {
        let Some(root) = self.root() else {
            return match self.len {
                0 => Ok(0),
                recorded => Err(InvariantViolation::LengthMismatch { recorded, counted: 0 }),
            };
        };
        if root.color.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        let mut counted = 0;
        let blacks = validate_subtree(Some(root), None, None, 0, &mut counted)?;
        if counted != self.len {
            return Err(InvariantViolation::LengthMismatch {
                recorded: self.len,
                counted,
            });
        }
        // The root is black and not counted.
        Ok(blacks - 1)
    }
}

/// Recursive insertion. Returns the subtree root that replaces `node` and whether a value was
/// added. Rebalancing runs on every frame of the unwind, standing in for a parent pointer.
fn insert_at<T: Ord>(node: Link<T>, value: T) -> (Box<Node<T>>, bool) {
    let Some(mut node) = node else {
        return (Node::new(value), true);
    };

    let inserted = match value.cmp(&node.value) {
        Less => {
            let (child, inserted) = insert_at(node.left.take(), value);
            node.left = Some(child);
            inserted
        }
        Greater => {
            let (child, inserted) = insert_at(node.right.take(), value);
            node.right = Some(child);
            inserted
        }
        Equal => false,
    };

    // A duplicate changes no colors, so there is nothing to repair on the way up.
    if inserted {
        (rebalance(node), true)
    } else {
        (node, false)
    }
}

/// Returns the number of black nodes from `node` (inclusive) down to any gap.
fn validate_subtree<T: Ord>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
    depth: usize,
    counted: &mut usize,
) -> Result<usize, InvariantViolation> {
    let Some(n) = node else {
        return Ok(0);
    };
    *counted += 1;

    if lower.is_some_and(|lo| n.value <= *lo) || upper.is_some_and(|hi| n.value >= *hi) {
        return Err(InvariantViolation::OutOfOrder { depth });
    }
    if n.color.is_red() && (is_red(n.left()) || is_red(n.right())) {
        return Err(InvariantViolation::ConsecutiveReds { depth });
    }

    let left = validate_subtree(n.left(), lower, Some(&n.value), depth + 1, counted)?;
    let right = validate_subtree(n.right(), Some(&n.value), upper, depth + 1, counted)?;
    if left != right {
        return Err(InvariantViolation::BlackHeightMismatch { depth, left, right });
    }

    Ok(left + usize::from(n.color.is_black()))
}
