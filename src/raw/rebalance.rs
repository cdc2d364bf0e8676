use alloc::boxed::Box;

use tracing::trace;

use super::node::{Node, is_black, is_red};

/// A red node with a red child, seen from the grandparent two levels above the lower red node.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Violation {
    LeftLeft,
    LeftRight,
    RightRight,
    RightLeft,
}

impl Violation {
    /// Finds the red-red pattern below `node`, checking the cases in a fixed order.
    pub(crate) fn detect<T>(node: &Node<T>) -> Option<Self> {
        let left = node.left();
        let right = node.right();

        if is_red(left) && is_red(left.and_then(Node::left)) {
            return Some(Violation::LeftLeft);
        }
        if is_red(left) && is_red(left.and_then(Node::right)) {
            return Some(Violation::LeftRight);
        }
        if is_red(right) && is_red(right.and_then(Node::right)) {
            return Some(Violation::RightRight);
        }
        if is_red(right) && is_red(right.and_then(Node::left)) {
            return Some(Violation::RightLeft);
        }
        None
    }
}

/// Repairs a red-red violation rooted two levels below `node` and returns the subtree root that
/// replaces `node` in its parent's slot.
///
/// A black (or missing) sibling of the red child means the violation is removed by rotating.
/// A red sibling means a recolor is enough, which may push a new violation one level up where
/// the next frame of the unwind will see it.
pub(crate) fn rebalance<T>(node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(violation) = Violation::detect(&node) else {
        return node;
    };

    let rotate = match violation {
        Violation::LeftLeft | Violation::LeftRight => is_black(node.right()),
        Violation::RightRight | Violation::RightLeft => is_black(node.left()),
    };

    let mut top = if rotate {
        match violation {
            Violation::LeftLeft => Node::rotate_right(node),
            Violation::LeftRight => Node::rotate_left_right(node),
            Violation::RightRight => Node::rotate_left(node),
            Violation::RightLeft => Node::rotate_right_left(node),
        }
    } else {
        node
    };
    trace!(?violation, rotate, "rebalanced");

    top.flip_colors();
    top
}
