use alloc::boxed::Box;

use crate::Color;

/// Owned link to a child subtree. `None` is a leaf gap and counts as black.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A tree node. Nodes own their children and hold no reference to their parent.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) color: Color,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new red leaf.
    pub(crate) fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            color: Color::Red,
            left: None,
            right: None,
        })
    }

    pub(crate) fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    //            node                  child
    //            /  \                  /   \
    //          a    child    =>     node    c
    //               /   \           /  \
    //              b     c         a    b
    //
    /// Rotates `node` left and returns the new local root. In-order order is preserved.
    pub(crate) fn rotate_left(mut node: Box<Self>) -> Box<Self> {
        let Some(mut child) = node.right.take() else {
            return node;
        };
        node.right = child.left.take();
        child.left = Some(node);
        child
    }

    //              node              child
    //              /  \              /   \
    //          child   c     =>     a    node
    //          /   \                     /  \
    //         a     b                   b    c
    //
    /// Rotates `node` right and returns the new local root. In-order order is preserved.
    pub(crate) fn rotate_right(mut node: Box<Self>) -> Box<Self> {
        let Some(mut child) = node.left.take() else {
            return node;
        };
        node.left = child.right.take();
        child.right = Some(node);
        child
    }

    /// Rotates the left subtree left, then `node` right.
    pub(crate) fn rotate_left_right(mut node: Box<Self>) -> Box<Self> {
        node.left = node.left.take().map(Node::rotate_left);
        Node::rotate_right(node)
    }

    /// Rotates the right subtree right, then `node` left.
    pub(crate) fn rotate_right_left(mut node: Box<Self>) -> Box<Self> {
        node.right = node.right.take().map(Node::rotate_right);
        Node::rotate_left(node)
    }

    /// Toggles this node's color, then paints both children the opposite of the new color.
    pub(crate) fn flip_colors(&mut self) {
        self.color = self.color.flipped();
        let child_color = self.color.flipped();
        for child in [self.left.as_deref_mut(), self.right.as_deref_mut()]
            .into_iter()
            .flatten()
        {
            child.color = child_color;
        }
    }
}

/// A missing node is black.
pub(crate) fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.is_some_and(|n| n.color.is_red())
}

pub(crate) fn is_black<T>(node: Option<&Node<T>>) -> bool {
    !is_red(node)
}
