use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::Color;
use crate::raw::Node;

/// Key order of a [`Traverse`].
///
/// [`Descending`](Direction::Descending) is the default because it matches the way
/// [`Diagram`](super::Diagram) draws a tree rotated a quarter turn: right subtree on top.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    Ascending,
    #[default]
    Descending,
}

impl Direction {
    /// The child visited before the node itself.
    fn near<T>(self, node: &Node<T>) -> Option<&Node<T>> {
        match self {
            Direction::Ascending => node.left(),
            Direction::Descending => node.right(),
        }
    }

    /// The child visited after the node itself.
    fn far<T>(self, node: &Node<T>) -> Option<&Node<T>> {
        match self {
            Direction::Ascending => node.right(),
            Direction::Descending => node.left(),
        }
    }
}

/// One node as seen by a [`Traverse`]: its value, color, and depth below the root.
#[derive(Debug, Eq, PartialEq, Hash)]
pub struct Visit<'a, T> {
    pub value: &'a T,
    pub color: Color,
    /// Edges between the root and this node; the root is at depth 0.
    pub depth: usize,
}

impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Visit<'_, T> {}

/// A lazy in-order walk over an [`RBTreeSet`](crate::RBTreeSet) reporting node colors and
/// depths.
///
/// This `struct` is created by the [`traverse`](crate::RBTreeSet::traverse) method.
/// Calling `traverse` again starts a fresh walk.
///
/// # Examples
///
/// ```
/// use rbtree_set::{Color, Direction, RBTreeSet};
///
/// let set = RBTreeSet::from([10, 20, 30]);
/// let walk: Vec<_> = set
///     .traverse(Direction::Descending)
///     .map(|visit| (*visit.value, visit.color, visit.depth))
///     .collect();
///
/// assert_eq!(walk, [(30, Color::Red, 1), (20, Color::Black, 0), (10, Color::Red, 1)]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Traverse<'a, T> {
    /// Nodes whose near subtree is being (or has been) walked, with their depths.
    stack: Vec<(&'a Node<T>, usize)>,
    direction: Direction,
}

impl<'a, T> Traverse<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, direction: Direction) -> Self {
        let mut traverse = Traverse {
            stack: Vec::new(),
            direction,
        };
        traverse.descend(root, 0);
        traverse
    }

    /// Returns the order this walk produces values in.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    fn descend(&mut self, mut node: Option<&'a Node<T>>, mut depth: usize) {
        while let Some(n) = node {
            self.stack.push((n, depth));
            node = self.direction.near(n);
            depth += 1;
        }
    }
}

impl<'a, T> Iterator for Traverse<'a, T> {
    type Item = Visit<'a, T>;

    fn next(&mut self) -> Option<Visit<'a, T>> {
        let (node, depth) = self.stack.pop()?;
        self.descend(self.direction.far(node), depth + 1);
        Some(Visit {
            value: &node.value,
            color: node.color,
            depth,
        })
    }
}

impl<T> FusedIterator for Traverse<'_, T> {}

impl<T> Clone for Traverse<'_, T> {
    fn clone(&self) -> Self {
        Traverse {
            stack: self.stack.clone(),
            direction: self.direction,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Traverse<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
