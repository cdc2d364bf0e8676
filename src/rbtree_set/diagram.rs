use core::fmt;

use super::{Direction, RBTreeSet};

/// Spaces per level of depth unless [`Diagram::indent`] says otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// A text rendering of an [`RBTreeSet`]'s shape, one node per line.
///
/// Each line is indented by the node's depth times [`indent`](Diagram::indent) spaces and holds
/// the value followed by its color letter (`R` or `B`). With the default
/// [`Direction::Descending`] the tree reads as if rotated a quarter turn counter-clockwise: the
/// right subtree is printed above its parent and the left subtree below.
///
/// This `struct` is created by the [`diagram`](RBTreeSet::diagram) method.
///
/// # Examples
///
/// ```
/// use rbtree_set::RBTreeSet;
///
/// let set = RBTreeSet::from([10, 20, 30]);
/// assert_eq!(set.diagram().to_string(), "    30R\n20B\n    10R\n");
/// assert_eq!(set.diagram().indent(1).to_string(), " 30R\n20B\n 10R\n");
/// ```
#[must_use = "a diagram does nothing unless displayed"]
pub struct Diagram<'a, T> {
    set: &'a RBTreeSet<T>,
    indent: usize,
    direction: Direction,
}

impl<'a, T> Diagram<'a, T> {
    pub(crate) fn new(set: &'a RBTreeSet<T>) -> Self {
        Diagram {
            set,
            indent: DEFAULT_INDENT,
            direction: Direction::default(),
        }
    }

    /// Sets the number of spaces per level of depth.
    ///
    /// A line's padding saturates at `usize::MAX` spaces instead of overflowing.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the order nodes are printed in, top line first.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

impl<T> Clone for Diagram<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Diagram<'_, T> {}

impl<T: fmt::Display> fmt::Display for Diagram<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for visit in self.set.traverse(self.direction) {
            pad(f, visit.depth.saturating_mul(self.indent))?;
            writeln!(f, "{}{}", visit.value, visit.color)?;
        }
        Ok(())
    }
}

fn pad(f: &mut fmt::Formatter<'_>, mut width: usize) -> fmt::Result {
    const SPACES: &str = "                                ";

    while width > 0 {
        let chunk = width.min(SPACES.len());
        f.write_str(&SPACES[..chunk])?;
        width -= chunk;
    }
    Ok(())
}

impl<T: fmt::Display> fmt::Debug for Diagram<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
