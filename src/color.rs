use core::fmt;

/// The color of a node in an [`RBTreeSet`](crate::RBTreeSet).
///
/// Every node is created [`Red`](Color::Red). The root is forced [`Black`](Color::Black) after
/// each insertion, and rebalancing recolors nodes along the insertion path.
///
/// # Examples
///
/// ```
/// use rbtree_set::{Color, RBTreeSet};
///
/// let set = RBTreeSet::from([1]);
/// assert_eq!(set.root_color(), Some(Color::Black));
/// assert_eq!(Color::Black.flipped(), Color::Red);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Returns `true` if the color is [`Red`](Color::Red).
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    /// Returns `true` if the color is [`Black`](Color::Black).
    #[must_use]
    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }

    /// Returns the opposite color.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Formats the color as the single letter used by the tree diagram: `R` or `B`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "R",
            Color::Black => "B",
        })
    }
}
