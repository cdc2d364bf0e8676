use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

use crate::raw::{Link, Node, RawRBTree};
use crate::{Color, InvariantViolation};

mod diagram;
mod traverse;

pub use diagram::{DEFAULT_INDENT, Diagram};
pub use traverse::{Direction, Traverse, Visit};

/// An ordered set based on a red-black tree.
///
/// Nodes keep no parent pointer. An insertion descends recursively to an empty slot and, as the
/// recursion unwinds, each ancestor looks two levels down for a red node with a red child and
/// repairs it with a rotation or a color flip. The height of the tree never exceeds
/// `2 * log2(n + 1)`.
///
/// Values cannot be removed once inserted, other than by [`clear`](RBTreeSet::clear)ing the set.
///
/// It is a logic error for a value to be modified in such a way that its ordering relative to any
/// other value, as determined by the [`Ord`] trait, changes while it is in the set. The behavior
/// resulting from such a logic error is not specified, but will not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use rbtree_set::RBTreeSet;
///
/// let mut primes = RBTreeSet::new();
/// primes.insert(7);
/// primes.insert(2);
/// primes.insert(5);
/// primes.insert(3);
///
/// assert!(primes.contains(&5));
/// assert!(!primes.insert(2));
/// assert_eq!(primes.iter().copied().collect::<Vec<_>>(), [2, 3, 5, 7]);
/// assert!(primes.validate().is_ok());
/// ```
pub struct RBTreeSet<T> {
    tree: RawRBTree<T>,
}

/// An iterator over the values of an `RBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`RBTreeSet`].
/// See its documentation for more.
///
/// [`iter`]: RBTreeSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    /// Left spine of the unvisited front; top is the next value.
    front: Vec<&'a Node<T>>,
    /// Right spine of the unvisited back; top is the next value from the back.
    back: Vec<&'a Node<T>>,
    remaining: usize,
}

/// An owning iterator over the values of an `RBTreeSet`, in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`RBTreeSet`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: RBTreeSet#method.into_iter
pub struct IntoIter<T> {
    stack: Vec<Box<Node<T>>>,
    remaining: usize,
}

impl<T> RBTreeSet<T> {
    /// Makes a new, empty `RBTreeSet`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let mut set: RBTreeSet<i32> = RBTreeSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        RBTreeSet {
            tree: RawRBTree::new(),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let mut v = RBTreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let mut v = RBTreeSet::from([1, 2]);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Adds a value to the set.
    ///
    /// Returns whether the value was newly inserted. That is:
    ///
    /// - If the set did not previously contain an equal value, `true` is returned.
    /// - If the set already contained an equal value, `false` is returned, and neither the set's
    ///   structure nor its colors change. The stored value is kept and `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let mut set = RBTreeSet::new();
    ///
    /// assert_eq!(set.insert(2), true);
    /// assert_eq!(set.insert(2), false);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.tree.insert(value)
    }

    /// Returns `true` if the set contains an element equal to the value.
    ///
    /// The value may be any borrowed form of the set's element type,
    /// but the ordering on the borrowed form *must* match the
    /// ordering on the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set = RBTreeSet::from([1, 2, 3]);
    /// assert_eq!(set.contains(&1), true);
    /// assert_eq!(set.contains(&4), false);
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value).is_some()
    }

    /// Returns a reference to the element in the set, if any, that is equal to the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set = RBTreeSet::from([String::from("a"), String::from("b")]);
    /// assert_eq!(set.get("b").map(String::as_str), Some("b"));
    /// assert_eq!(set.get("c"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(value)
    }

    /// Returns a reference to the first (smallest) element in the set, if any.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns a reference to the last (largest) element in the set, if any.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    ///
    /// An empty set has height 0. For `n` elements the height is at most `2 * log2(n + 1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set: RBTreeSet<u32> = (0..1000).collect();
    /// assert!(set.height() <= 2 * 10);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        self.tree.height()
    }

    /// Returns the number of black nodes on any path from the root down to an empty child slot,
    /// not counting the root itself. An empty set has black height 0.
    #[must_use]
    pub fn black_height(&self) -> usize {
        self.tree.black_height()
    }

    /// Returns the color of the root node, or `None` for an empty set.
    ///
    /// Outside of an insertion the root is always [`Color::Black`].
    #[must_use]
    pub fn root_color(&self) -> Option<Color> {
        self.tree.root().map(|root| root.color)
    }

    /// Gets an iterator that visits the elements in the `RBTreeSet` in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set = RBTreeSet::from([3, 1, 2]);
    /// let mut set_iter = set.iter();
    /// assert_eq!(set_iter.next(), Some(&1));
    /// assert_eq!(set_iter.next_back(), Some(&3));
    /// assert_eq!(set_iter.next(), Some(&2));
    /// assert_eq!(set_iter.next(), None);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.tree.root(), self.len())
    }

    /// Walks the tree in key order, reporting each node's value, color, and depth.
    ///
    /// See [`Traverse`] for an example.
    pub fn traverse(&self, direction: Direction) -> Traverse<'_, T> {
        Traverse::new(self.tree.root(), direction)
    }

    /// Returns a printable rendering of the tree's shape and colors.
    ///
    /// See [`Diagram`] for the format.
    pub fn diagram(&self) -> Diagram<'_, T> {
        Diagram::new(self)
    }

    /// Checks the red-black invariants and returns the black height on success.
    ///
    /// The checks are: the root is black, no red node has a red child, every path from a node to
    /// an empty child slot passes the same number of black nodes, values are in strictly
    /// ascending in-order order, and the node count matches [`len`](RBTreeSet::len).
    ///
    /// Insertion maintains all of these, so an error here means the tree is corrupt.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found, searching depth-first from the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set: RBTreeSet<u32> = (0..100).rev().collect();
    /// assert_eq!(set.validate(), Ok(set.black_height()));
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation>
    where
        T: Ord,
    {
        self.tree.validate()
    }
}

impl<T: Hash> Hash for RBTreeSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: PartialEq> PartialEq for RBTreeSet<T> {
    fn eq(&self, other: &RBTreeSet<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RBTreeSet<T> {}

impl<T: PartialOrd> PartialOrd for RBTreeSet<T> {
    fn partial_cmp(&self, other: &RBTreeSet<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RBTreeSet<T> {
    fn cmp(&self, other: &RBTreeSet<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Clone> Clone for RBTreeSet<T> {
    fn clone(&self) -> Self {
        RBTreeSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RBTreeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for RBTreeSet<T> {
    fn default() -> Self {
        RBTreeSet::new()
    }
}

impl<T: Ord> FromIterator<T> for RBTreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = RBTreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for RBTreeSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for RBTreeSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for RBTreeSet<T> {
    /// Inserts the array's values in order, so the resulting shape matches inserting them one
    /// at a time.
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set1 = RBTreeSet::from([1, 2, 3, 4]);
    /// let set2: RBTreeSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<T> IntoIterator for RBTreeSet<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the `RBTreeSet`'s contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_set::RBTreeSet;
    ///
    /// let set = RBTreeSet::from([1, 2, 3, 4]);
    ///
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        let remaining = self.len();
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining,
        };
        iter.push_left_spine(self.tree.take_root());
        iter
    }
}

impl<'a, T> IntoIterator for &'a RBTreeSet<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Iter {
            front: Vec::new(),
            back: Vec::new(),
            remaining: len,
        };
        iter.push_front_spine(root);
        iter.push_back_spine(root);
        iter
    }

    fn push_front_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.front.push(n);
            node = n.left();
        }
    }

    fn push_back_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.back.push(n);
            node = n.right();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front.pop()?;
        self.push_front_spine(node.right());
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a T> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back.pop()?;
        self.push_back_spine(node.left());
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.clone().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Default for Iter<'_, T> {
    /// Creates an empty `rbtree_set::Iter`.
    ///
    /// ```
    /// # use rbtree_set::rbtree_set;
    /// let iter: rbtree_set::Iter<'_, u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        Iter {
            front: Vec::new(),
            back: Vec::new(),
            remaining: 0,
        }
    }
}

impl<T> IntoIter<T> {
    fn push_left_spine(&mut self, mut link: Link<T>) {
        while let Some(mut node) = link {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = self.stack.pop()?;
        let Node { value, right, .. } = *node;
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<T> Default for IntoIter<T> {
    /// Creates an empty `rbtree_set::IntoIter`.
    ///
    /// ```
    /// # use rbtree_set::rbtree_set;
    /// let iter: rbtree_set::IntoIter<u8> = Default::default();
    /// assert_eq!(iter.len(), 0);
    /// ```
    fn default() -> Self {
        IntoIter {
            stack: Vec::new(),
            remaining: 0,
        }
    }
}
