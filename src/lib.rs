//! A red-black tree ordered set for Rust, without parent pointers.
//!
//! This crate provides [`RBTreeSet`], an ordered set whose nodes hold only their value, their
//! [`Color`], and their two children. Instead of walking back up through parent links after an
//! insertion, the tree repairs itself on the way out of the recursive descent: every ancestor
//! of the new node looks two levels down for a red node with a red child and fixes it with a
//! rotation or a color flip before handing its (possibly new) subtree root to its own parent.
//!
//! # Example
//!
//! ```
//! use rbtree_set::{Color, Direction, RBTreeSet};
//!
//! let mut set = RBTreeSet::new();
//! for value in [10, 20, 30] {
//!     set.insert(value);
//! }
//!
//! // Ascending input forced a rotation: 20 is now the black root.
//! assert_eq!(set.root_color(), Some(Color::Black));
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
//!
//! // Walk the shape, right subtree first.
//! let depths: Vec<_> = set
//!     .traverse(Direction::Descending)
//!     .map(|visit| (*visit.value, visit.depth))
//!     .collect();
//! assert_eq!(depths, [(30, 1), (20, 0), (10, 1)]);
//!
//! // Or print it.
//! print!("{}", set.diagram());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Insert-only** - Values are never removed individually; [`RBTreeSet::clear`] drops them all
//! - **Self-checking** - [`RBTreeSet::validate`] verifies every red-black invariant, and the
//!   `strict-invariants` cargo feature runs it after each insertion in debug builds
//! - **Observable** - Rebalancing emits `tracing` events at the `trace` level
//!
//! # Implementation
//!
//! New nodes are red. On the unwind, a node whose red child has a red child of its own is
//! resolved by one of four cases (left-left, left-right, right-right, right-left), checked in
//! that order. If the red child's sibling is black the node is rotated (twice for the zig-zag
//! cases); either way the resulting top node's colors are flipped. The root is painted black
//! once the whole insertion has returned.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod color;
mod error;
mod raw;

pub mod rbtree_set;

pub use color::Color;
pub use error::InvariantViolation;
pub use rbtree_set::{DEFAULT_INDENT, Diagram, Direction, RBTreeSet, Traverse, Visit};
