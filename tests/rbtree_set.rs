use std::collections::BTreeSet;

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rbtree_set::{Color, Direction, InvariantViolation, RBTreeSet};

/// The number of insertions to perform in each proptest case.
const TEST_SIZE: usize = 2_000;

/// Generates values in a range that ensures collisions.
fn value_strategy() -> impl Strategy<Value = i64> {
    -4_000i64..4_000i64
}

/// `(value, color, depth)` for every node, in the given order.
fn shape(set: &RBTreeSet<i64>, direction: Direction) -> Vec<(i64, Color, usize)> {
    set.traverse(direction)
        .map(|visit| (*visit.value, visit.color, visit.depth))
        .collect()
}

fn max_height(len: usize) -> usize {
    // 2 * log2(n + 1), rounded down.
    2 * (usize::BITS - (len + 1).leading_zeros() - 1) as usize
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn ascending_run_rotates_into_balanced_triple() {
    let set = RBTreeSet::from([10, 20, 30]);

    assert_eq!(
        shape(&set, Direction::Ascending),
        [(10, Color::Red, 1), (20, Color::Black, 0), (30, Color::Red, 1)]
    );
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    assert_eq!(set.validate(), Ok(0));
}

#[test]
fn zig_zag_insert_double_rotates() {
    let set = RBTreeSet::from([30, 10, 20]);

    assert_eq!(
        shape(&set, Direction::Ascending),
        [(10, Color::Red, 1), (20, Color::Black, 0), (30, Color::Red, 1)]
    );
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
}

#[test]
fn mirrored_zig_zag_double_rotates() {
    let set = RBTreeSet::from([10, 30, 20]);

    assert_eq!(
        shape(&set, Direction::Ascending),
        [(10, Color::Red, 1), (20, Color::Black, 0), (30, Color::Red, 1)]
    );
}

#[test]
fn descending_run_of_five_stays_shallow() {
    let set = RBTreeSet::from([50, 40, 30, 20, 10]);

    assert!(set.height() <= 3);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10, 20, 30, 40, 50]);
    assert_eq!(
        shape(&set, Direction::Descending),
        [
            (50, Color::Black, 1),
            (40, Color::Black, 0),
            (30, Color::Red, 2),
            (20, Color::Black, 1),
            (10, Color::Red, 2),
        ]
    );
    assert_eq!(set.validate(), Ok(1));
    assert_eq!(set.black_height(), 1);
}

#[test]
fn red_uncle_recolors_and_pushes_red_upward() {
    // 20 has two red children; inserting 5 below 10 recolors instead of rotating.
    let set = RBTreeSet::from([20, 10, 30, 5]);

    assert_eq!(
        shape(&set, Direction::Ascending),
        [
            (5, Color::Red, 2),
            (10, Color::Black, 1),
            (20, Color::Black, 0),
            (30, Color::Black, 1),
        ]
    );
}

#[test]
fn right_left_with_red_sibling_recolors() {
    // 20 has red children 10 and 30; 25 lands left of 30 and is fixed by a color flip.
    let set = RBTreeSet::from([20, 10, 30, 25]);

    assert_eq!(
        shape(&set, Direction::Ascending),
        [
            (10, Color::Black, 1),
            (20, Color::Black, 0),
            (25, Color::Red, 2),
            (30, Color::Black, 1),
        ]
    );
    assert!(set.validate().is_ok());
}

#[test]
fn duplicate_insert_is_noop() {
    let mut set = RBTreeSet::new();
    assert!(set.insert(5));
    assert!(!set.insert(5));

    assert_eq!(set.len(), 1);
    assert_eq!(shape(&set, Direction::Ascending), [(5, Color::Black, 0)]);
}

#[test]
fn empty_set() {
    let set: RBTreeSet<i64> = RBTreeSet::default();

    assert!(set.is_empty());
    assert_eq!(set.height(), 0);
    assert_eq!(set.black_height(), 0);
    assert_eq!(set.root_color(), None);
    assert_eq!(set.first(), None);
    assert_eq!(set.last(), None);
    assert_eq!(set.iter().next(), None);
    assert_eq!(set.validate(), Ok(0));
    assert_eq!(set.diagram().to_string(), "");
}

#[test]
fn clear_then_reuse() {
    let mut set: RBTreeSet<i64> = (0..100).collect();
    set.clear();
    assert!(set.is_empty());

    set.extend(&[3, 1, 2]);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    assert!(set.validate().is_ok());
}

#[test]
fn borrowed_lookup() {
    let set: RBTreeSet<String> = ["pear", "apple", "fig"].iter().map(|s| s.to_string()).collect();

    assert!(set.contains("fig"));
    assert!(!set.contains("kiwi"));
    assert_eq!(set.first().map(String::as_str), Some("apple"));
    assert_eq!(set.last().map(String::as_str), Some("pear"));
}

#[test]
fn clones_are_independent() {
    let original = RBTreeSet::from([1, 2, 3]);
    let mut copy = original.clone();
    copy.insert(4);

    assert_eq!(original.len(), 3);
    assert_eq!(copy.len(), 4);
    assert_ne!(original, copy);
}

#[test]
fn large_sequential_insert_respects_height_bound() {
    let set: RBTreeSet<u32> = (0..100_000).collect();

    assert_eq!(set.len(), 100_000);
    assert!(set.height() <= max_height(set.len()));
    assert_eq!(set.validate(), Ok(set.black_height()));
}

#[test]
fn invariant_violation_messages() {
    assert_eq!(InvariantViolation::RedRoot.to_string(), "root node is red");
    assert_eq!(
        InvariantViolation::ConsecutiveReds { depth: 3 }.to_string(),
        "red node at depth 3 has a red child"
    );
}

// ─── Randomized properties ───────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays random insertions on both RBTreeSet and BTreeSet and asserts identical results.
    #[test]
    fn insert_matches_btreeset(values in proptest::collection::vec(value_strategy(), TEST_SIZE)) {
        let mut rb_set = RBTreeSet::new();
        let mut bt_set = BTreeSet::new();

        for v in &values {
            prop_assert_eq!(rb_set.insert(*v), bt_set.insert(*v), "insert({})", v);
            prop_assert_eq!(rb_set.len(), bt_set.len());
        }

        prop_assert!(rb_set.iter().eq(bt_set.iter()));
        prop_assert!(rb_set.iter().rev().eq(bt_set.iter().rev()));
        prop_assert_eq!(rb_set.first(), bt_set.first());
        prop_assert_eq!(rb_set.last(), bt_set.last());
        for v in &values {
            prop_assert!(rb_set.contains(v));
        }
        prop_assert!(rb_set.into_iter().eq(bt_set.into_iter()));
    }

    /// Every single insertion leaves a valid red-black tree with a black root.
    #[test]
    fn invariants_hold_after_every_insert(values in proptest::collection::vec(value_strategy(), 0..400)) {
        let mut set = RBTreeSet::new();
        for v in values {
            set.insert(v);
            prop_assert_eq!(set.root_color(), Some(Color::Black));
            let black_height = set.validate();
            prop_assert_eq!(black_height, Ok(set.black_height()));
            prop_assert!(set.height() <= max_height(set.len()));
        }
    }

    /// In-order traversal is strictly ascending regardless of insertion order.
    #[test]
    fn traversal_is_strictly_ascending(values in proptest::collection::vec(value_strategy(), 0..TEST_SIZE)) {
        let set: RBTreeSet<i64> = values.into_iter().collect();

        let up: Vec<_> = set.traverse(Direction::Ascending).map(|v| *v.value).collect();
        prop_assert!(up.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(&up, &set.iter().copied().collect::<Vec<_>>());

        let mut down: Vec<_> = set.traverse(Direction::Descending).map(|v| *v.value).collect();
        down.reverse();
        prop_assert_eq!(up, down);
    }

    /// Re-inserting a present value leaves structure and colors untouched.
    #[test]
    fn duplicates_change_nothing(
        values in proptest::collection::vec(value_strategy(), 1..500),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut set: RBTreeSet<i64> = values.iter().copied().collect();
        let before = shape(&set, Direction::Ascending);

        prop_assert!(!set.insert(values[pick.index(values.len())]));
        prop_assert_eq!(shape(&set, Direction::Ascending), before);
    }

    /// The ascending iterator can be consumed from both ends without overlap.
    #[test]
    fn double_ended_iter_meets_in_the_middle(
        values in proptest::collection::vec(value_strategy(), 0..500),
        fronts in proptest::collection::vec(any::<bool>(), 0..600),
    ) {
        let set: RBTreeSet<i64> = values.iter().copied().collect();
        let expected: Vec<_> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();

        let mut iter = set.iter();
        let mut head = Vec::new();
        let mut tail = Vec::new();
        for front in fronts {
            let item = if front { iter.next() } else { iter.next_back() };
            match (item, front) {
                (Some(v), true) => head.push(*v),
                (Some(v), false) => tail.push(*v),
                (None, _) => break,
            }
            prop_assert_eq!(iter.len(), expected.len() - head.len() - tail.len());
        }
        head.extend(iter.copied());
        head.extend(tail.into_iter().rev());
        prop_assert_eq!(head, expected);
    }

    /// Every depth reported by the walk stays within the height bound, and the root is unique.
    #[test]
    fn depths_are_consistent(values in proptest::collection::vec(value_strategy(), 1..TEST_SIZE)) {
        let set: RBTreeSet<i64> = values.into_iter().collect();
        let visits: Vec<_> = set.traverse(Direction::Descending).collect();

        prop_assert_eq!(visits.len(), set.len());
        prop_assert_eq!(visits.iter().filter(|v| v.depth == 0).count(), 1);
        prop_assert_eq!(visits.iter().map(|v| v.depth + 1).max(), Some(set.height()));
    }
}
