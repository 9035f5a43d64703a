#![cfg(feature = "typeclass")]
//! Laws and scenarios for `Equality` and `Order`.
//!
//! - Equality: reflexivity, symmetry, transitivity
//! - Order: consistency with equality, antisymmetry, transitivity
//! - Sorting: stability, left-to-right tie-breaking, input left untouched

use std::cmp::Ordering;

use fpkit::typeclass::{Equality, Order, sort, sort_by};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Song {
    title: String,
    year: u32,
    likes: u32,
}

fn song(title: &str, year: u32, likes: u32) -> Song {
    Song {
        title: title.to_string(),
        year,
        likes,
    }
}

fn by_year() -> Order<Song> {
    Order::<u32>::natural().contramap(|song: &Song| song.year)
}

fn by_likes() -> Order<Song> {
    Order::<u32>::natural().contramap(|song: &Song| song.likes)
}

fn by_title() -> Order<Song> {
    Order::<String>::natural().contramap_ref(|song: &Song| &song.title)
}

// =============================================================================
// Equality Laws
// =============================================================================

fn absolute() -> Equality<i32> {
    Equality::<i32>::strict().contramap(|n: &i32| n.wrapping_abs())
}

proptest! {
    #[test]
    fn prop_contramap_equality_is_reflexive(value: i32) {
        prop_assert!(absolute().equals(&value, &value));
    }

    #[test]
    fn prop_contramap_equality_is_symmetric(first in -50i32..50, second in -50i32..50) {
        let equality = absolute();
        let forward = equality.equals(&first, &second);
        prop_assert_eq!(forward, equality.equals(&second, &first));
    }

    #[test]
    fn prop_contramap_equality_is_transitive(
        first in -5i32..5,
        second in -5i32..5,
        third in -5i32..5
    ) {
        let equality = absolute();
        if equality.equals(&first, &second) && equality.equals(&second, &third) {
            prop_assert!(equality.equals(&first, &third));
        }
    }

    #[test]
    fn prop_vec_equality_matches_partial_eq(
        first in prop::collection::vec(0u8..3, 0..4),
        second in prop::collection::vec(0u8..3, 0..4)
    ) {
        let equality = Equality::vec(Equality::strict());
        prop_assert_eq!(equality.equals(&first, &second), first == second);
    }
}

// =============================================================================
// Order Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compare_equal_iff_equals(first in 0u32..4, second in 0u32..4, likes in 0u32..4) {
        let order = by_year().then(&by_likes());
        let left = song("a", first, likes);
        let right = song("b", second, likes);
        prop_assert_eq!(
            order.compare(&left, &right) == Ordering::Equal,
            order.equals(&left, &right)
        );
        prop_assert_eq!(
            order.to_equality().equals(&left, &right),
            order.equals(&left, &right)
        );
    }

    #[test]
    fn prop_compare_is_antisymmetric(first: i64, second: i64) {
        let order = Order::<i64>::natural().reverse();
        let backward = order.compare(&second, &first);
        prop_assert_eq!(order.compare(&first, &second), backward.reverse());
    }

    #[test]
    fn prop_compare_is_transitive(first: (i8, i8), second: (i8, i8), third: (i8, i8)) {
        let order = Order::tuple2(Order::natural(), Order::<i8>::natural().reverse());
        if order.leq(&first, &second) && order.leq(&second, &third) {
            prop_assert!(order.leq(&first, &third));
        }
    }

    #[test]
    fn prop_max_is_min_of_reverse(first: i32, second: i32) {
        let order = Order::<i32>::natural();
        prop_assert_eq!(order.max(first, second), order.reverse().min(first, second));
        prop_assert_eq!(order.max(first, second), first.max(second));
    }

    #[test]
    fn prop_sort_matches_stable_std_sort(
        values in prop::collection::vec((0u8..4, 0u16..100), 0..30)
    ) {
        let by_key = Order::<u8>::natural().contramap(|pair: &(u8, u16)| pair.0);
        let mut expected = values.clone();
        expected.sort_by_key(|pair| pair.0);
        prop_assert_eq!(sort(&by_key, &values), expected);
    }
}

// =============================================================================
// Sorting Scenarios
// =============================================================================

#[rstest]
fn sort_returns_new_sequence_and_leaves_input() {
    let releases = vec![song("later", 2020, 0), song("earlier", 2018, 0)];
    let sorted = sort(&by_year(), &releases);

    let expected = vec![song("earlier", 2018, 0), song("later", 2020, 0)];
    assert_eq!(sorted, expected);
    assert_eq!(releases[0].year, 2020);
}

#[rstest]
fn sort_by_applies_orderings_left_to_right() {
    let songs = vec![
        song("c", 2019, 10),
        song("a", 2018, 10),
        song("b", 2019, 5),
        song("d", 2019, 10),
    ];

    let sorted = sort_by(&[by_year(), by_likes().reverse(), by_title()], &songs);
    let titles: Vec<&str> = sorted.iter().map(|song| song.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c", "d", "b"]);
}

#[rstest]
fn sort_by_without_orderings_keeps_input_order() {
    let songs = vec![song("z", 1, 1), song("a", 0, 0)];
    assert_eq!(sort_by(&[], &songs), songs);
}

#[rstest]
#[case(5, 0, 10, 5)]
#[case(-3, 0, 10, 0)]
#[case(42, 0, 10, 10)]
fn clamp_and_between(
    #[case] value: i32,
    #[case] low: i32,
    #[case] high: i32,
    #[case] expected: i32,
) {
    let order = Order::<i32>::natural();
    assert_eq!(order.clamp(value, low, high), expected);
    assert_eq!(order.between(&value, &low, &high), value == expected);
}

// =============================================================================
// Contramap Scenario
// =============================================================================

#[derive(Debug, Clone)]
struct Artist {
    id: u32,
    name: String,
}

fn artist(id: u32, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
    }
}

#[rstest]
fn records_equal_by_projected_identifier() {
    let by_id = Equality::<u32>::strict().contramap(|artist: &Artist| artist.id);
    let upper = artist(1, "EDEN");
    let lower = artist(1, "eden");
    let other = artist(2, "EDEN");

    assert!(by_id.equals(&upper, &lower));
    assert!(!by_id.equals(&upper, &other));
    assert_ne!(upper.name, lower.name);
}

#[rstest]
fn structural_equality_over_selected_fields() {
    let by_name_and_id = Equality::structural()
        .field(|artist: &Artist| &artist.id, Equality::strict())
        .field(|artist: &Artist| &artist.name, Equality::strict())
        .build();
    let first = artist(1, "EDEN");
    let second = artist(1, "eden");

    assert!(!by_name_and_id.equals(&first, &second));
    assert!(by_name_and_id.equals(&first, &first.clone()));
}
