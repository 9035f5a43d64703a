#![cfg(feature = "typeclass")]
//! Laws and scenarios for `Semigroup` and `Monoid`.
//!
//! - Associativity of derived semigroups (structural, tuple, option, reverse)
//! - Left and right identity of monoids
//! - Override-merge of settings and predicate combination

use fpkit::typeclass::{Monoid, Order, Predicate, Semigroup, all_of, any_of, predicate};
use proptest::prelude::*;
use rstest::rstest;

#[derive(Debug, Clone, Default, PartialEq)]
struct Settings {
    font_family: Option<String>,
    font_size: Option<u32>,
    max_column: Option<u32>,
}

fn settings_monoid() -> Monoid<Settings> {
    Monoid::structural()
        .field(|s: &mut Settings| &mut s.font_family, Monoid::option_last())
        .field(|s: &mut Settings| &mut s.font_size, Monoid::option_last())
        .field(|s: &mut Settings| &mut s.max_column, Monoid::option_last())
        .build()
}

fn settings_strategy() -> impl Strategy<Value = Settings> {
    (
        prop::option::of("[a-z]{1,4}"),
        prop::option::of(8u32..20),
        prop::option::of(40u32..120),
    )
        .prop_map(|(font_family, font_size, max_column)| Settings {
            font_family,
            font_size,
            max_column,
        })
}

// =============================================================================
// Associativity
// =============================================================================

proptest! {
    #[test]
    fn prop_structural_associativity(
        first in settings_strategy(),
        second in settings_strategy(),
        third in settings_strategy()
    ) {
        let monoid = settings_monoid();
        let left = monoid.concat(monoid.concat(first.clone(), second.clone()), third.clone());
        let right = monoid.concat(first, monoid.concat(second, third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_tuple_associativity(
        first in ("[a-z]{0,3}", -100i32..100),
        second in ("[a-z]{0,3}", -100i32..100),
        third in ("[a-z]{0,3}", -100i32..100)
    ) {
        let pair = Semigroup::tuple2(Semigroup::string(), Semigroup::max(Order::natural()));
        let left = pair.concat(pair.concat(first.clone(), second.clone()), third.clone());
        let right = pair.concat(first, pair.concat(second, third));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_option_associativity(first: Option<i16>, second: Option<i16>, third: Option<i16>) {
        for semigroup in [
            Semigroup::option(Semigroup::min(Order::natural())),
            Semigroup::option_apply(Semigroup::max(Order::natural())),
        ] {
            prop_assert_eq!(
                semigroup.concat(semigroup.concat(first, second), third),
                semigroup.concat(first, semigroup.concat(second, third))
            );
        }
    }

    #[test]
    fn prop_reverse_associativity(
        first in "[a-z]{0,3}",
        second in "[a-z]{0,3}",
        third in "[a-z]{0,3}"
    ) {
        let reversed = Semigroup::string().reverse();
        let left = reversed.concat(reversed.concat(first.clone(), second.clone()), third.clone());
        let right = reversed.concat(first.clone(), reversed.concat(second.clone(), third.clone()));
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, format!("{third}{second}{first}"));
    }
}

// =============================================================================
// Identity
// =============================================================================

proptest! {
    #[test]
    fn prop_structural_identity(value in settings_strategy()) {
        let monoid = settings_monoid();
        prop_assert_eq!(monoid.concat(monoid.empty(), value.clone()), value.clone());
        prop_assert_eq!(monoid.concat(value.clone(), monoid.empty()), value);
    }

    #[test]
    fn prop_product_identity(value in -1000i64..1000) {
        let product = Monoid::<i64>::product();
        prop_assert_eq!(product.concat(product.empty(), value), value);
        prop_assert_eq!(product.concat(value, product.empty()), value);
    }

    #[test]
    fn prop_option_apply_identity(value: Option<i32>) {
        let monoid = Monoid::option_apply(Monoid::<i32>::sum());
        let value = value.map(|n| n / 2);
        prop_assert_eq!(monoid.concat(monoid.empty(), value), value);
        prop_assert_eq!(monoid.concat(value, monoid.empty()), value);
    }

    #[test]
    fn prop_function_identity(argument: i32) {
        let monoid = Monoid::function(Monoid::any());
        let odd = predicate(|n: &i32| n % 2 != 0);
        let combined = monoid.concat(monoid.empty(), odd.clone());
        prop_assert_eq!(combined(&argument), odd(&argument));
    }
}

// =============================================================================
// Scenarios
// =============================================================================

#[rstest]
fn later_settings_override_earlier_ones_per_field() {
    let workspace = Settings {
        font_family: Some("Courier".to_string()),
        font_size: None,
        max_column: Some(80),
    };
    let user = Settings {
        font_family: Some("Fira Code".to_string()),
        font_size: Some(12),
        max_column: None,
    };

    let merged = settings_monoid().concat_all(vec![workspace, user]);
    assert_eq!(
        merged,
        Settings {
            font_family: Some("Fira Code".to_string()),
            font_size: Some(12),
            max_column: Some(80),
        }
    );
}

#[rstest]
fn first_option_keeps_earliest_setting() {
    let sizes = vec![None, Some(10), Some(12)];
    assert_eq!(Monoid::option_first().concat_all(sizes.clone()), Some(10));
    assert_eq!(Monoid::option_last().concat_all(sizes), Some(12));
}

fn checks() -> Vec<Predicate<i32>> {
    vec![
        predicate(|n: &i32| *n <= 4),
        predicate(|n: &i32| *n >= 0),
        predicate(|n: &i32| n % 2 == 1),
    ]
}

#[rstest]
#[case(11, true)]
#[case(-2, true)]
fn any_predicate_matches(#[case] value: i32, #[case] expected: bool) {
    assert_eq!(any_of(checks())(&value), expected);
}

#[rstest]
#[case(3, true)]
#[case(11, false)]
#[case(2, false)]
fn all_predicates_match(#[case] value: i32, #[case] expected: bool) {
    assert_eq!(all_of(checks())(&value), expected);
}

#[rstest]
fn intercalated_words() {
    let spaced = Semigroup::string().intercalate(" ".to_string());
    let words = vec!["b".to_string(), "c".to_string()];
    assert_eq!(spaced.concat_all("a".to_string(), words), "a b c");
}
