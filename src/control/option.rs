//! Extensions for `Option` as a presence/absence sum type.
//!
//! `std::option::Option` covers `map`, `and_then`, `filter`, `or_else`
//! (alternative), `unwrap_or_else`, `unwrap_or_default` and `is_some_and`
//! (existence). This module adds what is missing: elimination with
//! [`OptionExt::match_with`], navigation through optional fields with
//! [`OptionExt::chain_nullable_field`], membership under an explicit
//! [`Equality`], and a few constructors.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::OptionExt;
//!
//! struct Address { street: Option<String> }
//! struct Company { address: Option<Address> }
//!
//! let company = Company { address: Some(Address { street: Some("high street".into()) }) };
//!
//! let street = Some(&company)
//!     .chain_nullable_field(|company| &company.address)
//!     .chain_nullable_field(|address| &address.street);
//! assert_eq!(street.map(String::as_str), Some("high street"));
//! ```

use super::thrown;
use crate::typeclass::Equality;

/// A value that may be absent.
///
/// Implemented by `Option<T>`, whose value is `T`, and by `&Option<T>`,
/// whose value is `&T`, so a projector may hand out an optional field either
/// by value or by reference.
pub trait Nullable {
    /// The type of the present value.
    type Value;

    /// Converts into an `Option`.
    fn into_option(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    #[inline]
    fn into_option(self) -> Self {
        self
    }
}

impl<'a, T> Nullable for &'a Option<T> {
    type Value = &'a T;

    #[inline]
    fn into_option(self) -> Option<&'a T> {
        self.as_ref()
    }
}

/// Converts a possibly-absent value into an `Option`.
#[inline]
#[must_use]
pub fn from_nullable<N: Nullable>(value: N) -> Option<N::Value> {
    value.into_option()
}

/// Lifts a function returning a possibly-absent value into one returning
/// an `Option`.
#[must_use]
pub fn from_nullable_k<A, N, F>(function: F) -> impl Fn(A) -> Option<N::Value>
where
    N: Nullable,
    F: Fn(A) -> N,
{
    move |argument| function(argument).into_option()
}

/// Creates a function returning `Some(a)` when `predicate(&a)` holds.
#[must_use]
pub fn from_predicate<A, P>(predicate: P) -> impl Fn(A) -> Option<A>
where
    P: Fn(&A) -> bool,
{
    move |value| predicate(&value).then_some(value)
}

/// `Some(())` when `condition` holds, `None` otherwise.
///
/// Useful to stop an `and_then` chain early.
#[inline]
#[must_use]
pub fn guard(condition: bool) -> Option<()> {
    condition.then_some(())
}

/// Runs a computation that may panic, returning `None` if it does.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::option;
///
/// let values: Vec<i32> = Vec::new();
/// assert_eq!(option::try_catch(|| values[0]), None);
/// assert_eq!(option::try_catch(|| 1 + 1), Some(2));
/// ```
#[must_use]
pub fn try_catch<A, F>(computation: F) -> Option<A>
where
    F: FnOnce() -> A,
{
    thrown::catch(computation).ok()
}

/// Turns a partial conversion into a boolean predicate.
///
/// The returned predicate holds exactly for the values `partial` accepts.
/// To narrow a collection, pass the same partial function to
/// `Iterator::filter_map`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::option;
///
/// enum Shape { Circle(f64), Square(f64) }
///
/// let circle_radius = |shape: &Shape| match shape {
///     Shape::Circle(radius) => Some(*radius),
///     Shape::Square(_) => None,
/// };
/// let is_circle = option::get_refinement(circle_radius);
///
/// let shapes = vec![Shape::Circle(1.0), Shape::Square(2.0)];
/// assert_eq!(shapes.iter().filter(|shape| is_circle(*shape)).count(), 1);
/// let radii: Vec<f64> = shapes.iter().filter_map(circle_radius).collect();
/// assert_eq!(radii, vec![1.0]);
/// ```
#[must_use]
pub fn get_refinement<T, S, F>(partial: F) -> impl Fn(&T) -> bool
where
    F: Fn(&T) -> Option<S>,
{
    move |value| partial(value).is_some()
}

/// Operations on `Option` that std does not provide.
pub trait OptionExt<A>: Sized {
    /// Eliminates the option: `on_none` for `None`, `on_some` for `Some`.
    #[must_use]
    fn match_with<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B;

    /// Projects into a possibly-absent field, stopping at the first absence.
    #[must_use]
    fn chain_nullable_field<N, F>(self, projector: F) -> Option<N::Value>
    where
        N: Nullable,
        F: FnOnce(A) -> N;

    /// Whether the option holds a value equal to `value` under `equality`.
    #[must_use]
    fn elem(&self, equality: &Equality<A>, value: &A) -> bool;

    /// Keeps `self` if `other` is also present.
    #[must_use]
    fn ap_first<B>(self, other: Option<B>) -> Option<A>;

    /// Keeps `other` if `self` is also present.
    #[must_use]
    fn ap_second<B>(self, other: Option<B>) -> Option<B>;
}

impl<A> OptionExt<A> for Option<A> {
    #[inline]
    fn match_with<B, N, S>(self, on_none: N, on_some: S) -> B
    where
        N: FnOnce() -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Some(value) => on_some(value),
            None => on_none(),
        }
    }

    #[inline]
    fn chain_nullable_field<N, F>(self, projector: F) -> Option<N::Value>
    where
        N: Nullable,
        F: FnOnce(A) -> N,
    {
        self.and_then(|value| projector(value).into_option())
    }

    fn elem(&self, equality: &Equality<A>, value: &A) -> bool {
        self.as_ref()
            .is_some_and(|present| equality.equals(present, value))
    }

    fn ap_first<B>(self, other: Option<B>) -> Self {
        self.zip(other).map(|(value, _)| value)
    }

    fn ap_second<B>(self, other: Option<B>) -> Option<B> {
        self.and(other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Elimination
    // =========================================================================

    #[rstest]
    #[case(Some(1), "a number")]
    #[case(None, "a none")]
    fn match_with_selects_branch(#[case] input: Option<i32>, #[case] expected: &str) {
        assert_eq!(input.match_with(|| "a none", |_| "a number"), expected);
    }

    #[rstest]
    fn std_alternatives_and_defaults() {
        assert_eq!(Some(1).or_else(|| Some(2)), Some(1));
        assert_eq!(None.or_else(|| Some(2)), Some(2));
        assert_eq!(None::<i32>.unwrap_or_else(|| 0), 0);
        assert_eq!(None::<String>.unwrap_or_default(), "");
        assert!(Some(1).is_some_and(|n| n > 0));
        assert!(!None::<i32>.is_some_and(|n| n > 0));
    }

    // =========================================================================
    // Constructors
    // =========================================================================

    #[rstest]
    fn from_nullable_by_value_and_by_reference() {
        assert_eq!(from_nullable(Some(1)), Some(1));
        assert_eq!(from_nullable(None::<i32>), None);

        let field: Option<String> = Some("x".to_string());
        assert_eq!(from_nullable(&field), Some(&"x".to_string()));
    }

    #[rstest]
    fn from_nullable_k_lifts_lookups() {
        let lookup = from_nullable_k(|key: &str| match key {
            "one" => Some(1),
            _ => None,
        });
        assert_eq!(lookup("one"), Some(1));
        assert_eq!(lookup("two"), None);
    }

    #[rstest]
    #[case(2, Some(2))]
    #[case(3, None)]
    fn from_predicate_cases(#[case] input: i32, #[case] expected: Option<i32>) {
        let even = from_predicate(|n: &i32| n % 2 == 0);
        assert_eq!(even(input), expected);
    }

    #[rstest]
    fn guard_short_circuits_chains() {
        let halve = |n: i32| guard(n % 2 == 0).map(|()| n / 2);
        assert_eq!(halve(4), Some(2));
        assert_eq!(halve(3), None);
    }

    #[rstest]
    fn try_catch_recovers_from_index_panics() {
        let head = |values: &[i32]| try_catch(|| values[0]);
        assert_eq!(head(&[5, 6]), Some(5));
        assert_eq!(head(&[]), None);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    struct Street {
        name: Option<String>,
    }

    struct Address {
        street: Option<Street>,
    }

    struct Company {
        address: Option<Address>,
    }

    struct Employee {
        company: Option<Company>,
    }

    fn street_name(employee: &Employee) -> Option<&String> {
        Some(employee)
            .chain_nullable_field(|employee| &employee.company)
            .chain_nullable_field(|company| &company.address)
            .chain_nullable_field(|address| &address.street)
            .chain_nullable_field(|street| &street.name)
    }

    #[rstest]
    fn chain_nullable_field_reaches_nested_value() {
        let employee = Employee {
            company: Some(Company {
                address: Some(Address {
                    street: Some(Street {
                        name: Some("high street".to_string()),
                    }),
                }),
            }),
        };
        let name = street_name(&employee).map(String::as_str);
        assert_eq!(name, Some("high street"));
    }

    #[rstest]
    fn chain_nullable_field_stops_at_missing_field() {
        let employee = Employee {
            company: Some(Company {
                address: Some(Address {
                    street: Some(Street { name: None }),
                }),
            }),
        };
        assert_eq!(street_name(&employee), None);
        assert_eq!(street_name(&Employee { company: None }), None);
    }

    // =========================================================================
    // Membership and applicative helpers
    // =========================================================================

    #[rstest]
    #[case(Some(1), 1, true)]
    #[case(Some(1), 2, false)]
    #[case(None, 1, false)]
    fn elem_uses_equality(#[case] input: Option<i32>, #[case] value: i32, #[case] expected: bool) {
        assert_eq!(input.elem(&Equality::strict(), &value), expected);
    }

    #[rstest]
    fn ap_first_and_ap_second() {
        assert_eq!(Some(1).ap_first(Some("a")), Some(1));
        assert_eq!(Some(1).ap_first(None::<&str>), None);
        assert_eq!(Some(1).ap_second(Some("a")), Some("a"));
        assert_eq!(None::<i32>.ap_second(Some("a")), None);
    }

    #[rstest]
    fn refinement_filters_collections() {
        #[derive(Debug, PartialEq)]
        enum Boxed {
            Blue(u32),
            Red(u32),
        }

        let blue = |boxed: &Boxed| match boxed {
            Boxed::Blue(size) => Some(*size),
            Boxed::Red(_) => None,
        };
        let is_blue = get_refinement(blue);

        let boxes = vec![Boxed::Blue(1), Boxed::Red(2), Boxed::Blue(3)];
        let blues: Vec<&Boxed> = boxes.iter().filter(|boxed| is_blue(*boxed)).collect();
        assert_eq!(blues, vec![&Boxed::Blue(1), &Boxed::Blue(3)]);
        let sizes: Vec<u32> = boxes.iter().filter_map(blue).collect();
        assert_eq!(sizes, vec![1, 3]);
    }
}
