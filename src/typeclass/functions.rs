//! Shareable function values and predicate combination.
//!
//! Semigroups and monoids over functions combine them pointwise, so the
//! functions have to be first-class, cloneable values: [`Function<A, B>`]
//! is a reference-counted `Fn(&A) -> B`, and [`Predicate<A>`] is the
//! boolean-valued special case.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::{all_of, any_of, predicate};
//!
//! let checks = vec![
//!     predicate(|n: &i32| *n <= 4),
//!     predicate(|n: &i32| *n >= 0),
//!     predicate(|n: &i32| n % 2 == 1),
//! ];
//!
//! assert!(any_of(checks.clone())(&11));
//! assert!(all_of(checks)(&3));
//! ```

use std::sync::Arc;

use super::Monoid;

/// A cloneable, thread-safe function from `&A` to `B`.
pub type Function<A, B> = Arc<dyn Fn(&A) -> B + Send + Sync>;

/// A cloneable, thread-safe predicate over `A`.
pub type Predicate<A> = Function<A, bool>;

/// Wraps a closure as a [`Function`].
#[must_use]
pub fn function<A, B, F>(function: F) -> Function<A, B>
where
    F: Fn(&A) -> B + Send + Sync + 'static,
{
    Arc::new(function)
}

/// Wraps a closure as a [`Predicate`].
#[must_use]
pub fn predicate<A, F>(predicate: F) -> Predicate<A>
where
    F: Fn(&A) -> bool + Send + Sync + 'static,
{
    Arc::new(predicate)
}

/// Combines predicates by conjunction. With no predicates every value passes.
#[must_use]
pub fn all_of<A: 'static, I>(predicates: I) -> Predicate<A>
where
    I: IntoIterator<Item = Predicate<A>>,
{
    Monoid::function(Monoid::all()).concat_all(predicates)
}

/// Combines predicates by disjunction. With no predicates no value passes.
#[must_use]
pub fn any_of<A: 'static, I>(predicates: I) -> Predicate<A>
where
    I: IntoIterator<Item = Predicate<A>>,
{
    Monoid::function(Monoid::any()).concat_all(predicates)
}
