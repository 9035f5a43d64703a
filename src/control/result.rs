//! Extensions for `Result` as a success/failure sum type.
//!
//! `std::result::Result` already provides most of the vocabulary:
//! `map`, `map_err`, `and_then`, `unwrap_or_else`, `ok`, `err` and
//! `transpose`. This module adds the remaining operations as the
//! [`ResultExt`] extension trait, plus free constructors. Constructors that
//! take their configuration first return closures, so they slot into
//! [`pipe!`](crate::pipe!) pipelines.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::ResultExt;
//! use fpkit::control::result;
//!
//! let positive = result::from_predicate(|n: &i32| *n > 0, |n: &i32| format!("{n} is not positive"));
//!
//! assert_eq!(positive(3), Ok(3));
//! assert_eq!(positive(-1), Err("-1 is not positive".to_string()));
//!
//! let described = positive(5).match_with(|error| error, |n| format!("got {n}"));
//! assert_eq!(described, "got 5");
//! ```

use super::thrown::{self, Thrown};
use crate::typeclass::Monoid;

/// Operations on `Result` that std does not provide.
pub trait ResultExt<A, E>: Sized {
    /// Eliminates the result: `on_failure` for `Err`, `on_success` for `Ok`.
    #[must_use]
    fn match_with<B, F, S>(self, on_failure: F, on_success: S) -> B
    where
        F: FnOnce(E) -> B,
        S: FnOnce(A) -> B;

    /// Turns `Ok(a)` into `Err(on_false(&a))` when `predicate(&a)` is false.
    ///
    /// `Err` passes through unchanged and neither function is called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::ResultExt;
    ///
    /// let non_negative = |r: Result<i32, String>| {
    ///     r.filter_or_else(|n| *n >= 0, |n| format!("{n} is negative"))
    /// };
    ///
    /// assert_eq!(non_negative(Ok(1)), Ok(1));
    /// assert_eq!(non_negative(Ok(-1)), Err("-1 is negative".to_string()));
    /// assert_eq!(non_negative(Err("a".to_string())), Err("a".to_string()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err(on_false(&a))` if the success value fails the predicate,
    /// and the original error if the result already failed.
    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Result<A, E>
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(&A) -> E;

    /// Left fold: `f(initial, a)` for `Ok(a)`, `initial` for `Err`.
    #[must_use]
    fn reduce<B, F>(self, initial: B, f: F) -> B
    where
        F: FnOnce(B, A) -> B;

    /// Right fold: `f(a, initial)` for `Ok(a)`, `initial` for `Err`.
    #[must_use]
    fn reduce_right<B, F>(self, initial: B, f: F) -> B
    where
        F: FnOnce(A, B) -> B;

    /// Maps the success into a monoid; `Err` yields `monoid.empty()`.
    #[must_use]
    fn fold_map<M, F>(self, monoid: &Monoid<M>, f: F) -> M
    where
        F: FnOnce(A) -> M;
}

impl<A, E> ResultExt<A, E> for Result<A, E> {
    #[inline]
    fn match_with<B, F, S>(self, on_failure: F, on_success: S) -> B
    where
        F: FnOnce(E) -> B,
        S: FnOnce(A) -> B,
    {
        match self {
            Ok(value) => on_success(value),
            Err(error) => on_failure(error),
        }
    }

    fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool,
        F: FnOnce(&A) -> E,
    {
        match self {
            Ok(value) if predicate(&value) => Ok(value),
            Ok(value) => Err(on_false(&value)),
            Err(error) => Err(error),
        }
    }

    fn reduce<B, F>(self, initial: B, f: F) -> B
    where
        F: FnOnce(B, A) -> B,
    {
        match self {
            Ok(value) => f(initial, value),
            Err(_) => initial,
        }
    }

    fn reduce_right<B, F>(self, initial: B, f: F) -> B
    where
        F: FnOnce(A, B) -> B,
    {
        match self {
            Ok(value) => f(value, initial),
            Err(_) => initial,
        }
    }

    fn fold_map<M, F>(self, monoid: &Monoid<M>, f: F) -> M
    where
        F: FnOnce(A) -> M,
    {
        match self {
            Ok(value) => f(value),
            Err(_) => monoid.empty(),
        }
    }
}

/// Removes one level of nesting.
///
/// `Ok(Ok(a))` becomes `Ok(a)`, and the error of either level is kept.
///
/// # Errors
///
/// Returns `Err` if either the outer or the inner result failed.
#[inline]
pub fn flatten<A, E>(nested: Result<Result<A, E>, E>) -> Result<A, E> {
    nested.and_then(|inner| inner)
}

/// Creates a function returning `Ok(a)` when `predicate(&a)` holds and
/// `Err(on_false(&a))` otherwise.
#[must_use]
pub fn from_predicate<A, E, P, F>(predicate: P, on_false: F) -> impl Fn(A) -> Result<A, E>
where
    P: Fn(&A) -> bool,
    F: Fn(&A) -> E,
{
    move |value| {
        if predicate(&value) {
            Ok(value)
        } else {
            Err(on_false(&value))
        }
    }
}

/// Creates a function converting `Some(a)` to `Ok(a)` and `None` to
/// `Err(on_none())`.
///
/// This is the pipeable form of `Option::ok_or_else`.
#[must_use]
pub fn from_option<A, E, F>(on_none: F) -> impl Fn(Option<A>) -> Result<A, E>
where
    F: Fn() -> E,
{
    move |option| option.ok_or_else(&on_none)
}

/// Runs a computation that may panic, returning its value as `Ok` or the
/// captured panic, mapped through `on_panic`, as `Err`.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::result;
///
/// fn head(values: &[i32]) -> Result<i32, String> {
///     result::try_catch(
///         || {
///             if values.is_empty() {
///                 panic!("empty array");
///             }
///             values[0]
///         },
///         |thrown| thrown.message().to_string(),
///     )
/// }
///
/// assert_eq!(head(&[1, 2, 3]), Ok(1));
/// assert_eq!(head(&[]), Err("empty array".to_string()));
/// ```
///
/// # Errors
///
/// Returns `Err(on_panic(thrown))` if `computation` panics.
pub fn try_catch<A, E, F, M>(computation: F, on_panic: M) -> Result<A, E>
where
    F: FnOnce() -> A,
    M: FnOnce(Thrown) -> E,
{
    thrown::catch(computation).map_err(on_panic)
}
