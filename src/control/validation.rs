//! Error-accumulating combination of independent results.
//!
//! Chaining results with `and_then` stops at the first failure. When the
//! checks are independent of each other, [`Validation`] runs all of them and
//! combines every failure with a [`Semigroup`] over the error type, in the
//! order the results are given.
//!
//! # Examples
//!
//! ```rust
//! use fpkit::control::{NonEmptyVec, Validation, lift};
//!
//! fn min_length(s: String) -> Result<String, String> {
//!     if s.len() >= 6 { Ok(s) } else { Err("at least 6 characters".into()) }
//! }
//!
//! fn one_number(s: String) -> Result<String, String> {
//!     let has_number = s.chars().any(|c| c.is_ascii_digit());
//!     if has_number { Ok(s) } else { Err("at least one number".into()) }
//! }
//!
//! let validation = Validation::accumulating();
//! let password = |s: &str| {
//!     validation.map2(
//!         lift(min_length)(s.to_string()),
//!         lift(one_number)(s.to_string()),
//!         |s, _| s,
//!     )
//! };
//!
//! assert_eq!(password("abcdef1"), Ok("abcdef1".to_string()));
//! assert_eq!(
//!     password("ab").map_err(NonEmptyVec::into_vec),
//!     Err(vec!["at least 6 characters".to_string(), "at least one number".to_string()]),
//! );
//! ```

use std::fmt;

use super::NonEmptyVec;
use crate::typeclass::Semigroup;

/// Combines independent results, accumulating every error with a semigroup.
pub struct Validation<E> {
    errors: Semigroup<E>,
}

impl<E> Clone for Validation<E> {
    fn clone(&self) -> Self {
        Self {
            errors: self.errors.clone(),
        }
    }
}

impl<E> fmt::Debug for Validation<E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Validation").finish_non_exhaustive()
    }
}

impl<E> Validation<E> {
    /// Creates a validation combining errors with `errors`.
    #[must_use]
    pub const fn new(errors: Semigroup<E>) -> Self {
        Self { errors }
    }

    /// Pairs two results, combining both errors when both fail.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either result failed, with both errors combined when
    /// both did.
    pub fn tuple2<A, B>(&self, first: Result<A, E>, second: Result<B, E>) -> Result<(A, B), E> {
        match (first, second) {
            (Ok(first), Ok(second)) => Ok((first, second)),
            (Err(first), Err(second)) => Err(self.errors.concat(first, second)),
            (Err(error), Ok(_)) | (Ok(_), Err(error)) => Err(error),
        }
    }

    /// Collects three results into a triple.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the errors of every failed result, combined in
    /// argument order.
    pub fn tuple3<A, B, C>(
        &self,
        first: Result<A, E>,
        second: Result<B, E>,
        third: Result<C, E>,
    ) -> Result<(A, B, C), E> {
        self.tuple2(self.tuple2(first, second), third)
            .map(|((first, second), third)| (first, second, third))
    }

    /// Applies `combine` to two successes.
    ///
    /// # Errors
    ///
    /// Returns the combined errors of the failed results, as
    /// [`Validation::tuple2`] does; `combine` is not called.
    pub fn map2<A, B, C, F>(
        &self,
        first: Result<A, E>,
        second: Result<B, E>,
        combine: F,
    ) -> Result<C, E>
    where
        F: FnOnce(A, B) -> C,
    {
        self.tuple2(first, second)
            .map(|(first, second)| combine(first, second))
    }

    /// Applies `combine` to three successes.
    ///
    /// # Errors
    ///
    /// Returns the combined errors of the failed results, as
    /// [`Validation::tuple3`] does; `combine` is not called.
    pub fn map3<A, B, C, D, F>(
        &self,
        first: Result<A, E>,
        second: Result<B, E>,
        third: Result<C, E>,
        combine: F,
    ) -> Result<D, E>
    where
        F: FnOnce(A, B, C) -> D,
    {
        self.tuple3(first, second, third)
            .map(|(first, second, third)| combine(first, second, third))
    }

    /// Collects any number of results, keeping every error.
    ///
    /// An empty input yields `Ok(vec![])`.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the errors of every failed result, combined in
    /// iteration order.
    pub fn collect<A, I>(&self, results: I) -> Result<Vec<A>, E>
    where
        I: IntoIterator<Item = Result<A, E>>,
    {
        let initial: Result<Vec<A>, E> = Ok(Vec::new());
        results.into_iter().fold(initial, |accumulated, result| {
            self.map2(accumulated, result, |mut values, value| {
                values.push(value);
                values
            })
        })
    }

    /// Runs every check against `value` and returns `value` if all pass.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::control::Validation;
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let checks: Vec<Box<dyn Fn(&i32) -> Result<(), String>>> = vec![
    ///     Box::new(|n: &i32| if *n > 0 { Ok(()) } else { Err("not positive".into()) }),
    ///     Box::new(|n: &i32| if n % 2 == 0 { Ok(()) } else { Err("odd".into()) }),
    /// ];
    /// let joined = Validation::new(Semigroup::string().intercalate(", ".into()));
    ///
    /// assert_eq!(joined.validate(4, &checks), Ok(4));
    /// assert_eq!(joined.validate(-3, &checks), Err("not positive, odd".to_string()));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `Err` with the errors of every failing check, combined in
    /// check order.
    pub fn validate<A, C>(&self, value: A, checks: &[C]) -> Result<A, E>
    where
        C: Fn(&A) -> Result<(), E>,
    {
        let outcome = self.collect(checks.iter().map(|check| check(&value)));
        outcome.map(|_| value)
    }
}

impl<E: 'static> Validation<NonEmptyVec<E>> {
    /// Accumulates errors into a [`NonEmptyVec`] in check order.
    #[must_use]
    pub fn accumulating() -> Self {
        Self::new(Semigroup::non_empty_vec())
    }
}

/// Lifts a check with a single error into one whose error is a
/// [`NonEmptyVec`], ready for [`Validation::accumulating`].
#[must_use]
pub fn lift<A, E, F>(check: F) -> impl Fn(A) -> Result<A, NonEmptyVec<E>>
where
    F: Fn(A) -> Result<A, E>,
{
    move |value| check(value).map_err(NonEmptyVec::new)
}
