//! Small combinators used alongside `pipe!` and `flow!`.

/// Returns its argument unchanged.
///
/// ```
/// use fpkit::compose::identity;
///
/// let values: Vec<Option<i32>> = vec![Some(1), None, Some(3)];
/// let present: Vec<i32> = values.into_iter().filter_map(identity).collect();
/// assert_eq!(present, vec![1, 3]);
/// ```
#[inline]
#[must_use]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its argument and returns `value`.
///
/// Handy as a fallback thunk, e.g. for `Option::or_else` or
/// [`ResultExt::match_with`](crate::control::ResultExt::match_with).
///
/// ```
/// use fpkit::compose::constant;
///
/// let always_zero = constant(0);
/// assert_eq!(always_zero("ignored"), 0);
/// ```
#[inline]
#[must_use]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Creates a zero-argument thunk returning clones of `value`.
#[inline]
#[must_use]
pub fn constant_thunk<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}
