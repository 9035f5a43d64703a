//! The `pipe!` macro for left-to-right function application.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is `h(g(f(x)))`. Each function is called once, so
/// `FnOnce` closures that consume their captures are accepted.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Examples
///
/// Curried helpers from [`control`](crate::control) read naturally inside a
/// pipeline:
///
/// ```
/// use fpkit::pipe;
/// use fpkit::control::result;
///
/// let checked = pipe!(
///     7,
///     result::from_predicate(|n: &i32| n % 2 == 1, |n: &i32| format!("{n} is even")),
///     |checked: Result<i32, String>| checked.map(|n| n * 10),
/// );
/// assert_eq!(checked, Ok(70));
/// ```
///
/// ```
/// use fpkit::pipe;
///
/// fn to_uppercase(s: &str) -> String { s.to_uppercase() }
/// fn add_exclamation(s: String) -> String { format!("{s}!") }
///
/// assert_eq!(pipe!("hello", to_uppercase, add_exclamation), "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
