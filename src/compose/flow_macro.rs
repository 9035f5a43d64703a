//! The `flow!` macro for left-to-right function composition.

/// Composes functions from left to right into a new function.
///
/// `flow!(f, g, h)` is the function `|x| h(g(f(x)))`. It is the point-free
/// counterpart of [`pipe!`](crate::pipe!): `flow!(f, g)(x) == pipe!(x, f, g)`.
///
/// The composed closure calls every function once per invocation, so it is
/// `Fn` whenever each function is `Fn`.
///
/// # Examples
///
/// ```
/// use fpkit::flow;
///
/// let trim_and_count = flow!(|s: &str| s.trim().to_string(), |s: String| s.len());
/// assert_eq!(trim_and_count("  four  "), 4);
/// assert_eq!(trim_and_count("ab"), 2);
/// ```
#[macro_export]
macro_rules! flow {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $second_function:expr $(,)?) => {{
        let first = $first_function;
        let second = $second_function;
        move |input| second(first(input))
    }};

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::flow!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
