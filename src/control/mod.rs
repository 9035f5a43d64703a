//! Sum types for success/failure and presence/absence.
//!
//! Rust's own `Result` and `Option` are the data types; this module adds
//! the operations they lack:
//!
//! - [`ResultExt`] and the [`result`] constructors
//! - [`OptionExt`], [`Nullable`] and the [`option`] constructors
//! - [`Validation`]: combining independent results while keeping every error
//! - [`NonEmptyVec`]: the accumulated error collection
//! - [`Thrown`]: a panic captured by `try_catch`
//!
//! # Examples
//!
//! ## Short-circuiting versus accumulating
//!
//! ```rust
//! use fpkit::control::{NonEmptyVec, Validation, lift};
//!
//! fn positive(n: i32) -> Result<i32, &'static str> {
//!     if n > 0 { Ok(n) } else { Err("not positive") }
//! }
//!
//! fn even(n: i32) -> Result<i32, &'static str> {
//!     if n % 2 == 0 { Ok(n) } else { Err("odd") }
//! }
//!
//! assert_eq!(positive(-3).and_then(even), Err("not positive"));
//!
//! let both = Validation::accumulating()
//!     .map2(lift(positive)(-3), lift(even)(-3), |n, _| n)
//!     .map_err(NonEmptyVec::into_vec);
//! assert_eq!(both, Err(vec!["not positive", "odd"]));
//! ```

mod non_empty;
pub mod option;
pub mod result;
mod thrown;
mod validation;

pub use non_empty::NonEmptyVec;
pub use option::{Nullable, OptionExt};
pub use result::ResultExt;
pub use thrown::Thrown;
pub use validation::{Validation, lift};
