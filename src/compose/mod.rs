//! Function composition utilities.
//!
//! - [`pipe!`](crate::pipe!): apply functions to a value from left to right
//! - [`flow!`](crate::flow!): compose functions from left to right into a new function
//! - [`identity`], [`constant`], [`constant_thunk`]: trivial combinators
//!
//! # Examples
//!
//! ```
//! use fpkit::{flow, pipe};
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! assert_eq!(pipe!(5, double, add_one), 11);
//! assert_eq!(flow!(double, add_one)(5), 11);
//! ```

mod flow_macro;
mod pipe_macro;
mod utils;

pub use utils::{constant, constant_thunk, identity};
