//! # fpkit
//!
//! Capability objects for functional programming in Rust.
//!
//! ## Overview
//!
//! Instead of relying on implicit instance resolution, every algebraic
//! capability in this crate is a plain value that callers pass explicitly:
//!
//! - **Type Classes**: [`Equality`](typeclass::Equality), [`Order`](typeclass::Order),
//!   [`Semigroup`](typeclass::Semigroup), [`Monoid`](typeclass::Monoid)
//! - **Control**: extensions for `Result` and `Option`, error-accumulating
//!   [`Validation`](control::Validation), panic capture via `try_catch`
//! - **Effect**: [`Task`](effect::Task), a deferred asynchronous computation
//!   with a race combinator
//! - **Function Composition**: `pipe!` and `flow!` macros
//!
//! ## Feature Flags
//!
//! - `typeclass`: Equality, ordering and combination capabilities
//! - `compose`: Function composition utilities
//! - `control`: Result / Option extensions and validation
//! - `effect`: Deferred asynchronous tasks (pulls in `tokio` and `futures`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpkit::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Artist {
//!     id: u32,
//!     name: String,
//! }
//!
//! let by_id = Equality::<u32>::strict().contramap(|artist: &Artist| artist.id);
//!
//! let eden = Artist { id: 1, name: "EDEN".to_string() };
//! let lowercase = Artist { id: 1, name: "eden".to_string() };
//! assert!(by_id.equals(&eden, &lowercase));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;
