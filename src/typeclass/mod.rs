//! Capability objects for equality, ordering and combination.
//!
//! Each capability is a plain, cloneable value wrapping the functions that
//! define it. Callers construct the capability they want and pass it
//! explicitly to the code that needs it:
//!
//! - [`Equality`]: an equivalence relation
//! - [`Order`]: a total order consistent with its equality
//! - [`Semigroup`]: an associative binary operation
//! - [`Monoid`]: a semigroup with an identity element
//!
//! Because capabilities are values, one type can have many of them, and
//! new ones are derived from existing ones with combinators such as
//! [`Equality::contramap`], [`Order::reverse`] or [`Semigroup::intercalate`].
//!
//! # Examples
//!
//! ## Deriving an ordering from a field
//!
//! ```rust
//! use fpkit::typeclass::{Order, sort};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Release {
//!     year: u32,
//! }
//!
//! let by_year = Order::<u32>::natural().contramap(|release: &Release| release.year);
//! let releases = vec![Release { year: 2020 }, Release { year: 2018 }];
//!
//! assert_eq!(sort(&by_year, &releases), vec![Release { year: 2018 }, Release { year: 2020 }]);
//! assert_eq!(releases[0].year, 2020);
//! ```
//!
//! ## Folding with a monoid
//!
//! ```rust
//! use fpkit::typeclass::Monoid;
//!
//! let words = vec!["functional".to_string(), "rust".to_string()];
//! assert_eq!(Monoid::string().concat_all(words), "functionalrust");
//! ```

mod eq;
mod functions;
mod monoid;
mod ord;
mod semigroup;

pub use eq::{Equality, StructuralEquality};
pub use functions::{Function, Predicate, all_of, any_of, function, predicate};
pub use monoid::{Monoid, StructuralMonoid};
pub use ord::{Order, sort, sort_by};
pub use semigroup::{Semigroup, StructuralSemigroup};
