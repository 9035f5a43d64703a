//! Order capability - an explicit total order over a type.
//!
//! An [`Order<A>`] compares two values and answers `Less`, `Equal` or
//! `Greater` (the usual `-1`, `0`, `1`). Every order also provides an
//! equality that agrees with it: `compare(a, b) == Equal` exactly when
//! `equals(a, b)`.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Reflexivity
//!
//! ```text
//! compare(a, a) == Equal
//! ```
//!
//! ## Antisymmetry
//!
//! ```text
//! compare(a, b) == compare(b, a).reverse()
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! compare(a, b) != Greater && compare(b, c) != Greater => compare(a, c) != Greater
//! ```
//!
//! # Sorting
//!
//! [`sort`] and [`sort_by`] return a new, stably sorted `Vec` and leave the
//! input untouched. `sort_by` uses its orders left to right as tie-breakers.
//!
//! ```rust
//! use fpkit::typeclass::{Order, sort_by};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Song { release_year: u32, title: &'static str }
//!
//! let by_year = Order::<u32>::natural().contramap(|song: &Song| song.release_year);
//! let by_title = Order::<&str>::natural().contramap(|song: &Song| song.title);
//!
//! let songs = vec![
//!     Song { release_year: 2020, title: "b" },
//!     Song { release_year: 2018, title: "z" },
//!     Song { release_year: 2020, title: "a" },
//! ];
//! let sorted = sort_by(&[by_year, by_title], &songs);
//! assert_eq!(
//!     sorted.iter().map(|song| song.title).collect::<Vec<_>>(),
//!     vec!["z", "a", "b"],
//! );
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::Equality;
use super::Monoid;

type CompareFunction<A> = dyn Fn(&A, &A) -> Ordering + Send + Sync;

/// A capability providing a total order over values of type `A`.
pub struct Order<A> {
    compare: Arc<CompareFunction<A>>,
}

impl<A> Clone for Order<A> {
    fn clone(&self) -> Self {
        Self {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<A> fmt::Debug for Order<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Order").finish_non_exhaustive()
    }
}

impl<A> Order<A> {
    /// Compares two values.
    #[inline]
    #[must_use]
    pub fn compare(&self, left: &A, right: &A) -> Ordering {
        (self.compare)(left, right)
    }

    /// The equality induced by this order.
    #[inline]
    #[must_use]
    pub fn equals(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Equal
    }

    /// Returns the smaller value; ties keep `left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Order;
    ///
    /// assert_eq!(Order::<i32>::natural().min(2, 1), 1);
    /// ```
    #[must_use]
    pub fn min(&self, left: A, right: A) -> A {
        if self.compare(&left, &right) == Ordering::Greater {
            right
        } else {
            left
        }
    }

    /// Tests whether `left < right`.
    #[must_use]
    pub fn lt(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Less
    }

    /// Tests whether `left > right`.
    #[must_use]
    pub fn gt(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) == Ordering::Greater
    }

    /// Tests whether `left <= right`.
    #[must_use]
    pub fn leq(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) != Ordering::Greater
    }

    /// Tests whether `left >= right`.
    #[must_use]
    pub fn geq(&self, left: &A, right: &A) -> bool {
        self.compare(left, right) != Ordering::Less
    }

    /// Tests whether `value` lies in the closed range `[low, high]`.
    #[must_use]
    pub fn between(&self, value: &A, low: &A, high: &A) -> bool {
        !self.lt(value, low) && !self.gt(value, high)
    }
}

impl<A: 'static> Order<A> {
    /// Creates an order from a comparison function.
    #[must_use]
    pub fn from_compare<F>(compare: F) -> Self
    where
        F: Fn(&A, &A) -> Ordering + Send + Sync + 'static,
    {
        Self {
            compare: Arc::new(compare),
        }
    }

    /// The order given by the type's own `Ord`.
    #[must_use]
    pub fn natural() -> Self
    where
        A: Ord,
    {
        Self::from_compare(|left: &A, right: &A| left.cmp(right))
    }

    /// The equality consistent with this order.
    #[must_use]
    pub fn to_equality(&self) -> Equality<A> {
        let order = self.clone();
        Equality::from_equals(move |left: &A, right: &A| order.equals(left, right))
    }

    /// Derives an order on `B` by projecting each `B` to an `A`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Order;
    ///
    /// struct User { name: &'static str, age: u32 }
    ///
    /// let by_age = Order::<u32>::natural().contramap(|user: &User| user.age);
    /// let younger = by_age.min(User { name: "Guido", age: 48 }, User { name: "Giulio", age: 45 });
    /// assert_eq!(younger.name, "Giulio");
    /// ```
    #[must_use]
    pub fn contramap<B: 'static, F>(&self, projection: F) -> Order<B>
    where
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        let order = self.clone();
        Order::from_compare(move |left: &B, right: &B| {
            order.compare(&projection(left), &projection(right))
        })
    }

    /// Like [`contramap`](Self::contramap) for projections that borrow.
    #[must_use]
    pub fn contramap_ref<B: 'static, F>(&self, projection: F) -> Order<B>
    where
        F: Fn(&B) -> &A + Send + Sync + 'static,
    {
        let order = self.clone();
        Order::from_compare(move |left: &B, right: &B| {
            order.compare(projection(left), projection(right))
        })
    }

    /// Flips the order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let order = self.clone();
        Self::from_compare(move |left: &A, right: &A| order.compare(right, left))
    }

    /// Uses `tie_breaker` whenever this order reports `Equal`.
    #[must_use]
    pub fn then(&self, tie_breaker: &Self) -> Self {
        let primary = self.clone();
        let secondary = tie_breaker.clone();
        Self::from_compare(move |left: &A, right: &A| {
            primary
                .compare(left, right)
                .then_with(|| secondary.compare(left, right))
        })
    }

    /// Returns the larger value; ties keep `left`.
    ///
    /// Defined as `min` over the reversed order.
    #[must_use]
    pub fn max(&self, left: A, right: A) -> A {
        self.reverse().min(left, right)
    }

    /// Restricts `value` to the closed range `[low, high]`.
    #[must_use]
    pub fn clamp(&self, value: A, low: A, high: A) -> A {
        self.min(self.max(value, low), high)
    }
}

impl<A: 'static, B: 'static> Order<(A, B)> {
    /// Lexicographic order on pairs.
    #[must_use]
    pub fn tuple2(first: Order<A>, second: Order<B>) -> Self {
        Self::from_compare(move |left: &(A, B), right: &(A, B)| {
            first
                .compare(&left.0, &right.0)
                .then_with(|| second.compare(&left.1, &right.1))
        })
    }
}

impl<A: 'static, B: 'static, C: 'static> Order<(A, B, C)> {
    /// Lexicographic order on triples.
    #[must_use]
    pub fn tuple3(first: Order<A>, second: Order<B>, third: Order<C>) -> Self {
        Self::from_compare(move |left: &(A, B, C), right: &(A, B, C)| {
            first
                .compare(&left.0, &right.0)
                .then_with(|| second.compare(&left.1, &right.1))
                .then_with(|| third.compare(&left.2, &right.2))
        })
    }
}

impl<A: 'static> Order<Vec<A>> {
    /// Lexicographic order on vectors; a proper prefix sorts first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use fpkit::typeclass::Order;
    ///
    /// let vectors = Order::vec(Order::<i32>::natural());
    /// assert_eq!(vectors.compare(&vec![20], &vec![30]), Ordering::Less);
    /// assert_eq!(vectors.compare(&vec![1, 2], &vec![1]), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn vec(element: Order<A>) -> Self {
        Self::from_compare(move |left: &Vec<A>, right: &Vec<A>| {
            left.iter()
                .zip(right)
                .map(|(left_item, right_item)| element.compare(left_item, right_item))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or_else(|| left.len().cmp(&right.len()))
        })
    }
}

impl<A: 'static> Order<Option<A>> {
    /// `None` sorts before every `Some`; two `Some`s compare their contents.
    #[must_use]
    pub fn option(inner: Order<A>) -> Self {
        Self::from_compare(move |left, right| match (left, right) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => inner.compare(left, right),
        })
    }
}

/// Returns a new `Vec` holding `values` stably sorted by `order`.
///
/// The input slice is not modified.
#[must_use]
pub fn sort<A: Clone>(order: &Order<A>, values: &[A]) -> Vec<A> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|left, right| order.compare(left, right));
    sorted
}

/// Returns a new `Vec` holding `values` stably sorted by `orders`.
///
/// `orders[0]` decides first; on a tie `orders[1]` decides, and so on. With
/// no orders the input order is preserved.
#[must_use]
pub fn sort_by<A: Clone + 'static>(orders: &[Order<A>], values: &[A]) -> Vec<A> {
    let combined = Monoid::order().concat_all(orders.iter().cloned());
    sort(&combined, values)
}
