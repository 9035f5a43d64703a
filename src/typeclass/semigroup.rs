//! Semigroup capability - an associative way to combine two values.
//!
//! A semigroup over `A` is a function `concat: (A, A) -> A` that is
//! associative. Because [`Semigroup<A>`] is a value rather than a trait
//! implementation, the same type can be combined in many ways (`i32` under
//! addition, multiplication, `min`, `max`, ...), and the caller picks one
//! explicitly.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Associativity
//!
//! ```text
//! concat(concat(a, b), c) == concat(a, concat(b, c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Semigroup;
//!
//! let sum = Semigroup::<i32>::sum();
//! assert_eq!(sum.concat_all(0, vec![1, 2, 3, 4]), 10);
//!
//! let plus = Semigroup::string().intercalate(" + ".to_string());
//! assert_eq!(plus.concat("a".to_string(), "b".to_string()), "a + b");
//! ```

use std::fmt;
use std::ops::{Add, Mul};
use std::sync::Arc;

use super::Order;
use super::functions::Function;

type ConcatFunction<A> = dyn Fn(A, A) -> A + Send + Sync;
type FieldCombiner<A> = dyn Fn(&mut A, &mut A) + Send + Sync;

/// A capability combining two values of type `A` associatively.
pub struct Semigroup<A> {
    concat: Arc<ConcatFunction<A>>,
}

impl<A> Clone for Semigroup<A> {
    fn clone(&self) -> Self {
        Self {
            concat: Arc::clone(&self.concat),
        }
    }
}

impl<A> fmt::Debug for Semigroup<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Semigroup").finish_non_exhaustive()
    }
}

impl<A> Semigroup<A> {
    /// Combines two values.
    #[inline]
    #[must_use]
    pub fn concat(&self, left: A, right: A) -> A {
        (self.concat)(left, right)
    }

    /// Folds `values` into `start` from left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let product = Semigroup::<i32>::product();
    /// assert_eq!(product.concat_all(1, vec![1, 2, 3, 4]), 24);
    /// ```
    #[must_use]
    pub fn concat_all<I>(&self, start: A, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .fold(start, |left, right| self.concat(left, right))
    }

    /// Reduces `values` with the semigroup, or returns `None` when empty.
    #[must_use]
    pub fn reduce_all<I>(&self, values: I) -> Option<A>
    where
        I: IntoIterator<Item = A>,
    {
        values
            .into_iter()
            .reduce(|left, right| self.concat(left, right))
    }
}

impl<A: 'static> Semigroup<A> {
    /// Creates a semigroup from an associative function.
    #[must_use]
    pub fn new<F>(concat: F) -> Self
    where
        F: Fn(A, A) -> A + Send + Sync + 'static,
    {
        Self {
            concat: Arc::new(concat),
        }
    }

    /// Always keeps the first (left) value.
    #[must_use]
    pub fn first() -> Self {
        Self::new(|left: A, _right: A| left)
    }

    /// Always keeps the last (right) value.
    #[must_use]
    pub fn last() -> Self {
        Self::new(|_left: A, right: A| right)
    }

    /// Keeps the smaller value under `order`; ties keep the left value.
    #[must_use]
    pub fn min(order: Order<A>) -> Self {
        Self::new(move |left: A, right: A| order.min(left, right))
    }

    /// Keeps the larger value under `order`; ties keep the left value.
    #[must_use]
    pub fn max(order: Order<A>) -> Self {
        Self::new(move |left: A, right: A| order.max(left, right))
    }

    /// Addition.
    #[must_use]
    pub fn sum() -> Self
    where
        A: Add<Output = A>,
    {
        Self::new(|left: A, right: A| left + right)
    }

    /// Multiplication.
    #[must_use]
    pub fn product() -> Self
    where
        A: Mul<Output = A>,
    {
        Self::new(|left: A, right: A| left * right)
    }

    /// Swaps the arguments before combining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let reversed = Semigroup::string().reverse();
    /// assert_eq!(reversed.concat("a".to_string(), "b".to_string()), "ba");
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let semigroup = self.clone();
        Self::new(move |left: A, right: A| semigroup.concat(right, left))
    }

    /// Places `separator` between the two values being combined.
    #[must_use]
    pub fn intercalate(&self, separator: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        let semigroup = self.clone();
        Self::new(move |left: A, right: A| {
            semigroup.concat(left, semigroup.concat(separator.clone(), right))
        })
    }

    /// Starts a field-wise semigroup over a record type.
    ///
    /// Each field is combined with its own semigroup; fields that are not
    /// registered keep the left value. Keeping the left value is associative,
    /// but it has no identity: see [`Monoid::structural`](super::Monoid::structural)
    /// for the consequence on identity laws.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let point = Semigroup::structural()
    ///     .field(|p: &mut Point| &mut p.x, Semigroup::sum())
    ///     .field(|p: &mut Point| &mut p.y, Semigroup::sum())
    ///     .build();
    ///
    /// assert_eq!(
    ///     point.concat(Point { x: 1, y: 2 }, Point { x: 3, y: 4 }),
    ///     Point { x: 4, y: 6 },
    /// );
    /// ```
    #[must_use]
    pub fn structural() -> StructuralSemigroup<A> {
        StructuralSemigroup { fields: Vec::new() }
    }
}

/// Builder returned by [`Semigroup::structural`].
pub struct StructuralSemigroup<A> {
    fields: Vec<Arc<FieldCombiner<A>>>,
}

impl<A: 'static> StructuralSemigroup<A> {
    /// Adds a field combined with `semigroup`.
    ///
    /// The field type must implement `Default` so the values can be moved
    /// out of both records while they are combined.
    #[must_use]
    pub fn field<F, L>(mut self, lens: L, semigroup: Semigroup<F>) -> Self
    where
        F: Default + 'static,
        L: Fn(&mut A) -> &mut F + Send + Sync + 'static,
    {
        let combiner = move |left: &mut A, right: &mut A| {
            let right_value = std::mem::take(lens(&mut *right));
            let slot = lens(&mut *left);
            let left_value = std::mem::take(slot);
            *slot = semigroup.concat(left_value, right_value);
        };
        self.fields.push(Arc::new(combiner));
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Semigroup<A> {
        let fields = self.fields;
        Semigroup::new(move |mut left: A, mut right: A| {
            for field in &fields {
                field(&mut left, &mut right);
            }
            left
        })
    }
}

impl Semigroup<String> {
    /// String concatenation.
    #[must_use]
    pub fn string() -> Self {
        Self::new(|mut left: String, right: String| {
            left.push_str(&right);
            left
        })
    }
}

impl<T: 'static> Semigroup<Vec<T>> {
    /// Vector concatenation.
    #[must_use]
    pub fn vec() -> Self {
        Self::new(|mut left: Vec<T>, mut right: Vec<T>| {
            left.append(&mut right);
            left
        })
    }
}

impl Semigroup<bool> {
    /// Conjunction.
    #[must_use]
    pub fn all() -> Self {
        Self::new(|left: bool, right: bool| left && right)
    }

    /// Disjunction.
    #[must_use]
    pub fn any() -> Self {
        Self::new(|left: bool, right: bool| left || right)
    }
}

impl<A: 'static> Semigroup<Option<A>> {
    /// Combines two `Some`s with `inner`; a `None` on either side is skipped.
    #[must_use]
    pub fn option(inner: Semigroup<A>) -> Self {
        Self::new(move |left, right| match (left, right) {
            (Some(left), Some(right)) => Some(inner.concat(left, right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        })
    }

    /// Combines two `Some`s with `inner`; a `None` on either side wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Semigroup;
    ///
    /// let sum = Semigroup::option_apply(Semigroup::<i32>::sum());
    /// assert_eq!(sum.concat(Some(1), Some(2)), Some(3));
    /// assert_eq!(sum.concat(Some(1), None), None);
    /// ```
    #[must_use]
    pub fn option_apply(inner: Semigroup<A>) -> Self {
        Self::new(move |left: Option<A>, right: Option<A>| {
            left.zip(right)
                .map(|(left_value, right_value)| inner.concat(left_value, right_value))
        })
    }
}

impl<A: 'static, B: 'static> Semigroup<(A, B)> {
    /// Component-wise combination of pairs.
    #[must_use]
    pub fn tuple2(first: Semigroup<A>, second: Semigroup<B>) -> Self {
        Self::new(move |left: (A, B), right: (A, B)| {
            (
                first.concat(left.0, right.0),
                second.concat(left.1, right.1),
            )
        })
    }
}

impl<A: 'static, B: 'static, C: 'static> Semigroup<(A, B, C)> {
    /// Component-wise combination of triples.
    #[must_use]
    pub fn tuple3(first: Semigroup<A>, second: Semigroup<B>, third: Semigroup<C>) -> Self {
        Self::new(move |left: (A, B, C), right: (A, B, C)| {
            (
                first.concat(left.0, right.0),
                second.concat(left.1, right.1),
                third.concat(left.2, right.2),
            )
        })
    }
}

impl<A: 'static, B: 'static> Semigroup<Function<A, B>> {
    /// Pointwise combination of functions: the combined function applies
    /// both and combines the results with `codomain`.
    ///
    /// With `Semigroup::all()` this is predicate conjunction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Semigroup, predicate};
    ///
    /// let both = Semigroup::function(Semigroup::all());
    /// let positive_xy = both.concat(
    ///     predicate(|p: &(i32, i32)| p.0 >= 0),
    ///     predicate(|p: &(i32, i32)| p.1 >= 0),
    /// );
    /// assert!(positive_xy(&(1, 1)));
    /// assert!(!positive_xy(&(1, -1)));
    /// ```
    #[must_use]
    pub fn function(codomain: Semigroup<B>) -> Self {
        Self::new(move |left: Function<A, B>, right: Function<A, B>| {
            let codomain = codomain.clone();
            let combined: Function<A, B> =
                Arc::new(move |argument: &A| codomain.concat(left(argument), right(argument)));
            combined
        })
    }
}
