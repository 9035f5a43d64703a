//! Monoid capability - a semigroup with an identity element.
//!
//! A [`Monoid<A>`] pairs a [`Semigroup<A>`] with an `empty` value that is
//! neutral for `concat`. Having an identity means any number of values,
//! including none, can be folded with [`Monoid::concat_all`].
//!
//! # Laws
//!
//! In addition to associativity inherited from the semigroup:
//!
//! ## Left Identity
//!
//! ```text
//! concat(empty(), x) == x
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! concat(x, empty()) == x
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Monoid;
//!
//! assert_eq!(Monoid::<i32>::sum().concat_all(vec![1, 2, 3, 4]), 10);
//! assert_eq!(Monoid::<i32>::product().concat_all(vec![1, 2, 3, 4]), 24);
//! assert_eq!(Monoid::<i32>::sum().concat_all(Vec::new()), 0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul};
use std::sync::Arc;

use super::functions::Function;
use super::{Order, Semigroup};

type EmptyFunction<A> = dyn Fn() -> A + Send + Sync;
type FieldCombiner<A> = dyn Fn(&mut A, &mut A) + Send + Sync;
type FieldFiller<A> = dyn Fn(&mut A) + Send + Sync;

/// A capability combining values of type `A` with an identity element.
pub struct Monoid<A> {
    semigroup: Semigroup<A>,
    empty: Arc<EmptyFunction<A>>,
}

impl<A> Clone for Monoid<A> {
    fn clone(&self) -> Self {
        Self {
            semigroup: self.semigroup.clone(),
            empty: Arc::clone(&self.empty),
        }
    }
}

impl<A> fmt::Debug for Monoid<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Monoid").finish_non_exhaustive()
    }
}

impl<A> Monoid<A> {
    /// Returns the identity element.
    #[inline]
    #[must_use]
    pub fn empty(&self) -> A {
        (self.empty)()
    }

    /// Returns the underlying semigroup.
    #[must_use]
    pub const fn semigroup(&self) -> &Semigroup<A> {
        &self.semigroup
    }

    /// Combines two values.
    #[inline]
    #[must_use]
    pub fn concat(&self, left: A, right: A) -> A {
        self.semigroup.concat(left, right)
    }

    /// Folds `values` from left to right, starting from the identity.
    ///
    /// An empty input yields `empty()`.
    #[must_use]
    pub fn concat_all<I>(&self, values: I) -> A
    where
        I: IntoIterator<Item = A>,
    {
        self.semigroup.concat_all(self.empty(), values)
    }
}

impl<A: 'static> Monoid<A> {
    /// Creates a monoid from a semigroup and a function producing its identity.
    #[must_use]
    pub fn new<F>(semigroup: Semigroup<A>, empty: F) -> Self
    where
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self {
            semigroup,
            empty: Arc::new(empty),
        }
    }

    /// Creates a monoid whose identity is a cloned value.
    #[must_use]
    pub fn with_empty(semigroup: Semigroup<A>, empty: A) -> Self
    where
        A: Clone + Send + Sync,
    {
        Self::new(semigroup, move || empty.clone())
    }

    /// Addition, with `A::default()` (zero for numbers) as identity.
    #[must_use]
    pub fn sum() -> Self
    where
        A: Add<Output = A> + Default,
    {
        Self::new(Semigroup::sum(), A::default)
    }

    /// Multiplication, with one as identity.
    #[must_use]
    pub fn product() -> Self
    where
        A: Mul<Output = A> + From<u8>,
    {
        Self::new(Semigroup::product(), || A::from(1))
    }

    /// Swaps the arguments before combining. The identity is unchanged.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            semigroup: self.semigroup.reverse(),
            empty: Arc::clone(&self.empty),
        }
    }

    /// Starts a field-wise monoid over a record type.
    ///
    /// The identity is `A::default()` with every registered field replaced by
    /// the identity of its own monoid.
    ///
    /// # Laws
    ///
    /// Fields that are never registered keep the left record's value on
    /// `concat`, so `concat(empty(), x)` resets them to their default. The
    /// identity laws hold only when every field of `A` is registered.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Monoid;
    ///
    /// #[derive(Debug, Default, PartialEq)]
    /// struct Settings {
    ///     font_size: Option<u32>,
    ///     max_column: Option<u32>,
    /// }
    ///
    /// let settings = Monoid::structural()
    ///     .field(|s: &mut Settings| &mut s.font_size, Monoid::option_last())
    ///     .field(|s: &mut Settings| &mut s.max_column, Monoid::option_last())
    ///     .build();
    ///
    /// let merged = settings.concat_all(vec![
    ///     Settings { font_size: Some(12), max_column: Some(80) },
    ///     Settings { font_size: None, max_column: Some(100) },
    /// ]);
    /// assert_eq!(merged, Settings { font_size: Some(12), max_column: Some(100) });
    /// ```
    #[must_use]
    pub fn structural() -> StructuralMonoid<A>
    where
        A: Default,
    {
        StructuralMonoid {
            combiners: Vec::new(),
            fillers: Vec::new(),
        }
    }
}

/// Builder returned by [`Monoid::structural`].
pub struct StructuralMonoid<A> {
    combiners: Vec<Arc<FieldCombiner<A>>>,
    fillers: Vec<Arc<FieldFiller<A>>>,
}

impl<A: Default + 'static> StructuralMonoid<A> {
    /// Adds a field combined with `monoid`.
    #[must_use]
    pub fn field<F, L>(mut self, lens: L, monoid: Monoid<F>) -> Self
    where
        F: Default + 'static,
        L: Fn(&mut A) -> &mut F + Send + Sync + 'static,
    {
        let lens = Arc::new(lens);
        let combining_lens = Arc::clone(&lens);
        let combining_monoid = monoid.clone();
        let combiner = move |left: &mut A, right: &mut A| {
            let right_value = std::mem::take(combining_lens(&mut *right));
            let slot = combining_lens(&mut *left);
            let left_value = std::mem::take(slot);
            *slot = combining_monoid.concat(left_value, right_value);
        };
        let filler = move |record: &mut A| {
            *lens(record) = monoid.empty();
        };
        self.combiners.push(Arc::new(combiner));
        self.fillers.push(Arc::new(filler));
        self
    }

    /// Finishes the builder.
    #[must_use]
    pub fn build(self) -> Monoid<A> {
        let combiners = self.combiners;
        let fillers = self.fillers;
        let semigroup = Semigroup::new(move |mut left: A, mut right: A| {
            for combiner in &combiners {
                combiner(&mut left, &mut right);
            }
            left
        });
        Monoid::new(semigroup, move || {
            let mut record = A::default();
            for filler in &fillers {
                filler(&mut record);
            }
            record
        })
    }
}

impl Monoid<String> {
    /// String concatenation with the empty string as identity.
    #[must_use]
    pub fn string() -> Self {
        Self::new(Semigroup::string(), String::new)
    }
}

impl<T: 'static> Monoid<Vec<T>> {
    /// Vector concatenation with the empty vector as identity.
    #[must_use]
    pub fn vec() -> Self {
        Self::new(Semigroup::vec(), Vec::new)
    }
}

impl Monoid<bool> {
    /// Conjunction with `true` as identity.
    #[must_use]
    pub fn all() -> Self {
        Self::new(Semigroup::all(), || true)
    }

    /// Disjunction with `false` as identity.
    #[must_use]
    pub fn any() -> Self {
        Self::new(Semigroup::any(), || false)
    }
}

impl<A: 'static> Monoid<Option<A>> {
    /// Lifts a semigroup into a monoid where `None` is the identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Monoid, Semigroup};
    ///
    /// let sum = Monoid::option(Semigroup::<i32>::sum());
    /// assert_eq!(sum.concat(Some(1), None), Some(1));
    /// assert_eq!(sum.concat(Some(1), Some(2)), Some(3));
    /// assert_eq!(sum.concat_all(Vec::new()), None);
    /// ```
    #[must_use]
    pub fn option(inner: Semigroup<A>) -> Self {
        Self::new(Semigroup::option(inner), || None)
    }

    /// Keeps the first `Some`.
    #[must_use]
    pub fn option_first() -> Self {
        Self::option(Semigroup::first())
    }

    /// Keeps the last `Some`.
    #[must_use]
    pub fn option_last() -> Self {
        Self::option(Semigroup::last())
    }

    /// Combines two `Some`s with `inner`; `None` absorbs. The identity is
    /// `Some(inner.empty())`.
    #[must_use]
    pub fn option_apply(inner: Monoid<A>) -> Self {
        let semigroup = Semigroup::option_apply(inner.semigroup().clone());
        Self::new(semigroup, move || Some(inner.empty()))
    }
}

impl<A: 'static, B: 'static> Monoid<(A, B)> {
    /// Component-wise monoid over pairs.
    #[must_use]
    pub fn tuple2(first: Monoid<A>, second: Monoid<B>) -> Self {
        let semigroup = Semigroup::tuple2(first.semigroup().clone(), second.semigroup().clone());
        Self::new(semigroup, move || (first.empty(), second.empty()))
    }
}

impl<A: 'static, B: 'static, C: 'static> Monoid<(A, B, C)> {
    /// Component-wise monoid over triples.
    #[must_use]
    pub fn tuple3(first: Monoid<A>, second: Monoid<B>, third: Monoid<C>) -> Self {
        let semigroup = Semigroup::tuple3(
            first.semigroup().clone(),
            second.semigroup().clone(),
            third.semigroup().clone(),
        );
        let empty = move || (first.empty(), second.empty(), third.empty());
        Self::new(semigroup, empty)
    }
}

impl<A: 'static, B: 'static> Monoid<Function<A, B>> {
    /// Pointwise monoid over functions. The identity ignores its argument
    /// and returns `codomain.empty()`.
    ///
    /// With [`Monoid::all`] or [`Monoid::any`] this combines predicates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::{Monoid, predicate};
    ///
    /// let any = Monoid::function(Monoid::any());
    /// let small_or_odd = any.concat_all(vec![
    ///     predicate(|n: &i32| *n <= 4),
    ///     predicate(|n: &i32| n % 2 == 1),
    /// ]);
    /// assert!(small_or_odd(&11));
    /// assert!(!small_or_odd(&10));
    /// ```
    #[must_use]
    pub fn function(codomain: Monoid<B>) -> Self {
        let semigroup = Semigroup::function(codomain.semigroup().clone());
        Self::new(semigroup, move || {
            let codomain = codomain.clone();
            let constant: Function<A, B> = Arc::new(move |_: &A| codomain.empty());
            constant
        })
    }
}

impl<A: 'static> Monoid<Order<A>> {
    /// Orderings under tie-breaking: `concat(first, second)` compares with
    /// `first` and falls back to `second` on `Equal`. The identity treats
    /// every pair as equal.
    #[must_use]
    pub fn order() -> Self {
        let semigroup = Semigroup::new(|first: Order<A>, second: Order<A>| first.then(&second));
        let identity = || Order::from_compare(|_: &A, _: &A| Ordering::Equal);
        Self::new(semigroup, identity)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_string_identity(value in "\\PC*") {
            let strings = Monoid::string();
            let left = strings.concat(strings.empty(), value.clone());
            let right = strings.concat(value.clone(), strings.empty());
            prop_assert_eq!(&left, &value);
            prop_assert_eq!(right, value);
        }

        #[test]
        fn prop_sum_identity(value in -10000i64..10000i64) {
            let sum = Monoid::<i64>::sum();
            prop_assert_eq!(sum.concat(sum.empty(), value), value);
            prop_assert_eq!(sum.concat(value, sum.empty()), value);
        }

        #[test]
        fn prop_option_last_identity(value: Option<i32>) {
            let last = Monoid::option_last();
            prop_assert_eq!(last.concat(last.empty(), value), value);
            prop_assert_eq!(last.concat(value, last.empty()), value);
        }

        #[test]
        fn prop_concat_all_matches_fold(
            values in prop::collection::vec(-1000i32..1000i32, 0..20)
        ) {
            let expected: i32 = values.iter().sum();
            prop_assert_eq!(Monoid::<i32>::sum().concat_all(values), expected);
        }
    }
}
