//! Equality capability - an explicit equivalence relation over a type.
//!
//! An [`Equality<A>`] is a value that knows how to decide whether two `A`s
//! are equal. Unlike `PartialEq`, several equalities can coexist for the same
//! type (compare artists by id, numbers by absolute value, ...), and they are
//! always passed explicitly to the functions that need them.
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ## Reflexivity
//!
//! ```text
//! equals(a, a) == true
//! ```
//!
//! ## Symmetry
//!
//! ```text
//! equals(a, b) == equals(b, a)
//! ```
//!
//! ## Transitivity
//!
//! ```text
//! equals(a, b) && equals(b, c) => equals(a, c)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpkit::typeclass::Equality;
//!
//! let absolute = Equality::<i32>::strict().contramap(|n: &i32| n.abs());
//! assert!(absolute.equals(&5, &-5));
//! assert!(!absolute.equals(&5, &4));
//! ```

use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

type EqualsFunction<A> = dyn Fn(&A, &A) -> bool + Send + Sync;

/// A capability deciding equality between two values of type `A`.
///
/// Cloning an `Equality` is cheap: the underlying function is shared.
///
/// # Examples
///
/// ```rust
/// use fpkit::typeclass::Equality;
///
/// let case_insensitive =
///     Equality::from_equals(|left: &String, right: &String| left.eq_ignore_ascii_case(right));
/// assert!(case_insensitive.equals(&"EDEN".to_string(), &"eden".to_string()));
/// ```
pub struct Equality<A> {
    equals: Arc<EqualsFunction<A>>,
}

impl<A> Clone for Equality<A> {
    fn clone(&self) -> Self {
        Self {
            equals: Arc::clone(&self.equals),
        }
    }
}

impl<A> fmt::Debug for Equality<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Equality").finish_non_exhaustive()
    }
}

impl<A> Equality<A> {
    /// Returns `true` when `left` and `right` are equal under this capability.
    #[inline]
    #[must_use]
    pub fn equals(&self, left: &A, right: &A) -> bool {
        (self.equals)(left, right)
    }

    /// Returns `true` when any element of `values` equals `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Equality;
    ///
    /// let numbers = Equality::<i32>::strict();
    /// assert!(numbers.elem(&1, &[1, 2, 3]));
    /// assert!(!numbers.elem(&4, &[1, 2, 3]));
    /// ```
    #[must_use]
    pub fn elem(&self, value: &A, values: &[A]) -> bool {
        values.iter().any(|item| self.equals(item, value))
    }
}

impl<A: 'static> Equality<A> {
    /// Creates an equality from a comparison function.
    ///
    /// The function must be reflexive, symmetric and transitive.
    #[must_use]
    pub fn from_equals<F>(equals: F) -> Self
    where
        F: Fn(&A, &A) -> bool + Send + Sync + 'static,
    {
        Self {
            equals: Arc::new(equals),
        }
    }

    /// The equality given by the type's own `PartialEq`.
    ///
    /// For types whose `PartialEq` is not reflexive (floating point `NaN`)
    /// the reflexivity law does not hold for those values.
    #[must_use]
    pub fn strict() -> Self
    where
        A: PartialEq,
    {
        Self::from_equals(|left: &A, right: &A| left == right)
    }

    /// Derives an equality on `B` by projecting each `B` to an `A`.
    ///
    /// Two `B`s are equal exactly when their projections are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Equality;
    ///
    /// struct Artist { id: u32, name: &'static str }
    ///
    /// let by_id = Equality::<u32>::strict().contramap(|artist: &Artist| artist.id);
    /// assert!(by_id.equals(
    ///     &Artist { id: 1, name: "EDEN" },
    ///     &Artist { id: 1, name: "eden" },
    /// ));
    /// ```
    #[must_use]
    pub fn contramap<B: 'static, F>(&self, projection: F) -> Equality<B>
    where
        F: Fn(&B) -> A + Send + Sync + 'static,
    {
        let equality = self.clone();
        Equality::from_equals(move |left: &B, right: &B| {
            equality.equals(&projection(left), &projection(right))
        })
    }

    /// Like [`contramap`](Self::contramap) for projections that borrow a
    /// part of `B` instead of computing a new value.
    #[must_use]
    pub fn contramap_ref<B: 'static, F>(&self, projection: F) -> Equality<B>
    where
        F: Fn(&B) -> &A + Send + Sync + 'static,
    {
        let equality = self.clone();
        Equality::from_equals(move |left: &B, right: &B| {
            equality.equals(projection(left), projection(right))
        })
    }

    /// Starts a field-wise equality: two values are equal when every
    /// registered field is equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Equality;
    ///
    /// struct Point { x: i32, y: i32 }
    ///
    /// let point = Equality::structural()
    ///     .field(|p: &Point| &p.x, Equality::strict())
    ///     .field(|p: &Point| &p.y, Equality::strict())
    ///     .build();
    ///
    /// assert!(point.equals(&Point { x: 1, y: 2 }, &Point { x: 1, y: 2 }));
    /// assert!(!point.equals(&Point { x: 1, y: 2 }, &Point { x: 2, y: 2 }));
    /// ```
    #[must_use]
    pub fn structural() -> StructuralEquality<A> {
        StructuralEquality { fields: Vec::new() }
    }

    /// Builds an equality for a recursive shape.
    ///
    /// `build` receives a handle that behaves like the equality being
    /// defined, so field equalities can refer to it before it exists.
    ///
    /// # Panics
    ///
    /// The handle panics if it is invoked after the returned equality (and
    /// every clone of it) has been dropped, or from inside `build` itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Equality;
    ///
    /// struct Node { id: String, children: Vec<Node> }
    ///
    /// let node = Equality::recursive(|node| {
    ///     Equality::structural()
    ///         .field(|n: &Node| &n.id, Equality::strict())
    ///         .field(|n: &Node| &n.children, Equality::vec(node))
    ///         .build()
    /// });
    ///
    /// let leaf = || Node { id: "leaf".into(), children: vec![] };
    /// let tree = Node { id: "root".into(), children: vec![leaf()] };
    /// assert!(node.equals(&tree, &Node { id: "root".into(), children: vec![leaf()] }));
    /// assert!(!node.equals(&tree, &leaf()));
    /// ```
    #[must_use]
    pub fn recursive<F>(build: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let cell: Arc<OnceLock<Self>> = Arc::new(OnceLock::new());
        let weak: Weak<OnceLock<Self>> = Arc::downgrade(&cell);

        let handle = Self::from_equals(move |left: &A, right: &A| {
            let Some(cell) = weak.upgrade() else {
                panic!("recursive equality used after it was dropped");
            };
            let Some(equality) = cell.get() else {
                panic!("recursive equality used before it was built");
            };
            equality.equals(left, right)
        });

        let built = build(handle);
        let equality = built.clone();
        // The cell was created above and is set exactly once.
        let _ = cell.set(built);

        Self::from_equals(move |left: &A, right: &A| {
            // Keeps the cell alive for the handles stored inside `built`.
            let _owner = &cell;
            equality.equals(left, right)
        })
    }
}

/// Builder returned by [`Equality::structural`].
pub struct StructuralEquality<A> {
    fields: Vec<Equality<A>>,
}

impl<A: 'static> StructuralEquality<A> {
    /// Adds a field compared with `equality`.
    #[must_use]
    pub fn field<F: 'static, P>(mut self, projection: P, equality: Equality<F>) -> Self
    where
        P: Fn(&A) -> &F + Send + Sync + 'static,
    {
        self.fields.push(equality.contramap_ref(projection));
        self
    }

    /// Finishes the builder. With no fields every pair of values is equal.
    #[must_use]
    pub fn build(self) -> Equality<A> {
        let fields = self.fields;
        Equality::from_equals(move |left: &A, right: &A| {
            fields.iter().all(|field| field.equals(left, right))
        })
    }
}

impl<A: 'static, B: 'static> Equality<(A, B)> {
    /// Component-wise equality for pairs.
    #[must_use]
    pub fn tuple2(first: Equality<A>, second: Equality<B>) -> Self {
        Self::from_equals(move |left: &(A, B), right: &(A, B)| {
            first.equals(&left.0, &right.0) && second.equals(&left.1, &right.1)
        })
    }
}

impl<A: 'static, B: 'static, C: 'static> Equality<(A, B, C)> {
    /// Component-wise equality for triples.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpkit::typeclass::Equality;
    ///
    /// let triple = Equality::tuple3(
    ///     Equality::<&str>::strict(),
    ///     Equality::<i32>::strict(),
    ///     Equality::<bool>::strict(),
    /// );
    /// assert!(triple.equals(&("a", 1, true), &("a", 1, true)));
    /// assert!(!triple.equals(&("a", 1, true), &("a", 1, false)));
    /// ```
    #[must_use]
    pub fn tuple3(first: Equality<A>, second: Equality<B>, third: Equality<C>) -> Self {
        Self::from_equals(move |left: &(A, B, C), right: &(A, B, C)| {
            first.equals(&left.0, &right.0)
                && second.equals(&left.1, &right.1)
                && third.equals(&left.2, &right.2)
        })
    }
}

impl<A: 'static> Equality<Vec<A>> {
    /// Element-wise equality: same length and equal elements position by position.
    #[must_use]
    pub fn vec(element: Equality<A>) -> Self {
        Self::from_equals(move |left: &Vec<A>, right: &Vec<A>| {
            left.len() == right.len() && left.iter().zip(right).all(|(a, b)| element.equals(a, b))
        })
    }
}

impl<A: 'static> Equality<Option<A>> {
    /// `None` equals only `None`; two `Some`s compare their contents.
    #[must_use]
    pub fn option(inner: Equality<A>) -> Self {
        Self::from_equals(move |left, right| match (left, right) {
            (None, None) => true,
            (Some(left), Some(right)) => inner.equals(left, right),
            _ => false,
        })
    }
}

impl<A: 'static, E: 'static> Equality<Result<A, E>> {
    /// Results are equal when they are the same variant with equal payloads.
    #[must_use]
    pub fn result(success: Equality<A>, failure: Equality<E>) -> Self {
        Self::from_equals(move |left, right| match (left, right) {
            (Ok(left), Ok(right)) => success.equals(left, right),
            (Err(left), Err(right)) => failure.equals(left, right),
            _ => false,
        })
    }
}
