//! A vector that always holds at least one element.

use std::iter::{Chain, Once};
use std::{iter, slice, vec};

use crate::typeclass::Semigroup;

/// An ordered collection with at least one element.
///
/// Used as the error type of accumulating validation: a failure always
/// carries at least one reason.
///
/// # Examples
///
/// ```rust
/// use fpkit::control::NonEmptyVec;
///
/// let mut errors = NonEmptyVec::new("too short");
/// errors.push("no digit");
///
/// assert_eq!(errors.head(), &"too short");
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.into_vec(), vec!["too short", "no digit"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyVec<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmptyVec<A> {
    /// Creates a collection holding exactly `head`.
    #[must_use]
    pub const fn new(head: A) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Returns `None` for an empty vector.
    #[must_use]
    pub fn from_vec(values: Vec<A>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(Self {
            head,
            tail: values.collect(),
        })
    }

    /// The first element.
    #[must_use]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// The elements after the first.
    #[must_use]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// The last element.
    #[must_use]
    pub fn last(&self) -> &A {
        self.tail.last().unwrap_or(&self.head)
    }

    /// The number of elements, at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Appends an element.
    pub fn push(&mut self, value: A) {
        self.tail.push(value);
    }

    /// Appends every element of `other`, keeping order.
    pub fn append(&mut self, other: Self) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    /// Iterates over the elements in order.
    #[must_use]
    pub fn iter(&self) -> Chain<Once<&A>, slice::Iter<'_, A>> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    /// Applies `f` to every element.
    #[must_use]
    pub fn map<B, F>(self, mut f: F) -> NonEmptyVec<B>
    where
        F: FnMut(A) -> B,
    {
        NonEmptyVec {
            head: f(self.head),
            tail: self.tail.into_iter().map(f).collect(),
        }
    }

    /// Converts into a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<A> {
        let mut values = Vec::with_capacity(self.len());
        values.push(self.head);
        values.extend(self.tail);
        values
    }
}

impl<A> From<NonEmptyVec<A>> for Vec<A> {
    fn from(values: NonEmptyVec<A>) -> Self {
        values.into_vec()
    }
}

impl<A> IntoIterator for NonEmptyVec<A> {
    type Item = A;
    type IntoIter = Chain<Once<A>, vec::IntoIter<A>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, A> IntoIterator for &'a NonEmptyVec<A> {
    type Item = &'a A;
    type IntoIter = Chain<Once<&'a A>, slice::Iter<'a, A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: 'static> Semigroup<NonEmptyVec<A>> {
    /// Concatenation of non-empty vectors, left elements first.
    #[must_use]
    pub fn non_empty_vec() -> Self {
        Self::new(|mut left: NonEmptyVec<A>, right: NonEmptyVec<A>| {
            left.append(right);
            left
        })
    }
}
