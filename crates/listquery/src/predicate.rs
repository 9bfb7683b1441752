//! Combinable element predicates.
//!
//! A [`Predicate`] is a shareable boolean test. Combining predicates builds a
//! new one immediately; no list of clauses is kept, so `a.and(b).or(c)` always
//! means `(a ∧ b) ∨ c`.

use std::fmt;
use std::sync::Arc;

type TestFn<'a, T> = dyn Fn(&T) -> bool + Send + Sync + 'a;

/// A boolean test over elements of type `T`.
pub struct Predicate<'a, T> {
    test: Arc<TestFn<'a, T>>,
}

impl<'a, T: 'a> Predicate<'a, T> {
    /// Wraps a closure as a predicate.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'a,
    {
        Predicate {
            test: Arc::new(test),
        }
    }

    /// A predicate that accepts every element.
    pub fn accept_all() -> Self {
        Predicate::new(|_| true)
    }

    /// Returns a predicate matching elements accepted by both `self` and `other`.
    ///
    /// `other` is not evaluated when `self` rejects the element.
    pub fn and(self, other: impl Into<Predicate<'a, T>>) -> Self {
        let (left, right) = (self.test, other.into().test);
        Predicate::new(move |item| left(item) && right(item))
    }

    /// Returns a predicate matching elements accepted by `self` or `other`.
    ///
    /// `other` is not evaluated when `self` accepts the element.
    pub fn or(self, other: impl Into<Predicate<'a, T>>) -> Self {
        let (left, right) = (self.test, other.into().test);
        Predicate::new(move |item| left(item) || right(item))
    }
}

impl<T> Predicate<'_, T> {
    /// Tests a single element.
    pub fn test(&self, item: &T) -> bool {
        (self.test)(item)
    }
}

impl<'a, T: 'a, F> From<F> for Predicate<'a, T>
where
    F: Fn(&T) -> bool + Send + Sync + 'a,
{
    fn from(test: F) -> Self {
        Predicate::new(test)
    }
}

impl<'a, T: 'a> Default for Predicate<'a, T> {
    fn default() -> Self {
        Predicate::accept_all()
    }
}

impl<T> Clone for Predicate<'_, T> {
    fn clone(&self) -> Self {
        Predicate {
            test: Arc::clone(&self.test),
        }
    }
}

impl<T> fmt::Debug for Predicate<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}
