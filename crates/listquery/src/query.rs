//! Untyped query builder and executor.
//!
//! [`ListQuery`] is built with [`from`](crate::from) and refined through the
//! stages in [`stage`](crate::stage). Builder calls are pure: nothing touches the
//! source until a `select*` call.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::ordering::Comparator;
use crate::paging::Paging;
use crate::pipeline::Pipeline;
use crate::predicate::Predicate;
use crate::stage::{
    Dedup, Distinct, Filtered, Ordered, Sorting, Special, Stage, Unfiltered, Unordered,
};
use crate::typed::TypedListQuery;

/// Starts a query over a borrowed slice.
///
/// # Example
///
/// ```
/// let items = vec![1, 2, 3, 4, 5];
///
/// let odd = listquery::from(&items)
///     .filter(|e| e % 2 == 1)
///     .select();
/// assert_eq!(odd, vec![&1, &3, &5]);
/// ```
pub fn from<T>(source: &[T]) -> ListQuery<'_, T> {
    ListQuery::new(source)
}

/// A query whose element type is still the source's element type.
///
/// The `S` parameter is the current [stage](crate::stage); it decides which
/// calls are available next.
///
/// # Example
///
/// ```
/// use listquery::Paging;
///
/// let items = vec![5, 3, 1, 4, 2];
///
/// let query = listquery::from(&items)
///     .filter(|e| *e > 1)
///     .or(|e| *e == 1)
///     .ordered();
///
/// assert_eq!(query.select(), vec![&1, &2, &3, &4, &5]);
/// assert_eq!(query.select_map(|e| e * 10).len(), 5);
///
/// // Pages are cut before sorting.
/// let page = query.select_paged(Paging::page(1).each_containing(2)?);
/// assert_eq!(page, vec![&3, &5]);
/// # Ok::<(), listquery::QueryError>(())
/// ```
pub struct ListQuery<'a, T, S = Unfiltered> {
    source: &'a [T],
    predicate: Predicate<'a, T>,
    limit: Option<usize>,
    _stage: PhantomData<S>,
}

impl<'a, T> ListQuery<'a, T, Unfiltered> {
    /// Creates a query over every element of `source`.
    pub fn new(source: &'a [T]) -> Self {
        ListQuery {
            source,
            predicate: Predicate::accept_all(),
            limit: None,
            _stage: PhantomData,
        }
    }

    /// Restricts the query to elements accepted by `predicate`.
    ///
    /// Can be called once; refine further with [`and`](ListQuery::and) and
    /// [`or`](ListQuery::or).
    pub fn filter<P>(self, predicate: P) -> ListQuery<'a, T, Filtered>
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.map_predicate(|accept_all| accept_all.and(predicate))
    }
}

impl<'a, T> ListQuery<'a, T, Filtered> {
    /// Keeps only elements also accepted by `predicate`.
    pub fn and<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.map_predicate(|current| current.and(predicate))
    }

    /// Additionally admits elements accepted by `predicate`.
    ///
    /// Combination is strictly left to right:
    /// `filter(a).and(b).or(c)` selects `(a ∧ b) ∨ c`.
    pub fn or<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
    {
        self.map_predicate(|current| current.or(predicate))
    }
}

impl<'a, T, S: Unordered> ListQuery<'a, T, S> {
    /// Sorts the selected elements by their natural order.
    ///
    /// The element type is unchanged. Selects on the resulting query require
    /// the projected type to implement [`Ord`].
    pub fn ordered(self) -> ListQuery<'a, T, Ordered> {
        self.into_stage()
    }

    /// Sorts the selected elements with a comparator over the projected type.
    ///
    /// This pins the result type to `U`: only mapping selects remain.
    pub fn order_by<U>(
        self,
        comparator: impl Into<Comparator<'a, U>>,
    ) -> TypedListQuery<'a, T, U>
    where
        U: 'a,
    {
        TypedListQuery::new(self.source, self.predicate, comparator.into())
    }

    /// Sorts the selected elements by the natural order of a key.
    pub fn order_by_key<U, K, F>(self, key: F) -> TypedListQuery<'a, T, U>
    where
        U: 'a,
        K: Ord + 'a,
        F: Fn(&U) -> K + Send + Sync + 'a,
    {
        self.order_by(Comparator::by_key(key))
    }
}

impl<'a, T, S: Stage> ListQuery<'a, T, S> {
    // ========================================================================
    // Specials
    // ========================================================================

    /// Drops later duplicates of the projected elements.
    pub fn distinct(self) -> ListQuery<'a, T, Special<S::Sort, Distinct>> {
        self.into_stage()
    }

    /// Considers at most `limit` filtered elements, in source order.
    ///
    /// Calling it again replaces the previous limit.
    pub fn limit(mut self, limit: usize) -> ListQuery<'a, T, Special<S::Sort, S::Dedup>> {
        self.limit = Some(limit);
        self.into_stage()
    }

    // ========================================================================
    // Selects
    // ========================================================================

    /// Returns the selected elements.
    pub fn select(&self) -> Vec<&'a T>
    where
        S::Sort: Sorting<&'a T>,
        S::Dedup: Dedup<&'a T>,
    {
        self.evaluate(|item| item, None)
    }

    /// Returns one page of the selected elements.
    pub fn select_paged(&self, paging: Paging) -> Vec<&'a T>
    where
        S::Sort: Sorting<&'a T>,
        S::Dedup: Dedup<&'a T>,
    {
        self.evaluate(|item| item, Some(paging))
    }

    /// Returns the selected elements projected through `mapper`.
    ///
    /// Deduplication and ordering apply to the projected values.
    pub fn select_map<U, F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Sort: Sorting<U>,
        S::Dedup: Dedup<U>,
    {
        self.evaluate(mapper, None)
    }

    /// Returns one page of the selected elements projected through `mapper`.
    pub fn select_map_paged<U, F>(&self, mapper: F, paging: Paging) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Sort: Sorting<U>,
        S::Dedup: Dedup<U>,
    {
        self.evaluate(mapper, Some(paging))
    }

    /// Returns the first selected element, if any.
    pub fn select_first(&self) -> Option<&'a T>
    where
        S::Sort: Sorting<&'a T>,
        S::Dedup: Dedup<&'a T>,
    {
        self.select().into_iter().next()
    }

    /// Returns the first selected element projected through `mapper`, if any.
    pub fn select_first_map<U, F>(&self, mapper: F) -> Option<U>
    where
        F: FnMut(&'a T) -> U,
        S::Sort: Sorting<U>,
        S::Dedup: Dedup<U>,
    {
        self.select_map(mapper).into_iter().next()
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Returns the queried slice.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Returns the limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    fn evaluate<U, F>(&self, mapper: F, paging: Option<Paging>) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Sort: Sorting<U>,
        S::Dedup: Dedup<U>,
    {
        let pipeline = Pipeline {
            source: self.source,
            predicate: &self.predicate,
            limit: self.limit,
        };
        let mut items = pipeline.run::<U, S::Dedup, F>(mapper, paging);
        <S::Sort as Sorting<U>>::sort(&mut items);
        items
    }
}

impl<'a, T, S> ListQuery<'a, T, S> {
    fn into_stage<N>(self) -> ListQuery<'a, T, N> {
        ListQuery {
            source: self.source,
            predicate: self.predicate,
            limit: self.limit,
            _stage: PhantomData,
        }
    }

    fn map_predicate<N>(
        self,
        combine: impl FnOnce(Predicate<'a, T>) -> Predicate<'a, T>,
    ) -> ListQuery<'a, T, N> {
        ListQuery {
            source: self.source,
            predicate: combine(self.predicate),
            limit: self.limit,
            _stage: PhantomData,
        }
    }
}

impl<T, S> Clone for ListQuery<'_, T, S> {
    fn clone(&self) -> Self {
        ListQuery {
            source: self.source,
            predicate: self.predicate.clone(),
            limit: self.limit,
            _stage: PhantomData,
        }
    }
}

impl<T, S> fmt::Debug for ListQuery<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListQuery")
            .field("source_len", &self.source.len())
            .field("limit", &self.limit)
            .field("stage", &type_name::<S>())
            .finish_non_exhaustive()
    }
}
