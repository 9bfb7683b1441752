//! Queries whose result type was pinned by `order_by`.

use std::any::type_name;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::ordering::Comparator;
use crate::paging::Paging;
use crate::pipeline::Pipeline;
use crate::predicate::Predicate;
use crate::stage::{ByComparator, Dedup, Distinct, OrderedBy, Special, Stage};

/// A query ordered by a comparator over the result type `U`.
///
/// Created by [`ListQuery::order_by`](crate::ListQuery::order_by) and
/// [`ListQuery::order_by_key`](crate::ListQuery::order_by_key). Only mapping
/// selects (`T -> U`) are available.
///
/// # Example
///
/// ```
/// #[derive(Debug, Clone, PartialEq)]
/// struct Name {
///     first: &'static str,
///     last: &'static str,
/// }
///
/// let names = [
///     Name { first: "Alice", last: "Liddell" },
///     Name { first: "Bob", last: "Dylan" },
///     Name { first: "Clara", last: "Oswald" },
/// ];
///
/// let by_last_name = listquery::from(&names)
///     .order_by_key(|n: &Name| n.last)
///     .select_map(|n| n.clone());
/// assert_eq!(by_last_name[0].first, "Bob");
/// assert_eq!(by_last_name[2].first, "Clara");
/// ```
pub struct TypedListQuery<'a, T, U, S = OrderedBy> {
    source: &'a [T],
    predicate: Predicate<'a, T>,
    comparator: Comparator<'a, U>,
    limit: Option<usize>,
    _stage: PhantomData<S>,
}

impl<'a, T, U> TypedListQuery<'a, T, U, OrderedBy> {
    /// Source and predicate are taken as they are; limit starts unbounded.
    pub(crate) fn new(
        source: &'a [T],
        predicate: Predicate<'a, T>,
        comparator: Comparator<'a, U>,
    ) -> Self {
        TypedListQuery {
            source,
            predicate,
            comparator,
            limit: None,
            _stage: PhantomData,
        }
    }
}

impl<'a, T, U, S> TypedListQuery<'a, T, U, S>
where
    S: Stage<Sort = ByComparator>,
{
    /// Drops later duplicates of the projected elements.
    pub fn distinct(self) -> TypedListQuery<'a, T, U, Special<ByComparator, Distinct>>
    where
        U: Eq + Hash,
    {
        self.into_stage()
    }

    /// Considers at most `limit` filtered elements, in source order.
    ///
    /// Calling it again replaces the previous limit.
    pub fn limit(
        mut self,
        limit: usize,
    ) -> TypedListQuery<'a, T, U, Special<ByComparator, S::Dedup>> {
        self.limit = Some(limit);
        self.into_stage()
    }

    /// Returns the selected elements projected through `mapper`, sorted with
    /// the query's comparator.
    pub fn select_map<F>(&self, mapper: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Dedup: Dedup<U>,
    {
        self.evaluate(mapper, None)
    }

    /// Returns one page of the projected elements, sorted with the query's
    /// comparator.
    ///
    /// The page is cut before sorting.
    pub fn select_map_paged<F>(&self, mapper: F, paging: Paging) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Dedup: Dedup<U>,
    {
        self.evaluate(mapper, Some(paging))
    }

    /// Returns the first projected element after sorting, if any.
    pub fn select_first_map<F>(&self, mapper: F) -> Option<U>
    where
        F: FnMut(&'a T) -> U,
        S::Dedup: Dedup<U>,
    {
        self.select_map(mapper).into_iter().next()
    }

    /// Returns the queried slice.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// Returns the limit, if set.
    pub fn get_limit(&self) -> Option<usize> {
        self.limit
    }

    fn evaluate<F>(&self, mapper: F, paging: Option<Paging>) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
        S::Dedup: Dedup<U>,
    {
        let pipeline = Pipeline {
            source: self.source,
            predicate: &self.predicate,
            limit: self.limit,
        };
        let mut items = pipeline.run::<U, S::Dedup, F>(mapper, paging);
        self.comparator.sort(&mut items);
        items
    }

    fn into_stage<N>(self) -> TypedListQuery<'a, T, U, N> {
        TypedListQuery {
            source: self.source,
            predicate: self.predicate,
            comparator: self.comparator,
            limit: self.limit,
            _stage: PhantomData,
        }
    }
}

impl<T, U, S> Clone for TypedListQuery<'_, T, U, S> {
    fn clone(&self) -> Self {
        TypedListQuery {
            source: self.source,
            predicate: self.predicate.clone(),
            comparator: self.comparator.clone(),
            limit: self.limit,
            _stage: PhantomData,
        }
    }
}

impl<T, U, S> fmt::Debug for TypedListQuery<'_, T, U, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedListQuery")
            .field("source_len", &self.source.len())
            .field("limit", &self.limit)
            .field("stage", &type_name::<S>())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::from;

    #[test]
    fn comparator_orders_projection() {
        let items = [1, 2, 3, 4, 5];
        let out = from(&items)
            .order_by(|a: &i32, b: &i32| b.cmp(a))
            .select_map(|e| *e);
        assert_eq!(out, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn snapshot_keeps_filter() {
        let items = [4, 1, 5, 2, 3];
        let out = from(&items)
            .filter(|e| *e > 3)
            .order_by_key(|e: &i32| *e)
            .select_map(|e| *e);
        assert_eq!(out, vec![4, 5]);
    }

    #[test]
    fn distinct_then_limit_keeps_distinct() {
        let items = [1, 1, 2, 2, 3];
        let query = from(&items)
            .order_by_key(|e: &i32| *e)
            .distinct()
            .limit(4);
        assert_eq!(query.get_limit(), Some(4));
        assert_eq!(query.select_map(|e| *e), vec![1, 2]);
    }

    #[test]
    fn reusable_after_select() {
        let items = [3, 1, 2];
        let query = from(&items).order_by_key(|e: &i32| *e);
        assert_eq!(query.select_map(|e| *e), vec![1, 2, 3]);
        assert_eq!(query.clone().limit(2).select_map(|e| *e), vec![1, 3]);
        assert_eq!(query.select_first_map(|e| *e), Some(1));
    }

    #[test]
    fn debug_output() {
        let items = [1, 2];
        let debug = format!("{:?}", from(&items).order_by_key(|e: &i32| *e));
        assert!(debug.starts_with("TypedListQuery { source_len: 2, limit: None, stage: "));
        assert!(debug.contains("OrderedBy"));
    }
}
