//! Query evaluation.
//!
//! Every terminal select runs the same fixed sequence of stages over the
//! source:
//!
//! 1. **filter**: keep elements accepted by the predicate
//! 2. **cap**: keep at most `limit` of them, in source order
//! 3. **project**: apply the mapper
//! 4. **dedupe**: drop later duplicates (only for `distinct` queries)
//! 5. **page**: skip `(page - 1) * per_page` elements, keep `per_page`
//! 6. **sort**: stable-sort whatever is left (only for ordered queries)
//!
//! Paging happens before sorting. An ordered, paged query therefore returns a
//! sorted page of the unsorted pipeline, not a page of the sorted pipeline.

use tracing::trace;

use crate::paging::Paging;
use crate::predicate::Predicate;
use crate::stage::Dedup;

/// The part of a query state that is independent of ordering.
pub(crate) struct Pipeline<'q, 'a, T> {
    pub(crate) source: &'a [T],
    pub(crate) predicate: &'q Predicate<'a, T>,
    pub(crate) limit: Option<usize>,
}

impl<'a, T> Pipeline<'_, 'a, T> {
    /// Runs stages 1 to 5. Sorting is left to the caller, which knows the
    /// query's sort strategy.
    pub(crate) fn run<U, D, F>(&self, mapper: F, paging: Option<Paging>) -> Vec<U>
    where
        D: Dedup<U>,
        F: FnMut(&'a T) -> U,
    {
        trace!(
            source = self.source.len(),
            limit = ?self.limit,
            paging = ?paging,
            "evaluating list query"
        );

        let projected: Vec<U> = self
            .source
            .iter()
            .filter(|item| self.predicate.test(item))
            .take(self.limit.unwrap_or(usize::MAX))
            .map(mapper)
            .collect();
        let projected_len = projected.len();

        let mut items = D::dedup(projected);
        if let Some(paging) = paging {
            items = page(items, paging);
        }

        trace!(
            projected = projected_len,
            selected = items.len(),
            "list query materialized"
        );
        items
    }
}

fn page<U>(items: Vec<U>, paging: Paging) -> Vec<U> {
    items
        .into_iter()
        .skip(paging.offset())
        .take(paging.per_page())
        .collect()
}
