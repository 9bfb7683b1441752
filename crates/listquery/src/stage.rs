//! Phantom types for query stages.
//!
//! These zero-sized types enforce the query grammar at compile time:
//!
//! ```text
//! Query   ::= from(source) Where? (ordered() | order_by(..))? Special* Select
//! Where   ::= filter(pred) (and(pred) | or(pred))*
//! Special ::= distinct() | limit(n)
//! ```
//!
//! Each stage marker also records how the terminal select sorts
//! ([`Stage::Sort`]) and deduplicates ([`Stage::Dedup`]) the projected
//! elements, so those bounds are only required when they are used.
//!
//! Chains the grammar forbids do not compile. A second `filter`:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).filter(|e| *e > 1).filter(|e| *e > 2).select();
//! ```
//!
//! `and`/`or` without a preceding `filter`:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).and(|e| *e > 1).select();
//! ```
//!
//! Ordering twice:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).ordered().ordered().select();
//! ```
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items)
//!     .order_by_key(|e: &i32| *e)
//!     .order_by_key(|e: &i32| -e)
//!     .select_map(|e| *e);
//! ```
//!
//! Filtering after ordering:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).ordered().filter(|e| *e > 1).select();
//! ```
//!
//! Ordering or filtering after `distinct`/`limit`:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).distinct().ordered().select();
//! ```
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).limit(1).filter(|e| *e > 1).select();
//! ```
//!
//! A plain `select()` after `order_by`, which pins the element type:
//!
//! ```compile_fail
//! let items = [1, 2, 3];
//! listquery::from(&items).order_by_key(|e: &i32| *e).select();
//! ```
//!
//! Natural ordering of elements without a total order fails at the select:
//!
//! ```compile_fail
//! struct Opaque;
//! let items = [Opaque, Opaque];
//! listquery::from(&items).ordered().select();
//! ```

use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// Initial stage: nothing applied yet.
pub struct Unfiltered;

/// Stage after `filter`; `and`/`or` keep the query here.
pub struct Filtered;

/// Stage after `ordered()`: natural ordering, element type unchanged.
pub struct Ordered;

/// Stage after `order_by`/`order_by_key`: element type pinned.
pub struct OrderedBy;

/// Stage after `distinct()`/`limit(n)`.
///
/// `O` is the sort strategy carried over from earlier stages and `D` the
/// dedupe strategy.
pub struct Special<O, D>(PhantomData<fn() -> (O, D)>);

/// Sort strategy: keep pipeline order.
pub struct Unsorted;

/// Sort strategy: natural (`Ord`) order of the projected elements.
pub struct Natural;

/// Sort strategy: the typed query's comparator.
pub struct ByComparator;

/// Dedupe strategy: keep every element.
pub struct KeepAll;

/// Dedupe strategy: drop later duplicates, keeping first-seen order.
pub struct Distinct;

/// A point in the query grammar.
pub trait Stage: sealed::Sealed {
    /// How the terminal select sorts.
    type Sort;
    /// How the terminal select deduplicates.
    type Dedup;
}

/// Stages from which `ordered()`/`order_by()` are still reachable.
pub trait Unordered: Stage {}

impl sealed::Sealed for Unfiltered {}
impl sealed::Sealed for Filtered {}
impl sealed::Sealed for Ordered {}
impl sealed::Sealed for OrderedBy {}
impl<O, D> sealed::Sealed for Special<O, D> {}

impl Stage for Unfiltered {
    type Sort = Unsorted;
    type Dedup = KeepAll;
}

impl Stage for Filtered {
    type Sort = Unsorted;
    type Dedup = KeepAll;
}

impl Stage for Ordered {
    type Sort = Natural;
    type Dedup = KeepAll;
}

impl Stage for OrderedBy {
    type Sort = ByComparator;
    type Dedup = KeepAll;
}

impl<O, D> Stage for Special<O, D> {
    type Sort = O;
    type Dedup = D;
}

impl Unordered for Unfiltered {}
impl Unordered for Filtered {}

/// Sorts projected elements at the end of the pipeline.
pub trait Sorting<U> {
    /// Stable-sorts `items` in place.
    fn sort(items: &mut [U]);
}

impl<U> Sorting<U> for Unsorted {
    fn sort(_items: &mut [U]) {}
}

impl<U: Ord> Sorting<U> for Natural {
    fn sort(items: &mut [U]) {
        items.sort();
    }
}

/// Removes duplicate projected elements.
pub trait Dedup<U> {
    /// Returns `items` without later duplicates, preserving first-seen order.
    fn dedup(items: Vec<U>) -> Vec<U>;
}

impl<U> Dedup<U> for KeepAll {
    fn dedup(items: Vec<U>) -> Vec<U> {
        items
    }
}

impl<U: Eq + Hash> Dedup<U> for Distinct {
    fn dedup(items: Vec<U>) -> Vec<U> {
        let first_seen: Vec<bool> = {
            let mut seen = HashSet::with_capacity(items.len());
            items.iter().map(|item| seen.insert(item)).collect()
        };
        items
            .into_iter()
            .zip(first_seen)
            .filter_map(|(item, first)| first.then_some(item))
            .collect()
    }
}
