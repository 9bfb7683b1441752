//! Ordering types for typed queries.
//!
//! Provides [`Dir`] for sort direction and [`Comparator`] for ordering the
//! projected elements of a typed query.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type CompareFn<'a, U> = dyn Fn(&U, &U) -> Ordering + Send + Sync + 'a;

/// An ordering function over elements of type `U`.
///
/// Sorting with a comparator is always stable: elements comparing equal keep
/// their pipeline order.
pub struct Comparator<'a, U> {
    compare: Arc<CompareFn<'a, U>>,
}

impl<'a, U: 'a> Comparator<'a, U> {
    /// Wraps a comparison closure.
    pub fn by<F>(compare: F) -> Self
    where
        F: Fn(&U, &U) -> Ordering + Send + Sync + 'a,
    {
        Comparator {
            compare: Arc::new(compare),
        }
    }

    /// Orders elements by the natural ordering of an extracted key.
    pub fn by_key<K, F>(key: F) -> Self
    where
        K: Ord + 'a,
        F: Fn(&U) -> K + Send + Sync + 'a,
    {
        Comparator::by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Orders elements by their own natural ordering.
    pub fn natural() -> Self
    where
        U: Ord,
    {
        Comparator::by(|a: &U, b: &U| a.cmp(b))
    }

    /// Applies a direction on top of this comparator.
    pub fn directed(self, dir: Dir) -> Self {
        match dir {
            Dir::Asc => self,
            Dir::Desc => self.reversed(),
        }
    }

    /// Reverses this comparator.
    pub fn reversed(self) -> Self {
        let compare = self.compare;
        Comparator::by(move |a, b| compare(a, b).reverse())
    }
}

impl<U> Comparator<'_, U> {
    /// Compares two elements.
    pub fn compare(&self, a: &U, b: &U) -> Ordering {
        (self.compare)(a, b)
    }

    /// Stable-sorts a slice with this comparator.
    pub fn sort(&self, items: &mut [U]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl<'a, U: 'a, F> From<F> for Comparator<'a, U>
where
    F: Fn(&U, &U) -> Ordering + Send + Sync + 'a,
{
    fn from(compare: F) -> Self {
        Comparator::by(compare)
    }
}

impl<U> Clone for Comparator<'_, U> {
    fn clone(&self) -> Self {
        Comparator {
            compare: Arc::clone(&self.compare),
        }
    }
}

impl<U> fmt::Debug for Comparator<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Comparator(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dir_apply() {
        assert_eq!(Dir::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(Dir::Asc.apply(Ordering::Equal), Ordering::Equal);
        assert_eq!(Dir::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(Dir::Desc.apply(Ordering::Equal), Ordering::Equal);
    }

    #[test]
    fn dir_display() {
        assert_eq!(Dir::Asc.to_string(), "asc");
        assert_eq!(Dir::Desc.to_string(), "desc");
        assert_eq!(Dir::default(), Dir::Asc);
    }

    #[test]
    fn natural_sort() {
        let mut items = vec![3, 1, 2];
        Comparator::natural().sort(&mut items);
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn reversed_sort() {
        let mut items = vec![3, 1, 2];
        Comparator::natural().reversed().sort(&mut items);
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn directed_matches_dir() {
        let asc = Comparator::<i32>::natural().directed(Dir::Asc);
        let desc = Comparator::<i32>::natural().directed(Dir::Desc);
        assert_eq!(asc.compare(&1, &2), Ordering::Less);
        assert_eq!(desc.compare(&1, &2), Ordering::Greater);
    }

    #[test]
    fn by_key_is_stable() {
        let mut items = vec![("b", 2), ("a", 1), ("c", 2), ("d", 1)];
        Comparator::by_key(|item: &(&str, i32)| item.1).sort(&mut items);
        assert_eq!(items, vec![("a", 1), ("d", 1), ("b", 2), ("c", 2)]);
    }

    #[test]
    fn closures_convert() {
        let cmp: Comparator<'_, i32> = (|a: &i32, b: &i32| b.cmp(a)).into();
        assert_eq!(cmp.compare(&1, &2), Ordering::Greater);
    }
}
