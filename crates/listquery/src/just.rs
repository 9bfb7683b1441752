//! One-shot collection helpers.
//!
//! Shortcuts for when a full query is more than you need:
//!
//! ```
//! use listquery::just;
//!
//! let items = [1, 2, 3, 4, 5];
//! assert_eq!(just::map(&items, |e| e + 1), vec![2, 3, 4, 5, 6]);
//! assert_eq!(just::join(&items, ", "), "1, 2, 3, 4, 5");
//! assert!(just::one_exists(&items, |e| e % 2 == 0));
//! ```

use std::fmt::{Display, Write};

/// Applies `mapper` to every element.
pub fn map<T, U>(items: &[T], mapper: impl FnMut(&T) -> U) -> Vec<U> {
    items.iter().map(mapper).collect()
}

/// Returns the elements accepted by `predicate`, in order.
pub fn filter<T>(items: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
    items.iter().filter(|&item| predicate(item)).collect()
}

/// Joins the `Display` form of every element with `delimiter`.
pub fn join<T: Display>(items: &[T], delimiter: &str) -> String {
    let mut joined = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            joined.push_str(delimiter);
        }
        // Writing to a String cannot fail.
        let _ = write!(joined, "{item}");
    }
    joined
}

/// Returns `true` if every element is accepted (vacuously true when empty).
pub fn all_are<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().all(predicate)
}

/// Returns `true` if at least one element is accepted.
pub fn one_exists<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    items.iter().any(predicate)
}

/// Returns `true` if no element is accepted.
pub fn none_is<T>(items: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    !one_exists(items, predicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: [i32; 5] = [1, 2, 3, 4, 5];

    #[test]
    fn map_applies_to_all() {
        assert_eq!(map(&ITEMS, |e| e + 1), vec![2, 3, 4, 5, 6]);
    }

    #[test]
    fn filter_keeps_order() {
        assert_eq!(filter(&ITEMS, |e| *e > 2), vec![&3, &4, &5]);
    }

    #[test]
    fn join_uses_display() {
        assert_eq!(join(&ITEMS, ", "), "1, 2, 3, 4, 5");
        assert_eq!(join(&["a"], "-"), "a");
        assert_eq!(join::<i32>(&[], ", "), "");
    }

    #[test]
    fn all_are() {
        assert!(super::all_are(&ITEMS, |e| *e < 10));
        assert!(!super::all_are(&ITEMS, |e| e % 2 == 0));
        assert!(!super::all_are(&ITEMS, |e| *e > 10));
    }

    #[test]
    fn one_exists() {
        assert!(super::one_exists(&ITEMS, |e| *e < 10));
        assert!(super::one_exists(&ITEMS, |e| e % 2 == 0));
        assert!(!super::one_exists(&ITEMS, |e| *e > 10));
    }

    #[test]
    fn none_is() {
        assert!(!super::none_is(&ITEMS, |e| *e < 10));
        assert!(!super::none_is(&ITEMS, |e| e % 2 == 0));
        assert!(super::none_is(&ITEMS, |e| *e > 10));
    }

    #[test]
    fn empty_slices() {
        let empty: [i32; 0] = [];
        assert!(super::all_are(&empty, |_| false));
        assert!(!super::one_exists(&empty, |_| true));
        assert!(super::none_is(&empty, |_| true));
    }
}
