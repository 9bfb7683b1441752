//! Page descriptors for paged selects.
//!
//! A [`Paging`] is built in two steps so the page number always comes first:
//!
//! ```
//! use listquery::Paging;
//!
//! let paging = Paging::page(2).each_containing(10)?;
//! assert_eq!(paging.offset(), 10);
//! # Ok::<(), listquery::QueryError>(())
//! ```

use crate::error::{QueryError, Result};

/// A 1-indexed page of at most `per_page` elements.
///
/// Values are validated on construction: `page >= 1` and `per_page >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPaging"))]
pub struct Paging {
    page: usize,
    per_page: usize,
}

impl Paging {
    /// Starts a paging descriptor for the given page (counted from 1).
    ///
    /// Finish it with [`OngoingPaging::each_containing`].
    pub fn page(page: usize) -> OngoingPaging {
        OngoingPaging { page }
    }

    /// Creates a paging descriptor in one call.
    pub fn new(page: usize, per_page: usize) -> Result<Self> {
        if page == 0 {
            return Err(QueryError::InvalidPage { page });
        }
        if per_page == 0 {
            return Err(QueryError::InvalidPageSize { per_page });
        }
        Ok(Paging { page, per_page })
    }

    /// Returns the page number, starting at 1.
    pub fn page_number(&self) -> usize {
        self.page
    }

    /// Returns the maximum number of elements on a page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Returns the number of elements skipped before this page.
    ///
    /// Saturates instead of overflowing, so absurdly large pages are simply empty.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

/// The first half of a [`Paging`]: a page number waiting for its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OngoingPaging {
    page: usize,
}

impl OngoingPaging {
    /// Returns the page number given to [`Paging::page`].
    pub fn page_number(&self) -> usize {
        self.page
    }

    /// Completes the descriptor with the page size.
    ///
    /// Fails if the page number is 0 or `per_page` is 0.
    pub fn each_containing(self, per_page: usize) -> Result<Paging> {
        Paging::new(self.page, per_page)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPaging {
    page: usize,
    per_page: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPaging> for Paging {
    type Error = QueryError;

    fn try_from(raw: RawPaging) -> Result<Self> {
        Paging::new(raw.page, raw.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_step_builder() {
        let paging = Paging::page(3).each_containing(5).unwrap();
        assert_eq!(paging.page_number(), 3);
        assert_eq!(paging.per_page(), 5);
        assert_eq!(paging.offset(), 10);
    }

    #[test]
    fn first_page_has_no_offset() {
        let paging = Paging::page(1).each_containing(7).unwrap();
        assert_eq!(paging.offset(), 0);
    }

    #[test]
    fn ongoing_keeps_page_number() {
        assert_eq!(Paging::page(4).page_number(), 4);
    }

    #[test]
    fn page_zero_is_rejected() {
        assert_eq!(
            Paging::page(0).each_containing(10),
            Err(QueryError::InvalidPage { page: 0 })
        );
    }

    #[test]
    fn empty_pages_are_rejected() {
        assert_eq!(
            Paging::page(1).each_containing(0),
            Err(QueryError::InvalidPageSize { per_page: 0 })
        );
    }

    #[test]
    fn page_is_checked_before_size() {
        assert_eq!(Paging::new(0, 0), Err(QueryError::InvalidPage { page: 0 }));
    }

    #[test]
    fn huge_offset_saturates() {
        let paging = Paging::new(usize::MAX, 2).unwrap();
        assert_eq!(paging.offset(), usize::MAX);
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            QueryError::InvalidPage { page: 0 }.to_string(),
            "invalid page 0: pages are counted from 1"
        );
        assert_eq!(
            QueryError::InvalidPageSize { per_page: 0 }.to_string(),
            "invalid page size 0: a page must hold at least one element"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates() {
        let paging: Paging = serde_json::from_str(r#"{"page":2,"per_page":25}"#).unwrap();
        assert_eq!(paging, Paging::new(2, 25).unwrap());

        let invalid = serde_json::from_str::<Paging>(r#"{"page":0,"per_page":25}"#);
        assert!(invalid.is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialize_fields() {
        let json = serde_json::to_string(&Paging::new(2, 25).unwrap()).unwrap();
        assert_eq!(json, r#"{"page":2,"per_page":25}"#);
    }
}
