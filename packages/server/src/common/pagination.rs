//! Offset pagination for catalog listings.
//!
//! Requests arrive as optional `page` / `perPage` values; [`PageRequest::validate`]
//! applies the defaults and bounds and yields a [`Pagination`] that knows its
//! SQL `LIMIT` and `OFFSET`.
//!
//! ```rust
//! use catalog_core::common::{last_page, PageRequest};
//!
//! let pagination = PageRequest { page: Some(3), per_page: Some(10) }.validate()?;
//! assert_eq!(pagination.offset(), 20);
//! assert_eq!(last_page(41, pagination.per_page), 5);
//! # Ok::<(), catalog_core::common::PaginationError>(())
//! ```

use serde::Deserialize;

/// Page used when the request names none.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the request names none.
pub const DEFAULT_PER_PAGE: i64 = 20;

/// Largest page size served; larger requests are clamped.
pub const MAX_PER_PAGE: i64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("page must be at least 1")]
    PageTooSmall,

    #[error("perPage must be at least 1")]
    PerPageTooSmall,

    #[error("page is out of range")]
    PageOutOfRange,
}

/// Raw pagination input, as parsed from a query string.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PageRequest {
    /// Apply defaults (page 1, 20 per page) and bounds.
    pub fn validate(&self) -> Result<Pagination, PaginationError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE);
        if page < 1 {
            return Err(PaginationError::PageTooSmall);
        }

        let per_page = self.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if per_page < 1 {
            return Err(PaginationError::PerPageTooSmall);
        }
        let per_page = per_page.min(MAX_PER_PAGE);

        // offset must be representable for the OFFSET bind
        (page - 1)
            .checked_mul(per_page)
            .ok_or(PaginationError::PageOutOfRange)?;

        Ok(Pagination { page, per_page })
    }
}

/// Validated pagination: `page >= 1`, `1 <= per_page <= MAX_PER_PAGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Pagination {
    /// SQL `LIMIT`.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET`: `(page - 1) * per_page`.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// Number of the last page: `ceil(total_count / per_page)`, never below 1.
///
/// An empty catalog still has one (empty) page.
pub fn last_page(total_count: i64, per_page: i64) -> i64 {
    debug_assert!(per_page > 0, "per_page must be positive");
    let pages = total_count / per_page + i64::from(total_count % per_page != 0);
    pages.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_defaults() {
        let pagination = PageRequest::default().validate().unwrap();
        assert_eq!(pagination, Pagination { page: 1, per_page: 20 });
        assert_eq!(pagination.offset(), 0);
        assert_eq!(pagination.limit(), 20);
    }

    #[test]
    fn test_offset_follows_page() {
        let pagination = PageRequest {
            page: Some(4),
            per_page: Some(25),
        }
        .validate()
        .unwrap();
        assert_eq!(pagination.offset(), 75);
    }

    #[test]
    fn test_rejects_non_positive_values() {
        let zero_page = PageRequest {
            page: Some(0),
            per_page: None,
        };
        assert_eq!(zero_page.validate(), Err(PaginationError::PageTooSmall));

        let negative_size = PageRequest {
            page: None,
            per_page: Some(-5),
        };
        assert_eq!(negative_size.validate(), Err(PaginationError::PerPageTooSmall));
    }

    #[test]
    fn test_clamps_per_page() {
        let pagination = PageRequest {
            page: None,
            per_page: Some(500),
        }
        .validate()
        .unwrap();
        assert_eq!(pagination.per_page, MAX_PER_PAGE);
    }

    #[test]
    fn test_rejects_overflowing_offset() {
        let request = PageRequest {
            page: Some(i64::MAX),
            per_page: Some(50),
        };
        assert_eq!(request.validate(), Err(PaginationError::PageOutOfRange));
    }

    #[test]
    fn test_last_page_examples() {
        assert_eq!(last_page(0, 20), 1);
        assert_eq!(last_page(1, 20), 1);
        assert_eq!(last_page(20, 20), 1);
        assert_eq!(last_page(21, 20), 2);
        assert_eq!(last_page(100, 7), 15);
    }

    proptest! {
        #[test]
        fn last_page_is_ceiling_floored_to_one(total in 0i64..1_000_000, per_page in 1i64..=500) {
            let expected = ((total as f64) / (per_page as f64)).ceil() as i64;
            prop_assert_eq!(last_page(total, per_page), expected.max(1));
        }

        #[test]
        fn last_page_covers_every_row(total in 1i64..1_000_000, per_page in 1i64..=500) {
            let last = last_page(total, per_page);
            prop_assert!((last - 1) * per_page < total);
            prop_assert!(last * per_page >= total);
        }
    }
}
