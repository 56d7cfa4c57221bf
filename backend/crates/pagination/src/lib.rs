//! Page-number pagination primitives for Trivia API endpoints.
//!
//! Listing endpoints split an id-ordered result set into fixed pages of
//! [`PAGE_SIZE`] items addressed by a 1-indexed page number. This crate owns
//! the arithmetic so HTTP adapters and persistence adapters agree on page
//! boundaries:
//!
//! - [`PageRequest`] parses the `page` query parameter and exposes the SQL
//!   offset and limit for the page.
//! - [`PageRequest::slice`] applies the same boundaries to an in-memory
//!   slice.
//! - [`Page`] pairs one page of items with the size of the full result set.
//!
//! # Examples
//!
//! ```
//! use pagination::PageRequest;
//!
//! let request = PageRequest::from_query(Some("2")).expect("valid page");
//! assert_eq!(request.offset(), 10);
//!
//! let items: Vec<u32> = (1..=25).collect();
//! assert_eq!(request.slice(&items), &[11, 12, 13, 14, 15, 16, 17, 18, 19, 20]);
//! ```

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;

/// Number of items on every page.
pub const PAGE_SIZE: u32 = 10;

/// Errors raised when a page number cannot address a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers start at one.
    #[error("page number must be at least 1, got {page}")]
    NotPositive {
        /// The rejected page number.
        page: i64,
    },
    /// Page number does not fit the supported range.
    #[error("page number {page} is out of range")]
    OutOfRange {
        /// The rejected page number.
        page: i64,
    },
}

/// A validated, 1-indexed page number.
///
/// ## Invariants
/// - The page number is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: NonZeroU32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

impl PageRequest {
    /// The first page.
    #[must_use]
    pub const fn first() -> Self {
        Self {
            page: NonZeroU32::MIN,
        }
    }

    /// Build a request for the given 1-indexed page.
    ///
    /// # Errors
    /// Returns [`PageRequestError::NotPositive`] when `page` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::{PageRequest, PageRequestError};
    ///
    /// assert_eq!(PageRequest::new(3).map(PageRequest::number), Ok(3));
    /// assert_eq!(
    ///     PageRequest::new(0),
    ///     Err(PageRequestError::NotPositive { page: 0 })
    /// );
    /// ```
    pub fn new(page: u32) -> Result<Self, PageRequestError> {
        NonZeroU32::new(page)
            .map(|page| Self { page })
            .ok_or(PageRequestError::NotPositive { page: 0 })
    }

    /// Parse the raw `page` query parameter.
    ///
    /// An absent or non-numeric value selects the first page. Numeric values
    /// must address a page.
    ///
    /// # Errors
    /// Returns [`PageRequestError::NotPositive`] for zero or negative values
    /// and [`PageRequestError::OutOfRange`] for values beyond `u32::MAX`.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// assert_eq!(PageRequest::from_query(None), Ok(PageRequest::first()));
    /// assert_eq!(PageRequest::from_query(Some("abc")), Ok(PageRequest::first()));
    /// assert!(PageRequest::from_query(Some("-1")).is_err());
    /// ```
    pub fn from_query(raw: Option<&str>) -> Result<Self, PageRequestError> {
        let Some(parsed) = raw.and_then(|value| value.trim().parse::<i64>().ok()) else {
            return Ok(Self::first());
        };
        if parsed < 1 {
            return Err(PageRequestError::NotPositive { page: parsed });
        }
        u32::try_from(parsed)
            .ok()
            .and_then(NonZeroU32::new)
            .map(|page| Self { page })
            .ok_or(PageRequestError::OutOfRange { page: parsed })
    }

    /// The 1-indexed page number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.page.get()
    }

    /// Number of items preceding this page in the full result set.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.get() - 1) * u64::from(PAGE_SIZE)
    }

    /// Maximum number of items on this page.
    #[must_use]
    pub const fn limit(self) -> u32 {
        PAGE_SIZE
    }

    /// Select this page from an ordered slice.
    ///
    /// Pages past the end of `items` are empty; a final partial page holds
    /// the remaining items.
    #[must_use]
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        let Ok(start) = usize::try_from(self.offset()) else {
            return &[];
        };
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(PAGE_SIZE as usize).min(items.len());
        items.get(start..end).unwrap_or(&[])
    }
}

/// One page of an ordered result set together with the full set's size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// Items on the requested page, in result-set order.
    pub items: Vec<T>,
    /// Number of items in the full result set across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its items and the full result-set size.
    #[must_use]
    pub const fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Build a page by slicing a full, ordered result set in memory.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let all: Vec<u8> = (0..12).collect();
    /// let page = Page::from_full(&all, PageRequest::new(2).expect("page"));
    /// assert_eq!(page.items, vec![10, 11]);
    /// assert_eq!(page.total, 12);
    /// ```
    #[must_use]
    pub fn from_full(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        Self {
            items: request.slice(all).to_vec(),
            total: all.len() as u64,
        }
    }

    /// Transform every item on the page, keeping the total.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Whether the page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
