//! Page slicing over an ordered item collection.
//!
//! Two providers share the same arithmetic ([`PageSizes`]) and differ only in
//! whether the total number of pages is known:
//!
//! - [`DefaultPaginator`] counts its source up front and validates page
//!   numbers against the real page range.
//! - [`LazyPaginator`] never counts. It fetches one item past the current page
//!   to find out whether a next page exists.

use std::ops::{Range, RangeInclusive};

use serde::Serialize;

use crate::error::{parse_page_number, Result};

mod default;
mod lazy;
mod source;

pub use default::DefaultPaginator;
pub use lazy::LazyPaginator;
pub use source::{CountedSource, ItemSource};

/// Page size parameters shared by both paginators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSizes {
    /// Items on every page after the first.
    pub per_page: usize,
    /// Items on page 1.
    pub first_page: usize,
    /// A trailing remainder of at most this many items is folded into the previous page.
    pub orphans: usize,
}

impl PageSizes {
    #[must_use]
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            first_page: per_page,
            orphans: 0,
        }
    }

    #[must_use]
    pub fn with_first_page(mut self, first_page: usize) -> Self {
        self.first_page = first_page;
        self
    }

    #[must_use]
    pub fn with_orphans(mut self, orphans: usize) -> Self {
        self.orphans = orphans;
        self
    }

    /// Nominal number of items on page `number`.
    #[must_use]
    pub fn per_page_for(&self, number: usize) -> usize {
        if number == 1 {
            self.first_page
        } else {
            self.per_page
        }
    }

    /// 0-based offset of the first item of page `number`, or `None` if it
    /// does not fit in a `usize`.
    #[must_use]
    pub fn bottom(&self, number: usize) -> Option<usize> {
        if number <= 1 {
            Some(0)
        } else {
            (number - 2)
                .checked_mul(self.per_page)?
                .checked_add(self.first_page)
        }
    }

    /// Half-open item range of page `number` before orphan folding.
    #[must_use]
    pub fn span(&self, number: usize) -> Option<Range<usize>> {
        let bottom = self.bottom(number)?;
        let top = bottom.checked_add(self.per_page_for(number))?;
        Some(bottom..top)
    }

    /// Number of pages needed for `total_items`.
    ///
    /// An empty collection has one (empty) page when `allow_empty_first_page`
    /// is set and no pages otherwise. A zero `per_page` yields zero pages.
    #[must_use]
    pub fn pages_count(&self, total_items: usize, allow_empty_first_page: bool) -> usize {
        if total_items == 0 && !allow_empty_first_page {
            return 0;
        }
        if self.per_page == 0 {
            return 0;
        }
        let hits = total_items.saturating_sub(self.orphans.saturating_add(self.first_page));
        hits.div_ceil(self.per_page).saturating_add(1)
    }
}

/// Number of pages for `total_items`, with no page for an empty collection.
#[must_use]
pub fn pages_count(total_items: usize, per_page: usize, first_page: usize, orphans: usize) -> usize {
    PageSizes::new(per_page)
        .with_first_page(first_page)
        .with_orphans(orphans)
        .pages_count(total_items, false)
}

/// One page of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    /// 1-based page number.
    pub number: usize,
    pub items: Vec<T>,
    /// Total pages, or for lazy pagination the pages known to exist so far.
    pub num_pages: usize,
    /// 1-based position of the first item on this page, 0 when the page is empty.
    pub start_index: usize,
    /// 1-based position of the last item on this page, 0 when the page is empty.
    pub end_index: usize,
}

impl<T> Page<T> {
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub fn has_other_pages(&self) -> bool {
        self.has_previous() || self.has_next()
    }

    #[must_use]
    pub fn next_page_number(&self) -> Option<usize> {
        self.has_next().then_some(self.number + 1)
    }

    #[must_use]
    pub fn previous_page_number(&self) -> Option<usize> {
        self.has_previous().then_some(self.number - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Transform the items, keeping the page position.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            number: self.number,
            items: self.items.into_iter().map(f).collect(),
            num_pages: self.num_pages,
            start_index: self.start_index,
            end_index: self.end_index,
        }
    }
}

/// Something that can slice an item collection into numbered pages.
pub trait PageProvider {
    type Item;

    fn sizes(&self) -> PageSizes;

    /// Check that `number` may be requested, returning it as a page number.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::EmptyPage`](crate::error::PaginationError::EmptyPage)
    /// for numbers outside the valid range.
    fn validate_number(&self, number: i64) -> Result<usize>;

    /// Return page `number`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::EmptyPage`](crate::error::PaginationError::EmptyPage)
    /// if the page does not exist.
    fn page(&self, number: i64) -> Result<Page<Self::Item>>;

    /// Parse `token` and return that page.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidPageNumber`](crate::error::PaginationError::InvalidPageNumber)
    /// for non-integer tokens, otherwise the errors of [`PageProvider::page`].
    fn page_for_token(&self, token: &str) -> Result<Page<Self::Item>> {
        self.page(parse_page_number(token)?)
    }

    /// Total number of items.
    ///
    /// # Errors
    ///
    /// Lazy providers return [`PaginationError::NotImplemented`](crate::error::PaginationError::NotImplemented).
    fn count(&self) -> Result<usize>;

    /// Total number of pages, if known.
    fn num_pages(&self) -> Option<usize>;

    /// Every valid page number.
    ///
    /// # Errors
    ///
    /// Lazy providers return [`PaginationError::NotImplemented`](crate::error::PaginationError::NotImplemented).
    fn page_range(&self) -> Result<RangeInclusive<usize>>;
}
