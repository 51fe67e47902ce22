use std::cell::Cell;
use std::ops::RangeInclusive;

use super::{ItemSource, Page, PageProvider, PageSizes};
use crate::error::{PaginationError, Result};

/// Paginator that never counts its source.
///
/// Each page request fetches `per_page + orphans + 1` items. The extra item is
/// only a probe: if it shows up, a next page exists. The number of pages is
/// therefore only known up to the highest page discovered so far.
#[derive(Debug)]
pub struct LazyPaginator<S> {
    source: S,
    sizes: PageSizes,
    allow_empty_first_page: bool,
    num_pages: Cell<Option<usize>>,
}

impl<S: ItemSource> LazyPaginator<S> {
    #[must_use]
    pub fn new(source: S, per_page: usize) -> Self {
        Self::with_sizes(source, PageSizes::new(per_page))
    }

    #[must_use]
    pub fn with_sizes(source: S, sizes: PageSizes) -> Self {
        Self {
            source,
            sizes,
            allow_empty_first_page: true,
            num_pages: Cell::new(None),
        }
    }

    #[must_use]
    pub fn first_page(mut self, first_page: usize) -> Self {
        self.sizes.first_page = first_page;
        self
    }

    #[must_use]
    pub fn orphans(mut self, orphans: usize) -> Self {
        self.sizes.orphans = orphans;
        self
    }

    /// Whether page 1 of an empty source is a valid (empty) page. Defaults to true.
    #[must_use]
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    fn record_pages(&self, discovered: usize) {
        let known = self.num_pages.get().map_or(discovered, |n| n.max(discovered));
        self.num_pages.set(Some(known));
    }
}

impl<S: ItemSource> PageProvider for LazyPaginator<S> {
    type Item = S::Item;

    fn sizes(&self) -> PageSizes {
        self.sizes
    }

    fn validate_number(&self, number: i64) -> Result<usize> {
        if number < 1 {
            return Err(PaginationError::less_than_one(number));
        }
        Ok(number as usize)
    }

    fn page(&self, number: i64) -> Result<Page<S::Item>> {
        let number = self.validate_number(number)?;
        let current_per_page = self.sizes.per_page_for(number);
        let orphans = self.sizes.orphans;
        // A page starting beyond usize::MAX lies past the end of any source.
        let window = self
            .sizes
            .span(number)
            .and_then(|span| Some(span.start..span.end.checked_add(orphans)?.checked_add(1)?))
            .ok_or_else(|| PaginationError::no_results(number as i64))?;
        let bottom = window.start;

        let mut items = self.source.fetch(window);
        let num_pages = if items.len() > current_per_page + orphans {
            items.truncate(current_per_page);
            number + 1
        } else if number != 1 && items.len() <= orphans {
            return Err(PaginationError::no_results(number as i64));
        } else if items.is_empty() && !self.allow_empty_first_page {
            return Err(PaginationError::no_results(1));
        } else {
            number
        };
        self.record_pages(num_pages);

        let (start_index, end_index) = if items.is_empty() {
            (0, 0)
        } else {
            (bottom + 1, bottom + items.len())
        };

        Ok(Page {
            number,
            items,
            num_pages,
            start_index,
            end_index,
        })
    }

    fn count(&self) -> Result<usize> {
        Err(PaginationError::NotImplemented("item count"))
    }

    fn num_pages(&self) -> Option<usize> {
        self.num_pages.get()
    }

    fn page_range(&self) -> Result<RangeInclusive<usize>> {
        Err(PaginationError::NotImplemented("page range"))
    }
}
