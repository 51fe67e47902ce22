use std::ops::{Range, RangeInclusive};

use super::{CountedSource, ItemSource, Page, PageProvider, PageSizes};
use crate::error::{PaginationError, Result};

/// Paginator over a collection whose length is known.
#[derive(Debug, Clone)]
pub struct DefaultPaginator<S> {
    source: S,
    sizes: PageSizes,
    allow_empty_first_page: bool,
    count: usize,
}

impl<S: CountedSource> DefaultPaginator<S> {
    /// Create a paginator with `per_page` items on every page and no orphans.
    #[must_use]
    pub fn new(source: S, per_page: usize) -> Self {
        Self::with_sizes(source, PageSizes::new(per_page))
    }

    #[must_use]
    pub fn with_sizes(source: S, sizes: PageSizes) -> Self {
        let count = source.count();
        Self {
            source,
            sizes,
            allow_empty_first_page: true,
            count,
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

    /// Whether an empty collection still has an (empty) page 1. Defaults to true.
    #[must_use]
    pub fn allow_empty_first_page(mut self, allow: bool) -> Self {
        self.allow_empty_first_page = allow;
        self
    }

    fn total_pages(&self) -> usize {
        self.sizes.pages_count(self.count, self.allow_empty_first_page)
    }
}

impl<S: CountedSource> PageProvider for DefaultPaginator<S> {
    type Item = S::Item;

    fn sizes(&self) -> PageSizes {
        self.sizes
    }

    fn validate_number(&self, number: i64) -> Result<usize> {
        if number < 1 {
            return Err(PaginationError::less_than_one(number));
        }
        let num_pages = self.total_pages();
        if number as usize > num_pages && !(number == 1 && self.allow_empty_first_page) {
            return Err(PaginationError::no_results(number));
        }
        Ok(number as usize)
    }

    fn page(&self, number: i64) -> Result<Page<S::Item>> {
        let number = self.validate_number(number)?;
        let num_pages = self.total_pages();
        let Range { start: bottom, end } = self
            .sizes
            .span(number)
            .ok_or_else(|| PaginationError::no_results(number as i64))?;
        let top = if end.saturating_add(self.sizes.orphans) >= self.count {
            self.count
        } else {
            end
        };
        let items = self.source.fetch(bottom..top);

        let (start_index, end_index) = if self.count == 0 {
            (0, 0)
        } else {
            (bottom + 1, top)
        };

        Ok(Page {
            number,
            items,
            num_pages: num_pages.max(1),
            start_index,
            end_index,
        })
    }

    fn count(&self) -> Result<usize> {
        Ok(self.count)
    }

    fn num_pages(&self) -> Option<usize> {
        Some(self.total_pages())
    }

    fn page_range(&self) -> Result<RangeInclusive<usize>> {
        Ok(1..=self.total_pages())
    }
}
