use std::ops::RangeInclusive;

use super::{PageMarker, PageNumbers};

/// Digg-style page list settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digg {
    /// Pages always shown at the start and at the end of the list.
    pub extremes: usize,
    /// Pages shown on each side of the current page.
    pub arounds: usize,
    /// Whether to add `first` and `last` arrows.
    pub arrows: bool,
}

impl Default for Digg {
    fn default() -> Self {
        Self {
            extremes: 3,
            arounds: 2,
            arrows: false,
        }
    }
}

impl PageNumbers for Digg {
    fn page_numbers(&self, current_page: usize, num_pages: usize) -> Vec<PageMarker> {
        page_numbers(
            current_page,
            num_pages,
            self.extremes,
            self.arounds,
            self.arrows,
        )
    }
}

/// Appends runs of page numbers, inserting a gap between runs that do not
/// touch and skipping numbers that were already emitted.
struct Runs {
    pages: Vec<PageMarker>,
    last: Option<usize>,
}

impl Runs {
    fn push(&mut self, run: RangeInclusive<usize>) {
        let (start, end) = (*run.start(), *run.end());
        if start > end {
            return;
        }
        let from = match self.last {
            None => start,
            Some(last) if start > last + 1 => {
                self.pages.push(PageMarker::Ellipsis);
                start
            }
            Some(last) => last + 1,
        };
        self.pages.extend((from..=end).map(PageMarker::Page));
        self.last = Some(self.last.map_or(end, |last| last.max(end)));
    }
}

/// Digg-style page list.
///
/// Shows the first and last `extremes` pages and `arounds` pages on each side
/// of `current_page`, separated by [`PageMarker::Ellipsis`] where the runs
/// leave a gap. `previous` (and `first` when `arrows` is set) lead the list
/// unless on page 1; `next` (and `last`) close it unless on the last page.
///
/// ```
/// use page_links::page_numbers::{page_numbers, PageMarker::*};
///
/// assert_eq!(
///     page_numbers(10, 20, 3, 2, false),
///     vec![
///         Previous, Page(1), Page(2), Page(3), Ellipsis,
///         Page(8), Page(9), Page(10), Page(11), Page(12), Ellipsis,
///         Page(18), Page(19), Page(20), Next,
///     ]
/// );
/// ```
#[must_use]
pub fn page_numbers(
    current_page: usize,
    num_pages: usize,
    extremes: usize,
    arounds: usize,
    arrows: bool,
) -> Vec<PageMarker> {
    if num_pages == 0 {
        return Vec::new();
    }
    let current_page = current_page.clamp(1, num_pages);
    let mut runs = Runs {
        pages: Vec::new(),
        last: None,
    };

    if current_page != 1 {
        if arrows {
            runs.pages.push(PageMarker::First);
        }
        runs.pages.push(PageMarker::Previous);
    }

    let extremes = extremes.min(num_pages);
    runs.push(1..=extremes);
    let around_start = current_page.saturating_sub(arounds).max(1);
    let around_end = current_page.saturating_add(arounds).min(num_pages);
    runs.push(around_start..=around_end);
    if extremes > 0 {
        runs.push(num_pages - extremes + 1..=num_pages);
    }

    let mut pages = runs.pages;
    if current_page != num_pages {
        pages.push(PageMarker::Next);
        if arrows {
            pages.push(PageMarker::Last);
        }
    }
    pages
}
