use super::{PageMarker, PageNumbers};

/// Page counts up to this size are listed in full.
const ELASTIC_FULL_LIST_MAX: usize = 10;

/// Elastic page list generator, see [`elastic_page_numbers`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elastic;

impl PageNumbers for Elastic {
    fn page_numbers(&self, current_page: usize, num_pages: usize) -> Vec<PageMarker> {
        elastic_page_numbers(current_page, num_pages)
    }
}

/// Endless step sequence `f, 3f, 10f, 30f, 100f, ...`.
#[derive(Debug, Clone)]
pub struct Factors {
    base: usize,
    tripled: bool,
}

impl Factors {
    #[must_use]
    pub fn new(starting_factor: usize) -> Self {
        Self {
            base: starting_factor,
            tripled: false,
        }
    }

    fn step(&mut self) -> usize {
        if self.tripled {
            let value = self.base.saturating_mul(3);
            self.base = self.base.saturating_mul(10);
            self.tripled = false;
            value
        } else {
            self.tripled = true;
            self.base
        }
    }
}

impl Iterator for Factors {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        Some(self.step())
    }
}

/// S-curved subset of `begin..=end`.
///
/// Offsets from the [`Factors`] sequence are applied from both ends at once
/// until the two sides meet, so the result is dense near `begin` and `end`
/// and sparse in the middle. The starting factor grows with the range size
/// to keep the list short for huge ranges.
#[must_use]
pub fn elastic_range(begin: usize, end: usize) -> Vec<usize> {
    let mut factors = Factors::new((end.saturating_sub(begin) / 100).max(1));
    let mut left_half = Vec::new();
    let mut right_half = Vec::new();
    let (mut left, mut right) = (begin, end);
    while left < right {
        left_half.push(left);
        right_half.push(right);
        let factor = factors.step();
        left = begin.saturating_add(factor);
        right = end.saturating_sub(factor);
    }
    // Both sides landed on the same page.
    if left == right {
        left_half.push(left);
    }
    left_half.extend(right_half.into_iter().rev());
    left_half
}

/// Elastic page list for large page counts.
///
/// Up to ten pages are listed in full with no arrows. Beyond that, the pages
/// before and after `current_page` each get their own [`elastic_range`],
/// framed by `first`/`previous` and `next`/`last` unless `current_page` sits
/// at that end.
///
/// ```
/// use page_links::page_numbers::{elastic_page_numbers, PageMarker::*};
///
/// assert_eq!(
///     elastic_page_numbers(1, 11),
///     vec![Page(1), Page(2), Page(4), Page(8), Page(10), Page(11), Next, Last]
/// );
/// ```
#[must_use]
pub fn elastic_page_numbers(current_page: usize, num_pages: usize) -> Vec<PageMarker> {
    if num_pages <= ELASTIC_FULL_LIST_MAX {
        return (1..=num_pages).map(PageMarker::Page).collect();
    }
    let current_page = current_page.clamp(1, num_pages);
    let mut pages = Vec::new();
    if current_page == 1 {
        pages.push(PageMarker::Page(1));
    } else {
        pages.extend([PageMarker::First, PageMarker::Previous]);
        pages.extend(elastic_range(1, current_page).into_iter().map(PageMarker::Page));
    }
    if current_page != num_pages {
        pages.extend(
            elastic_range(current_page, num_pages)
                .into_iter()
                .skip(1)
                .map(PageMarker::Page),
        );
        pages.extend([PageMarker::Next, PageMarker::Last]);
    }
    pages
}
