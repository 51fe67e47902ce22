//! Resolving the page to show for a request.
//!
//! This is the caller-level policy layered over the paginators: default page
//! numbers (including negative ones counted from the end), what to do when the
//! requested page is out of range, and which page list generator to run.

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::Result;
use crate::page_number::{normalize_page_number, RequestedPage};
use crate::page_numbers::{PageMarker, PageNumbers};
use crate::paginator::{Page, PageProvider};

/// Per-call settings that override [`Config`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginateOptions {
    /// Page shown when the request carries no page number. Negative values
    /// count from the last page. Defaults to 1.
    pub default_number: Option<i64>,
    /// Querystring key holding the page number. Defaults to the configured label.
    pub querystring_key: Option<String>,
}

/// Everything a renderer needs to display one page and its page links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<T> {
    pub page: Page<T>,
    pub markers: Vec<PageMarker>,
    pub querystring_key: String,
    pub default_number: usize,
    pub per_page: usize,
}

impl<T> PageView<T> {
    /// True when there is more than one page to link to.
    #[must_use]
    pub fn paginated(&self) -> bool {
        self.page.num_pages > 1
    }

    /// Transform the page items, keeping the page position and links.
    pub fn map<U, F>(self, f: F) -> PageView<U>
    where
        F: FnMut(T) -> U,
    {
        PageView {
            page: self.page.map(f),
            markers: self.markers,
            querystring_key: self.querystring_key,
            default_number: self.default_number,
            per_page: self.per_page,
        }
    }
}

/// Resolve `requested` against `provider` and build its page list.
///
/// An out-of-range request shows page 1 instead, unless
/// [`Config::page_out_of_range_error`] is set.
///
/// # Errors
///
/// - [`PaginationError::EmptyPage`](crate::error::PaginationError::EmptyPage)
///   when the page is out of range and the configuration asks for an error,
///   or when even page 1 does not exist.
/// - [`PaginationError::NotImplemented`](crate::error::PaginationError::NotImplemented)
///   when a negative default number is used with a lazy provider.
pub fn paginate<P, G>(
    provider: &P,
    requested: RequestedPage,
    generator: &G,
    options: &PaginateOptions,
    config: &Config,
) -> Result<PageView<P::Item>>
where
    P: PageProvider,
    G: PageNumbers + ?Sized,
{
    let mut default_number = options.default_number.unwrap_or(1);
    if default_number < 0 {
        let num_pages = provider.page_range()?.count();
        default_number = normalize_page_number(default_number, num_pages) as i64;
    }

    let number = requested.resolve(default_number);
    let page = match provider.page(number) {
        Ok(page) => page,
        Err(err) if err.is_empty_page() => {
            if config.page_out_of_range_error {
                warn!(number, "Requested page is out of range");
                return Err(err);
            }
            debug!(number, "Requested page is out of range, showing page 1");
            provider.page(1)?
        }
        Err(err) => return Err(err),
    };

    let markers = generator.page_numbers(page.number, page.num_pages);
    debug!(
        number = page.number,
        num_pages = page.num_pages,
        known_pages = ?provider.num_pages(),
        fetched = page.len(),
        markers = markers.len(),
        "Page resolved"
    );

    Ok(PageView {
        page,
        markers,
        querystring_key: options
            .querystring_key
            .clone()
            .unwrap_or_else(|| config.page_label.clone()),
        default_number: default_number.max(1) as usize,
        per_page: provider.sizes().per_page,
    })
}

/// [`paginate`] with the page number read from a raw querystring.
///
/// # Errors
///
/// See [`paginate`].
pub fn paginate_query<P, G>(
    provider: &P,
    query: &str,
    generator: &G,
    options: &PaginateOptions,
    config: &Config,
) -> Result<PageView<P::Item>>
where
    P: PageProvider,
    G: PageNumbers + ?Sized,
{
    let key = options
        .querystring_key
        .as_deref()
        .unwrap_or(&config.page_label);
    let requested = RequestedPage::from_query(query, key);
    paginate(provider, requested, generator, options, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaginationError;
    use crate::page_numbers::PageMarker::{Ellipsis, Next, Page, Previous};
    use crate::page_numbers::{Digg, Elastic};
    use crate::paginator::{DefaultPaginator, LazyPaginator};

    #[test]
    fn test_requested_page() {
        let paginator = DefaultPaginator::new(0..95_usize, 10);
        let view = paginate(
            &paginator,
            RequestedPage::Number(3),
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 3);
        assert_eq!(view.page.items, (20..30).collect::<Vec<usize>>());
        assert_eq!(view.querystring_key, "page");
        assert_eq!(view.per_page, 10);
        assert!(view.paginated());
        assert_eq!(view.markers.first(), Some(&Previous));
        assert_eq!(view.markers.last(), Some(&Next));
    }

    #[test]
    fn test_out_of_range_falls_back_to_first_page() {
        let paginator = DefaultPaginator::new(0..5_usize, 10);
        let view = paginate(
            &paginator,
            RequestedPage::Number(7),
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 1);
        assert_eq!(view.markers, vec![Page(1)]);
        assert!(!view.paginated());
    }

    #[test]
    fn test_out_of_range_error() {
        let paginator = DefaultPaginator::new(0..5_usize, 10);
        let config = Config {
            page_out_of_range_error: true,
            ..Config::default()
        };
        let err = paginate(
            &paginator,
            RequestedPage::Number(7),
            &Digg::default(),
            &PaginateOptions::default(),
            &config,
        )
        .unwrap_err();
        assert!(err.is_empty_page());
    }

    #[test]
    fn test_negative_default_number() {
        let paginator = DefaultPaginator::new(0..100_usize, 10);
        let options = PaginateOptions {
            default_number: Some(-1),
            ..PaginateOptions::default()
        };
        let view = paginate(
            &paginator,
            RequestedPage::Default,
            &Elastic,
            &options,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 10);
        assert_eq!(view.default_number, 10);

        let options = PaginateOptions {
            default_number: Some(-40),
            ..PaginateOptions::default()
        };
        let view = paginate(
            &paginator,
            RequestedPage::Default,
            &Elastic,
            &options,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 1);
    }

    #[test]
    fn test_negative_default_number_needs_page_range() {
        let paginator = LazyPaginator::new(0..100_usize, 10);
        let options = PaginateOptions {
            default_number: Some(-1),
            ..PaginateOptions::default()
        };
        let err = paginate(
            &paginator,
            RequestedPage::Default,
            &Digg::default(),
            &options,
            &Config::default(),
        )
        .unwrap_err();
        assert!(matches!(err, PaginationError::NotImplemented(_)));
    }

    #[test]
    fn test_lazy_page_list() {
        let paginator = LazyPaginator::new(0..100_usize, 10);
        let view = paginate(
            &paginator,
            RequestedPage::Number(4),
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.num_pages, 5);
        assert_eq!(
            view.markers,
            vec![Previous, Page(1), Page(2), Page(3), Page(4), Page(5), Next]
        );
    }

    #[test]
    fn test_paginate_query() {
        let paginator = DefaultPaginator::new(0..50_usize, 10);
        let options = PaginateOptions {
            querystring_key: Some("entries".to_string()),
            ..PaginateOptions::default()
        };
        let view = paginate_query(
            &paginator,
            "?page=2&entries=4",
            &Digg::default(),
            &options,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 4);
        assert_eq!(view.querystring_key, "entries");

        let view = paginate_query(
            &paginator,
            "?page=oops",
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 1);
    }

    #[test]
    fn test_lazy_huge_page_number() {
        let paginator = LazyPaginator::new(0..30_usize, 7);
        let view = paginate_query(
            &paginator,
            "?page=9223372036854775807",
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.page.number, 1);
        assert_eq!(view.page.items, (0..7).collect::<Vec<usize>>());

        let config = Config {
            page_out_of_range_error: true,
            ..Config::default()
        };
        let err = paginate_query(
            &paginator,
            "?page=9223372036854775807",
            &Digg::default(),
            &PaginateOptions::default(),
            &config,
        )
        .unwrap_err();
        assert!(err.is_empty_page());
    }

    #[test]
    fn test_view_map() {
        let paginator = DefaultPaginator::new(0..25_usize, 10);
        let view = paginate(
            &paginator,
            RequestedPage::Number(3),
            &Digg::default(),
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap()
        .map(|index| index + 1);
        assert_eq!(view.page.items, (21..=25).collect::<Vec<usize>>());
        assert_eq!(view.page.start_index, 21);
        assert_eq!(view.markers, vec![Previous, Page(1), Page(2), Page(3)]);
    }

    #[test]
    fn test_custom_generator() {
        let paginator = DefaultPaginator::new(0..50_usize, 10);
        let generator = |current: usize, num_pages: usize| -> Vec<PageMarker> {
            vec![Page(current), Ellipsis, Page(num_pages)]
        };
        let view = paginate(
            &paginator,
            RequestedPage::Number(2),
            &generator,
            &PaginateOptions::default(),
            &Config::default(),
        )
        .unwrap();
        assert_eq!(view.markers, vec![Page(2), Ellipsis, Page(5)]);
    }
}
