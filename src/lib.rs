//! Page links library.
//!
//! Splits item collections into numbered pages and builds the list of page
//! links shown to users: Digg-style lists with gaps, elastic lists for very
//! large page counts, or any custom generator.
//!
//! - [`paginator`]: eager ([`DefaultPaginator`]) and lazy ([`LazyPaginator`])
//!   page slicing over an [`ItemSource`](paginator::ItemSource)
//! - [`page_numbers`]: page list generators
//! - [`page_number`]: page numbers in querystrings
//! - [`pagination`]: resolving the page to show for a request
//! - [`components`]: maud rendering of page links

// Allow raw string hashes in HTML assertions
#![allow(clippy::needless_raw_string_hashes)]

pub mod components;
pub mod config;
pub mod error;
pub mod page_number;
pub mod page_numbers;
pub mod pagination;
pub mod paginator;

pub use error::{PaginationError, Result};
pub use page_numbers::{PageListStyle, PageMarker, PageNumbers};
pub use pagination::{paginate, paginate_query, PageView, PaginateOptions};
pub use paginator::{pages_count, DefaultPaginator, LazyPaginator, Page, PageProvider, PageSizes};
