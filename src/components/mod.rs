//! Maud HTML components for page navigation.
//!
//! - `pagination`: page link bars and "show more" links built from a
//!   [`PageView`](crate::pagination::PageView)
//!
//! # Example
//!
//! ```
//! use maud::Render;
//! use page_links::components::PageLinks;
//! use page_links::config::Config;
//! use page_links::page_number::RequestedPage;
//! use page_links::pagination::{paginate, PaginateOptions};
//! use page_links::paginator::DefaultPaginator;
//!
//! let config = Config::default();
//! let paginator = DefaultPaginator::new(0..100_usize, config.per_page);
//! let view = paginate(
//!     &paginator,
//!     RequestedPage::Number(2),
//!     &config.page_list_style,
//!     &PaginateOptions::default(),
//!     &config,
//! )
//! .unwrap();
//!
//! let html = PageLinks::new(&view, "/archives")
//!     .with_config(&config)
//!     .render()
//!     .into_string();
//! assert!(html.contains(r#"<span class="current">2</span>"#));
//! ```

pub mod pagination;

pub use pagination::{Labels, PageLinks, ShowMore};

/// Re-export maud for convenience
pub use maud::{html, Markup, PreEscaped};
