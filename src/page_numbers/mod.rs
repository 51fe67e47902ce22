//! Page link lists.
//!
//! A page list is the sequence of markers a renderer turns into navigation
//! links: concrete page numbers, gaps, and previous/next/first/last arrows.
//! Two generators are provided:
//!
//! - [`Digg`]: leading pages, pages around the current one and trailing
//!   pages, with a gap wherever two runs do not touch.
//! - [`Elastic`]: exponentially spaced pages on both sides of the current
//!   one, which keeps the list short even for millions of pages.
//!
//! Any `Fn(usize, usize) -> Vec<PageMarker>` can be used in their place.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

mod digg;
mod elastic;

pub use digg::{page_numbers, Digg};
pub use elastic::{elastic_page_numbers, elastic_range, Elastic, Factors};

/// One entry of a page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A link to this page number.
    Page(usize),
    /// A gap between two non-contiguous runs of page numbers.
    Ellipsis,
    Previous,
    Next,
    First,
    Last,
}

impl PageMarker {
    /// The page number of a [`PageMarker::Page`] marker.
    #[must_use]
    pub fn number(self) -> Option<usize> {
        match self {
            Self::Page(number) => Some(number),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_ellipsis(self) -> bool {
        self == Self::Ellipsis
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(number) => write!(f, "{number}"),
            Self::Ellipsis => f.write_str("..."),
            Self::Previous => f.write_str("previous"),
            Self::Next => f.write_str("next"),
            Self::First => f.write_str("first"),
            Self::Last => f.write_str("last"),
        }
    }
}

/// Page numbers serialize as numbers, gaps as `null` and arrows as their name.
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(number) => serializer.serialize_u64(*number as u64),
            Self::Ellipsis => serializer.serialize_none(),
            Self::Previous => serializer.serialize_str("previous"),
            Self::Next => serializer.serialize_str("next"),
            Self::First => serializer.serialize_str("first"),
            Self::Last => serializer.serialize_str("last"),
        }
    }
}

/// A page list generator.
pub trait PageNumbers {
    /// Markers to display for `current_page` out of `num_pages`.
    fn page_numbers(&self, current_page: usize, num_pages: usize) -> Vec<PageMarker>;
}

impl<F> PageNumbers for F
where
    F: Fn(usize, usize) -> Vec<PageMarker>,
{
    fn page_numbers(&self, current_page: usize, num_pages: usize) -> Vec<PageMarker> {
        self(current_page, num_pages)
    }
}

/// The built-in generators, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageListStyle {
    Digg(Digg),
    Elastic,
}

impl Default for PageListStyle {
    fn default() -> Self {
        Self::Digg(Digg::default())
    }
}

impl PageNumbers for PageListStyle {
    fn page_numbers(&self, current_page: usize, num_pages: usize) -> Vec<PageMarker> {
        match self {
            Self::Digg(digg) => digg.page_numbers(current_page, num_pages),
            Self::Elastic => Elastic.page_numbers(current_page, num_pages),
        }
    }
}

impl FromStr for PageListStyle {
    type Err = String;

    /// Parses `digg` or `elastic`; Digg lists get the default extremes and arounds.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "digg" | "default" => Ok(Self::default()),
            "elastic" => Ok(Self::Elastic),
            other => Err(format!("unknown page list style {other:?}, expected 'digg' or 'elastic'")),
        }
    }
}
