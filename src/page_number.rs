//! Reading page numbers from querystrings and building links back to pages.

use url::form_urlencoded;

/// Querystring key holding the page number unless configured otherwise.
pub const DEFAULT_PAGE_LABEL: &str = "page";

/// Helper parameter some clients send along; never copied into page links.
const QUERYSTRING_KEY_PARAM: &str = "querystring_key";

/// The page a caller asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestedPage {
    /// No usable page number was supplied.
    #[default]
    Default,
    Number(i64),
}

impl RequestedPage {
    /// Read `key` from a raw querystring (with or without the leading `?`).
    ///
    /// Repeated keys resolve to their last value. Missing or non-integer
    /// values give [`RequestedPage::Default`].
    #[must_use]
    pub fn from_query(query: &str, key: &str) -> Self {
        form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .filter(|(name, _)| name == key)
            .last()
            .and_then(|(_, value)| value.trim().parse().ok())
            .map_or(Self::Default, Self::Number)
    }

    #[must_use]
    pub fn resolve(self, default_number: i64) -> i64 {
        match self {
            Self::Default => default_number,
            Self::Number(number) => number,
        }
    }
}

/// Page number stored under `key` in `query`, or `default_number`.
#[must_use]
pub fn page_number_from_query(query: &str, key: &str, default_number: i64) -> i64 {
    RequestedPage::from_query(query, key).resolve(default_number)
}

/// Turn a possibly negative page number into a page of `1..=num_pages`.
///
/// Negative numbers count from the end, `-1` being the last page. Negative
/// numbers reaching past the first page, and zero, resolve to page 1.
/// Positive numbers are returned unchanged.
#[must_use]
pub fn normalize_page_number(number: i64, num_pages: usize) -> usize {
    if number > 0 {
        return number as usize;
    }
    let from_end = number.unsigned_abs() as usize;
    if number == 0 || from_end > num_pages {
        1
    } else {
        num_pages - from_end + 1
    }
}

/// Querystring pointing at `page_number`, keeping the other parameters of `query`.
///
/// The page key is left out for `default_number`, so the default page keeps a
/// clean URL. Returns an empty string when no parameters remain, otherwise a
/// string starting with `?`.
#[must_use]
pub fn querystring_for_page(
    query: &str,
    page_number: usize,
    key: &str,
    default_number: usize,
) -> String {
    let page = page_number.to_string();
    let mut pairs: Vec<(String, String)> = Vec::new();
    let mut placed = false;
    for (name, value) in form_urlencoded::parse(query.trim_start_matches('?').as_bytes()) {
        if name == QUERYSTRING_KEY_PARAM {
            continue;
        }
        if name == key {
            if !placed {
                pairs.push((name.into_owned(), page.clone()));
                placed = true;
            }
            continue;
        }
        pairs.push((name.into_owned(), value.into_owned()));
    }
    if !placed {
        pairs.push((key.to_string(), page));
    }
    if page_number == default_number {
        pairs.retain(|(name, _)| name != key);
    }
    if pairs.is_empty() {
        return String::new();
    }
    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(&pairs)
        .finish();
    format!("?{encoded}")
}
