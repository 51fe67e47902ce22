use thiserror::Error;

/// Errors raised while resolving a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The requested page token is not an integer.
    #[error("invalid page number {token:?}: that page number is not an integer")]
    InvalidPageNumber { token: String },
    /// The requested page is outside the range of existing pages.
    #[error("empty page {number}: {reason}")]
    EmptyPage { number: i64, reason: &'static str },
    /// The operation needs the total item count, which lazy pagination never computes.
    #[error("{0} is not available without counting every item")]
    NotImplemented(&'static str),
}

impl PaginationError {
    pub(crate) fn less_than_one(number: i64) -> Self {
        Self::EmptyPage {
            number,
            reason: "that page number is less than 1",
        }
    }

    pub(crate) fn no_results(number: i64) -> Self {
        Self::EmptyPage {
            number,
            reason: "that page contains no results",
        }
    }

    /// True for [`PaginationError::EmptyPage`].
    #[must_use]
    pub fn is_empty_page(&self) -> bool {
        matches!(self, Self::EmptyPage { .. })
    }
}

pub type Result<T, E = PaginationError> = std::result::Result<T, E>;

/// Parse a page token (usually a querystring value) into a page number.
///
/// Surrounding whitespace is ignored. Range checks are left to the paginator,
/// so `"0"` and `"-3"` parse fine here.
///
/// # Errors
///
/// Returns [`PaginationError::InvalidPageNumber`] if the token is not an integer.
pub fn parse_page_number(token: &str) -> Result<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| PaginationError::InvalidPageNumber {
            token: token.to_string(),
        })
}
