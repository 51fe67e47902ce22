use thiserror::Error;

use crate::page_number::DEFAULT_PAGE_LABEL;
use crate::page_numbers::{Digg, PageListStyle};
use crate::paginator::PageSizes;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {message}")]
    InvalidValue { name: String, message: String },
    #[error("failed to parse {name} as integer: {source}")]
    ParseInt {
        name: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("failed to parse {name} as boolean: {value}")]
    ParseBool { name: String, value: String },
}

/// Pagination settings loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // Slicing
    pub per_page: usize,
    pub orphans: usize,

    // Page links
    pub page_label: String,
    pub page_list_style: PageListStyle,
    pub add_nofollow: bool,

    // Labels, already HTML-escaped
    pub previous_label: String,
    pub next_label: String,
    pub first_label: String,
    pub last_label: String,
    pub loading: String,

    // Out of range policy
    pub page_out_of_range_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            per_page: 10,
            orphans: 0,
            page_label: DEFAULT_PAGE_LABEL.to_string(),
            page_list_style: PageListStyle::default(),
            add_nofollow: false,
            previous_label: "&lt;".to_string(),
            next_label: "&gt;".to_string(),
            first_label: "&lt;&lt;".to_string(),
            last_label: "&gt;&gt;".to_string(),
            loading: "loading".to_string(),
            page_out_of_range_error: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset or empty variables keep the
    /// [`Config::default`] value.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let digg = Digg::default();

        let page_list_style = match optional_env("PAGINATION_PAGE_LIST_STYLE")
            .as_deref()
            .map(str::parse::<PageListStyle>)
            .transpose()
            .map_err(|message| ConfigError::InvalidValue {
                name: "PAGINATION_PAGE_LIST_STYLE".to_string(),
                message,
            })? {
            Some(PageListStyle::Elastic) => PageListStyle::Elastic,
            _ => PageListStyle::Digg(Digg {
                extremes: parse_env_usize("PAGINATION_DEFAULT_EXTREMES", digg.extremes)?,
                arounds: parse_env_usize("PAGINATION_DEFAULT_AROUNDS", digg.arounds)?,
                arrows: parse_env_bool("PAGINATION_DEFAULT_ARROWS", digg.arrows)?,
            }),
        };

        Ok(Self {
            // Slicing
            per_page: parse_env_usize("PAGINATION_PER_PAGE", defaults.per_page)?,
            orphans: parse_env_usize("PAGINATION_ORPHANS", defaults.orphans)?,

            // Page links
            page_label: env_or_default("PAGINATION_PAGE_LABEL", &defaults.page_label),
            page_list_style,
            add_nofollow: parse_env_bool("PAGINATION_ADD_NOFOLLOW", defaults.add_nofollow)?,

            // Labels
            previous_label: env_or_default("PAGINATION_PREVIOUS_LABEL", &defaults.previous_label),
            next_label: env_or_default("PAGINATION_NEXT_LABEL", &defaults.next_label),
            first_label: env_or_default("PAGINATION_FIRST_LABEL", &defaults.first_label),
            last_label: env_or_default("PAGINATION_LAST_LABEL", &defaults.last_label),
            loading: env_or_default("PAGINATION_LOADING", &defaults.loading),

            // Out of range policy
            page_out_of_range_error: parse_env_bool(
                "PAGINATION_PAGE_OUT_OF_RANGE_ERROR",
                defaults.page_out_of_range_error,
            )?,
        })
    }

    /// Validate that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.per_page == 0 {
            return Err(ConfigError::InvalidValue {
                name: "PAGINATION_PER_PAGE".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if self.orphans >= self.per_page {
            return Err(ConfigError::InvalidValue {
                name: "PAGINATION_ORPHANS".to_string(),
                message: "must be smaller than PAGINATION_PER_PAGE".to_string(),
            });
        }
        if self.page_label.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "PAGINATION_PAGE_LABEL".to_string(),
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Page sizes for `per_page` items per page, the configured orphans, and
    /// `first_page` items on page 1 (defaulting to `per_page`).
    #[must_use]
    pub fn page_sizes(&self, per_page: Option<usize>, first_page: Option<usize>) -> PageSizes {
        let per_page = per_page.unwrap_or(self.per_page);
        PageSizes::new(per_page)
            .with_first_page(first_page.unwrap_or(per_page))
            .with_orphans(self.orphans)
    }
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_env_usize(name: &str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => val.parse().map_err(|e| ConfigError::ParseInt {
            name: name.to_string(),
            source: e,
        }),
        _ => Ok(default),
    }
}

fn parse_env_bool(name: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(name) {
        Ok(val) if !val.is_empty() => match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::ParseBool {
                name: name.to_string(),
                value: val,
            }),
        },
        _ => Ok(default),
    }
}
