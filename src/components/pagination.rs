//! Pagination components for navigating through multi-page content.
//!
//! [`PageLinks`] renders the markers of a [`PageView`] as a navigation bar,
//! [`ShowMore`] renders a single link to the next page for incremental
//! ("show more") loading.

use maud::{html, Markup, PreEscaped, Render};

use crate::config::Config;
use crate::page_number::querystring_for_page;
use crate::page_numbers::PageMarker;
use crate::pagination::PageView;

/// Link labels. Values are inserted as-is, so they must already be HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub previous: String,
    pub next: String,
    pub first: String,
    pub last: String,
}

impl Labels {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            previous: config.previous_label.clone(),
            next: config.next_label.clone(),
            first: config.first_label.clone(),
            last: config.last_label.clone(),
        }
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Builds page URLs that keep the rest of the current querystring.
#[derive(Debug, Clone)]
struct LinkBuilder<'a> {
    path: &'a str,
    query: &'a str,
    key: &'a str,
    default_number: usize,
}

impl LinkBuilder<'_> {
    fn href(&self, number: usize) -> String {
        let querystring = querystring_for_page(self.query, number, self.key, self.default_number);
        if querystring.is_empty() && self.path.is_empty() {
            // An empty href would not navigate anywhere.
            return "?".to_string();
        }
        format!("{}{}", self.path, querystring)
    }
}

/// Navigation bar for a [`PageView`].
///
/// The current page is shown as a `span`, the other markers as links and gaps
/// as a separator. Renders nothing when there is only one page.
#[derive(Debug, Clone)]
pub struct PageLinks<'a, T> {
    view: &'a PageView<T>,
    path: &'a str,
    query: &'a str,
    labels: Labels,
    add_nofollow: bool,
}

impl<'a, T> PageLinks<'a, T> {
    /// Create page links for `view`, pointing at `path` (empty for relative links).
    #[must_use]
    pub fn new(view: &'a PageView<T>, path: &'a str) -> Self {
        Self {
            view,
            path,
            query: "",
            labels: Labels::default(),
            add_nofollow: false,
        }
    }

    /// Preserve the parameters of the current querystring in every link.
    #[must_use]
    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    /// Use the labels and nofollow setting of `config`.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.labels = Labels::from_config(config);
        self.add_nofollow = config.add_nofollow;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    fn links(&self) -> LinkBuilder<'_> {
        LinkBuilder {
            path: self.path,
            query: self.query,
            key: &self.view.querystring_key,
            default_number: self.view.default_number,
        }
    }

    fn rel(&self) -> Option<&'static str> {
        self.add_nofollow.then_some("nofollow")
    }

    fn link(&self, number: usize, class: &str, label: Markup) -> Markup {
        html! {
            a class=(class) href=(self.links().href(number)) rel=[self.rel()] { (label) }
        }
    }

    fn render_marker(&self, marker: PageMarker) -> Markup {
        let page = &self.view.page;
        match marker {
            PageMarker::Page(number) if number == page.number => html! {
                span class="current" { (number) }
            },
            PageMarker::Page(number) => self.link(number, "page", html! { (number) }),
            PageMarker::Ellipsis => html! { span class="separator" { "..." } },
            PageMarker::Previous => page.previous_page_number().map_or_else(
                || html! {},
                |number| self.link(number, "previous", PreEscaped(self.labels.previous.clone())),
            ),
            PageMarker::Next => page.next_page_number().map_or_else(
                || html! {},
                |number| self.link(number, "next", PreEscaped(self.labels.next.clone())),
            ),
            PageMarker::First => self.link(1, "first", PreEscaped(self.labels.first.clone())),
            PageMarker::Last => self.link(
                page.num_pages,
                "last",
                PreEscaped(self.labels.last.clone()),
            ),
        }
    }
}

impl<T> Render for PageLinks<'_, T> {
    fn render(&self) -> Markup {
        if !self.view.paginated() {
            return html! {};
        }
        html! {
            nav class="pagination" {
                @for marker in &self.view.markers {
                    (self.render_marker(*marker))
                }
            }
        }
    }
}

/// Link to the next page for incremental loading.
///
/// Renders nothing on the last page.
#[derive(Debug, Clone)]
pub struct ShowMore<'a, T> {
    view: &'a PageView<T>,
    path: &'a str,
    query: &'a str,
    label: String,
    loading: String,
}

impl<'a, T> ShowMore<'a, T> {
    #[must_use]
    pub fn new(view: &'a PageView<T>, path: &'a str) -> Self {
        Self {
            view,
            path,
            query: "",
            label: "more".to_string(),
            loading: Config::default().loading,
        }
    }

    #[must_use]
    pub fn with_query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Use the loading indicator of `config`.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        self.loading.clone_from(&config.loading);
        self
    }
}

impl<T> Render for ShowMore<'_, T> {
    fn render(&self) -> Markup {
        let Some(next) = self.view.page.next_page_number() else {
            return html! {};
        };
        let links = LinkBuilder {
            path: self.path,
            query: self.query,
            key: &self.view.querystring_key,
            default_number: self.view.default_number,
        };
        html! {
            div class="endless-container" {
                a class="endless-more" href=(links.href(next)) rel="page" { (self.label) }
                div class="endless-loading" style="display: none;" { (PreEscaped(&self.loading)) }
            }
        }
    }
}
