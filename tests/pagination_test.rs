//! Integration tests for slicing, page resolution and rendering.

use maud::Render;
use page_links::components::{PageLinks, ShowMore};
use page_links::config::Config;
use page_links::page_number::RequestedPage;
use page_links::page_numbers::{Digg, PageListStyle, PageMarker};
use page_links::pagination::{paginate, paginate_query, PaginateOptions};
use page_links::paginator::{pages_count, DefaultPaginator, LazyPaginator, PageProvider};
use page_links::PaginationError;
use proptest::prelude::*;

prop_compose! {
    fn arb_sizes()(per_page in 1_usize..12)(
        per_page in Just(per_page),
        first_page in 1_usize..12,
        orphans in 0..per_page,
    ) -> (usize, usize, usize) {
        (per_page, first_page, orphans)
    }
}

proptest! {
    #[test]
    fn test_eager_pages_reassemble_collection(
        total in 0_usize..200,
        (per_page, first_page, orphans) in arb_sizes(),
    ) {
        let paginator = DefaultPaginator::new(0..total, per_page)
            .first_page(first_page)
            .orphans(orphans);
        let num_pages = paginator.num_pages().unwrap_or(0);

        let mut items = Vec::new();
        for number in 1..=num_pages {
            let page = paginator.page(number as i64).unwrap();
            prop_assert_eq!(page.num_pages, num_pages);
            items.extend(page.items);
        }
        prop_assert_eq!(items, (0..total).collect::<Vec<_>>());
        prop_assert!(paginator.page(num_pages as i64 + 1).unwrap_err().is_empty_page());
    }

    #[test]
    fn test_lazy_pages_match_eager(
        total in 0_usize..200,
        (per_page, first_page, orphans) in arb_sizes(),
    ) {
        let eager = DefaultPaginator::new(0..total, per_page)
            .first_page(first_page)
            .orphans(orphans);
        let lazy = LazyPaginator::new(0..total, per_page)
            .first_page(first_page)
            .orphans(orphans);

        let mut number = 1;
        loop {
            let lazy_page = lazy.page(number).unwrap();
            let eager_page = eager.page(number).unwrap();
            prop_assert_eq!(&lazy_page.items, &eager_page.items, "page {}", number);
            if !lazy_page.has_next() {
                break;
            }
            number += 1;
        }
        prop_assert_eq!(Some(number as usize), eager.num_pages());
        prop_assert_eq!(lazy.num_pages(), eager.num_pages());
    }

    #[test]
    fn test_pages_count_is_monotonic(
        total in 0_usize..10_000,
        (per_page, first_page, orphans) in arb_sizes(),
    ) {
        prop_assert!(
            pages_count(total, per_page, first_page, orphans)
                <= pages_count(total + 1, per_page, first_page, orphans)
        );
    }
}

#[test]
fn test_slice_of_records() {
    let titles: Vec<String> = (1..=23).map(|n| format!("entry {n}")).collect();
    let paginator = DefaultPaginator::new(&titles, 10).orphans(3);

    assert_eq!(paginator.num_pages(), Some(2));
    let last = paginator.page(2).unwrap();
    assert_eq!(last.len(), 13);
    assert_eq!(last.start_index, 11);
    assert_eq!(last.end_index, 23);
    assert_eq!(last.items.first().map(|s| s.as_str()), Some("entry 11"));
}

#[test]
fn test_page_tokens() {
    let paginator = DefaultPaginator::new(0..30_usize, 10);
    assert_eq!(paginator.page_for_token(" 2 ").unwrap().number, 2);
    assert!(matches!(
        paginator.page_for_token("two"),
        Err(PaginationError::InvalidPageNumber { .. })
    ));
    assert!(paginator.page_for_token("0").unwrap_err().is_empty_page());

    let lazy = LazyPaginator::new(0..30_usize, 10);
    assert!(matches!(
        lazy.page_for_token("1.5"),
        Err(PaginationError::InvalidPageNumber { .. })
    ));
    assert!(matches!(lazy.count(), Err(PaginationError::NotImplemented(_))));
}

#[test]
fn test_request_to_html() {
    let config = Config {
        per_page: 5,
        page_list_style: PageListStyle::Digg(Digg {
            extremes: 1,
            arounds: 1,
            arrows: false,
        }),
        ..Config::default()
    };
    let paginator = DefaultPaginator::with_sizes(0..100_usize, config.page_sizes(None, None));
    let view = paginate_query(
        &paginator,
        "?sort=new&page=10",
        &config.page_list_style,
        &PaginateOptions::default(),
        &config,
    )
    .unwrap();

    assert_eq!(view.page.items, (45..50).collect::<Vec<usize>>());
    assert_eq!(
        view.markers,
        vec![
            PageMarker::Previous,
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(9),
            PageMarker::Page(10),
            PageMarker::Page(11),
            PageMarker::Ellipsis,
            PageMarker::Page(20),
            PageMarker::Next,
        ]
    );

    let html = PageLinks::new(&view, "/archives")
        .with_query("sort=new&page=10")
        .with_config(&config)
        .render()
        .into_string();
    assert!(html.starts_with(r#"<nav class="pagination">"#));
    assert!(html.contains(r#"class="previous" href="/archives?sort=new&amp;page=9""#));
    assert!(html.contains(r#"class="page" href="/archives?sort=new">1</a>"#));
    assert!(html.contains(r#"<span class="current">10</span>"#));
    assert!(html.contains(r#"class="page" href="/archives?sort=new&amp;page=20">20</a>"#));

    let more = ShowMore::new(&view, "/archives")
        .with_query("sort=new&page=10")
        .render()
        .into_string();
    assert!(more.contains(r#"href="/archives?sort=new&amp;page=11""#));
}

#[test]
fn test_view_json() {
    let paginator = DefaultPaginator::new(0..25_usize, 10);
    let view = paginate(
        &paginator,
        RequestedPage::Number(3),
        &Digg::default(),
        &PaginateOptions::default(),
        &Config::default(),
    )
    .unwrap();

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["page"]["number"], 3);
    assert_eq!(json["page"]["items"], serde_json::json!([20, 21, 22, 23, 24]));
    assert_eq!(json["page"]["start_index"], 21);
    assert_eq!(json["page"]["end_index"], 25);
    assert_eq!(json["markers"], serde_json::json!(["previous", 1, 2, 3]));
    assert_eq!(json["querystring_key"], "page");
}
