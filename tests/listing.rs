use partnerdesk::listing::view::{ListView, LoadPhase};
use partnerdesk::listing::{
    FACET_ALL, Filterable, ListFilter, Paginated, Pagination, apply_filters, paginate, total_pages,
};

#[derive(Debug, Clone, PartialEq)]
struct Record {
    name: &'static str,
    city: &'static str,
    status: &'static str,
}

impl Filterable for Record {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name, self.city]
    }

    fn facet(&self, key: &str) -> Option<&str> {
        match key {
            "status" => Some(self.status),
            "city" => Some(self.city),
            _ => None,
        }
    }
}

fn records() -> Vec<Record> {
    vec![
        Record {
            name: "Rajesh Kumar",
            city: "Mumbai",
            status: "active",
        },
        Record {
            name: "Anita Desai",
            city: "Pune",
            status: "active",
        },
        Record {
            name: "Suraj Nair",
            city: "Kochi",
            status: "pending",
        },
        Record {
            name: "Meera Iyer",
            city: "Chennai",
            status: "active",
        },
        Record {
            name: "Rajiv Menon",
            city: "Mumbai",
            status: "inactive",
        },
        Record {
            name: "Farhan Ali",
            city: "Delhi",
            status: "pending",
        },
        Record {
            name: "Kavita Rao",
            city: "Mumbai",
            status: "active",
        },
    ]
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let source = records();
    let filter = ListFilter::new().search("RAJ");
    let hits = apply_filters(&source, &filter);
    let names: Vec<&str> = hits.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Suraj Nair", "Rajiv Menon"]);
}

#[test]
fn test_search_scans_every_field() {
    let source = records();
    let filter = ListFilter::new().search("kochi");
    let hits = apply_filters(&source, &filter);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Suraj Nair");
}

#[test]
fn test_blank_search_and_all_facet_are_no_constraints() {
    let source = records();

    let blank = ListFilter::new().search("   ");
    assert!(blank.is_empty());
    assert_eq!(apply_filters(&source, &blank).len(), source.len());

    let all = ListFilter::new().facet("status", FACET_ALL);
    assert!(all.is_empty());
    assert_eq!(apply_filters(&source, &all).len(), source.len());

    let cleared = ListFilter::new()
        .facet("status", "active")
        .facet("status", "");
    assert!(cleared.is_empty());
}

#[test]
fn test_facets_compare_exactly_and_combine_with_search() {
    let source = records();

    let active = ListFilter::new().facet("status", "active");
    assert_eq!(apply_filters(&source, &active).len(), 4);

    // Facet values do not fold case the way search does.
    let cased = ListFilter::new().facet("status", "Active");
    assert_eq!(apply_filters(&source, &cased).len(), 0);

    let combined = ListFilter::new().search("raj").facet("city", "Mumbai");
    let hits = apply_filters(&source, &combined);
    let names: Vec<&str> = hits.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Rajiv Menon"]);
}

#[test]
fn test_filtering_preserves_source_order() {
    let source = records();
    let filter = ListFilter::new().facet("city", "Mumbai");
    let hits = apply_filters(&source, &filter);
    let names: Vec<&str> = hits.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["Rajesh Kumar", "Rajiv Menon", "Kavita Rao"]);
}

#[test]
fn test_paginate_splits_rows_into_short_final_page() {
    let source = records();
    let filtered = apply_filters(&source, &ListFilter::new());

    let (total, first) = paginate(&filtered, Pagination::new(1, 5));
    assert_eq!(total, 7);
    assert_eq!(first.len(), 5);
    assert_eq!(first[0].name, "Rajesh Kumar");

    let (_, second) = paginate(&filtered, Pagination::new(2, 5));
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].name, "Farhan Ali");
}

#[test]
fn test_pages_concatenate_to_the_filtered_set() {
    let source = records();
    let filter = ListFilter::new().facet("status", "active");
    let filtered = apply_filters(&source, &filter);

    let mut walked = Vec::new();
    for page in 1..=total_pages(filtered.len(), 3) {
        let (_, rows) = paginate(&filtered, Pagination::new(page, 3));
        walked.extend(rows.into_iter().cloned());
    }

    let expected: Vec<Record> = filtered.into_iter().cloned().collect();
    assert_eq!(walked, expected);
}

#[test]
fn test_out_of_range_page_is_empty_not_an_error() {
    let source = records();
    let filtered = apply_filters(&source, &ListFilter::new());
    let (total, rows) = paginate(&filtered, Pagination::new(99, 5));
    assert_eq!(total, 7);
    assert!(rows.is_empty());
}

#[test]
fn test_pagination_clamps_page_and_size_to_one() {
    let p = Pagination::new(0, 0);
    assert_eq!(p.page, 1);
    assert_eq!(p.per_page, 1);
}

#[test]
fn test_total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(7, 5), 2);
}

#[test]
fn test_page_window_elides_ranges_far_from_current() {
    let paginated: Paginated<()> = Paginated::new(vec![], 10, 20);
    assert_eq!(
        paginated.pages,
        vec![
            Some(1),
            Some(2),
            None,
            Some(8),
            Some(9),
            Some(10),
            Some(11),
            Some(12),
            Some(13),
            Some(14),
            None,
            Some(19),
            Some(20),
        ]
    );
}

#[test]
fn test_page_window_lists_small_sets_in_full() {
    let paginated: Paginated<()> = Paginated::new(vec![], 1, 3);
    assert_eq!(paginated.pages, vec![Some(1), Some(2), Some(3)]);

    let empty: Paginated<()> = Paginated::new(vec![], 1, 0);
    assert!(empty.pages.is_empty());
}

#[test]
fn test_view_pages_through_its_source() {
    let mut view = ListView::with_page_size(records(), 3);
    assert_eq!(view.total(), 7);
    assert_eq!(view.visible().len(), 3);

    let ticket = view.request_page(3);
    assert!(view.is_loading());
    assert!(view.complete(ticket));
    assert_eq!(view.page(), 3);
    assert_eq!(view.phase(), LoadPhase::Idle);
    assert_eq!(view.visible().len(), 1);
}

#[test]
fn test_filter_change_returns_to_first_page() {
    let mut view = ListView::with_page_size(records(), 2);
    let ticket = view.request_page(3);
    assert!(view.complete(ticket));
    assert_eq!(view.page(), 3);

    view.set_facet("status", "active");
    assert_eq!(view.page(), 1);
    assert_eq!(view.total(), 4);

    // set_search keeps the facet, so only the active "raj" match remains.
    let ticket = view.request_page(2);
    assert!(view.complete(ticket));
    view.set_search("raj");
    assert_eq!(view.page(), 1);
    assert_eq!(view.total(), 1);
}

#[test]
fn test_stale_ticket_is_discarded() {
    let mut view = ListView::with_page_size(records(), 2);

    let first = view.request_page(2);
    let second = view.request_page(3);

    assert!(!view.complete(first));
    assert_eq!(view.page(), 1);
    assert!(view.is_loading());

    assert!(view.complete(second));
    assert_eq!(view.page(), 3);
    assert!(!view.is_loading());
}

#[test]
fn test_filter_change_supersedes_pending_page() {
    let mut view = ListView::with_page_size(records(), 2);

    let ticket = view.request_page(4);
    view.set_search("raj");

    assert!(!view.complete(ticket));
    assert_eq!(view.page(), 1);
    assert!(!view.is_loading());
}

#[test]
fn test_page_size_change_commits_back_to_first_page() {
    let mut view = ListView::with_page_size(records(), 2);
    let ticket = view.request_page(3);
    assert!(view.complete(ticket));

    let ticket = view.request_page_size(5);
    assert!(view.is_loading());
    assert!(view.complete(ticket));

    assert_eq!(view.page(), 1);
    assert_eq!(view.per_page(), 5);
    assert_eq!(view.visible().len(), 5);
}
