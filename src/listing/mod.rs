//! Shared list machinery behind every table screen.
//!
//! Each dashboard screen renders the same shape of data: a filtered,
//! paginated slice of an in-memory collection. This module holds that logic
//! once instead of once per screen: [`ListFilter`] captures what the user
//! typed and selected, [`Pagination`] which slice they are looking at, and
//! [`Paginated`] the window of page controls the templates render.

use std::collections::BTreeMap;

use serde::Serialize;

pub mod view;

/// Rows shown per page unless a screen overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Facet value meaning "no constraint"; equivalent to leaving the facet unset.
pub const FACET_ALL: &str = "all";

/// Access to the fields a record exposes to the list machinery.
pub trait Filterable {
    /// Text fields scanned by the free-text search.
    fn search_fields(&self) -> Vec<&str>;

    /// Current value of a categorical facet, if the record carries it.
    fn facet(&self, key: &str) -> Option<&str>;
}

/// Search term plus categorical constraints applied to a record collection.
///
/// The search term matches case-insensitively as a substring of any of the
/// record's [`Filterable::search_fields`]; facet constraints compare exactly
/// and case-sensitively against [`Filterable::facet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    search: Option<String>,
    facets: BTreeMap<String, String>,
}

impl ListFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term. Whitespace-only input clears it.
    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_string();
        self.search = if term.is_empty() { None } else { Some(term) };
        self
    }

    /// Constrains a categorical facet. An empty value or the [`FACET_ALL`]
    /// sentinel removes the constraint instead of setting one.
    #[must_use]
    pub fn facet(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if value.is_empty() || value == FACET_ALL {
            self.facets.remove(&key);
        } else {
            self.facets.insert(key, value);
        }
        self
    }

    /// True when neither a search term nor any facet constraint is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_none() && self.facets.is_empty()
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn facet_value(&self, key: &str) -> Option<&str> {
        self.facets.get(key).map(String::as_str)
    }

    /// Whether a single record satisfies the search term and every facet.
    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        if let Some(term) = &self.search {
            let needle = term.to_lowercase();
            let hit = record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        self.facets
            .iter()
            .all(|(key, value)| record.facet(key) == Some(value.as_str()))
    }
}

/// Filters `source`, preserving the original relative order.
pub fn apply_filters<'a, T: Filterable>(source: &'a [T], filter: &ListFilter) -> Vec<&'a T> {
    source
        .iter()
        .filter(|record| filter.matches(*record))
        .collect()
}

/// Requested page slice: 1-based page index and positive page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    /// Clamps `page` and `per_page` to at least 1. Out-of-range pages are not
    /// an error; they produce short or empty slices further down.
    #[must_use]
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Slices one page out of the filtered rows, returning `(total, visible)`.
///
/// The slice is always contiguous and order-preserving, and
/// `visible.len() <= pagination.per_page` holds for every input.
pub fn paginate<'a, T>(filtered: &[&'a T], pagination: Pagination) -> (usize, Vec<&'a T>) {
    let total = filtered.len();
    let start = pagination.offset().min(total);
    let end = (start + pagination.per_page).min(total);
    (total, filtered[start..end].to_vec())
}

/// Number of pages needed to show `total` rows.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

// Page-control window shape: full runs at both edges, a wider run around the
// current page, `None` gaps where pages are elided.
const LEFT_EDGE: usize = 2;
const LEFT_CURRENT: usize = 2;
const RIGHT_CURRENT: usize = 4;
const RIGHT_EDGE: usize = 2;

fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + LEFT_EDGE).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(LEFT_CURRENT));
    let mid_end = (current_page + RIGHT_CURRENT + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(RIGHT_EDGE) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One page of display rows plus the page-control window templates render.
/// `None` entries in `pages` mark elided ranges.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
}

impl<T> Paginated<T> {
    #[must_use]
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = page_window(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
        }
    }
}
