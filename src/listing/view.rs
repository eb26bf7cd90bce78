//! Stateful form of the list machinery for interactive consumers.
//!
//! HTTP handlers rebuild filter and page state from query parameters on every
//! request, so they use the free functions in the parent module directly.
//! [`ListView`] is the embeddable variant: it owns the source collection and
//! the current filter/page state, tracks an Idle/Loading phase across page
//! transitions, and discards completions that a newer request has superseded.

use super::{DEFAULT_PAGE_SIZE, Filterable, ListFilter, Pagination, apply_filters, paginate};

/// Where the view is in its load cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingChange {
    Page(usize),
    PageSize(usize),
}

/// Token returned by `request_page`/`request_page_size`. Only the newest
/// outstanding ticket commits; older ones are discarded by [`ListView::complete`].
#[derive(Debug, Clone, Copy)]
#[must_use = "pass the ticket back to `complete` to apply the change"]
pub struct PageTicket {
    generation: u64,
    change: PendingChange,
}

/// One source collection with its current filter, page, and load phase.
///
/// Page and page-size changes are two-step: `request_*` enters `Loading` and
/// hands out a [`PageTicket`]; `complete` applies it. The latency between the
/// two calls belongs to the caller, so tests run with none at all while a UI
/// can keep its skeleton visible for however long it likes.
#[derive(Debug)]
pub struct ListView<T> {
    source: Vec<T>,
    filter: ListFilter,
    pagination: Pagination,
    phase: LoadPhase,
    generation: u64,
}

impl<T: Filterable> ListView<T> {
    #[must_use]
    pub fn new(source: Vec<T>) -> Self {
        Self::with_page_size(source, DEFAULT_PAGE_SIZE)
    }

    #[must_use]
    pub fn with_page_size(source: Vec<T>, per_page: usize) -> Self {
        Self {
            source,
            filter: ListFilter::new(),
            pagination: Pagination::new(1, per_page),
            phase: LoadPhase::Idle,
            generation: 0,
        }
    }

    /// Replaces the whole filter, returning to page 1 and dropping any
    /// pending page change.
    pub fn set_filter(&mut self, filter: ListFilter) {
        self.filter = filter;
        self.reset_page();
    }

    /// Updates the search term only, keeping facet constraints.
    pub fn set_search(&mut self, term: &str) {
        self.filter = self.filter.clone().search(term);
        self.reset_page();
    }

    /// Updates one facet constraint; empty and `"all"` clear it.
    pub fn set_facet(&mut self, key: &str, value: &str) {
        self.filter = self.filter.clone().facet(key, value);
        self.reset_page();
    }

    fn reset_page(&mut self) {
        // A pending page change would commit against the old result set.
        self.pagination.page = 1;
        self.generation += 1;
        self.phase = LoadPhase::Idle;
    }

    /// Starts a page change and enters `Loading`.
    pub fn request_page(&mut self, page: usize) -> PageTicket {
        self.begin(PendingChange::Page(page.max(1)))
    }

    /// Starts a page-size change; the view returns to page 1 when it commits.
    pub fn request_page_size(&mut self, per_page: usize) -> PageTicket {
        self.begin(PendingChange::PageSize(per_page.max(1)))
    }

    fn begin(&mut self, change: PendingChange) -> PageTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        PageTicket {
            generation: self.generation,
            change,
        }
    }

    /// Applies the change the ticket was issued for and returns to `Idle`.
    ///
    /// Returns `false` when the ticket is stale: a later request or filter
    /// change has superseded it, and the view is left untouched.
    pub fn complete(&mut self, ticket: PageTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match ticket.change {
            PendingChange::Page(page) => self.pagination.page = page,
            PendingChange::PageSize(per_page) => self.pagination = Pagination::new(1, per_page),
        }
        self.phase = LoadPhase::Idle;
        true
    }

    /// Rows of the current page, in source order.
    pub fn visible(&self) -> Vec<&T> {
        let filtered = apply_filters(&self.source, &self.filter);
        let (_, visible) = paginate(&filtered, self.pagination);
        visible
    }

    /// Count of records matching the current filter.
    pub fn total(&self) -> usize {
        apply_filters(&self.source, &self.filter).len()
    }

    pub fn page(&self) -> usize {
        self.pagination.page
    }

    pub fn per_page(&self) -> usize {
        self.pagination.per_page
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }
}
