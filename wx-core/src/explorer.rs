//! The explorer controller: one object owning search filter and paging state.
//!
//! Methods on [`ExplorerState`] are the only mutators. Each one that starts a
//! request returns a [`PendingQuery`] carrying a fresh token; responses are
//! turned into a [`SearchView`] only while that token is still the latest.

use crate::display::{render_results, ConcurrentSummary, ResultsView};
use crate::error::ApiError;
use crate::filters::{FilterState, FormField};
use crate::models::{ConcurrentResponse, WeatherPage};
use crate::pagination::{offset_for_page, page_controls, results_info, PageControls};
use crate::query::{SearchQuery, DEFAULT_PAGE_SIZE};
use crate::request::{RequestSequencer, RequestToken};

/// A request the caller should send.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingQuery {
    pub token: RequestToken,
    pub query: SearchQuery,
}

impl PendingQuery {
    pub fn url(&self, base: &str) -> String {
        self.query.url(base)
    }
}

/// Text under the search form.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StatusLine {
    #[default]
    Empty,
    /// "Showing X-Y of Z results"
    Range(String),
    /// Metadata panel of the concurrent mode.
    Concurrent(ConcurrentSummary),
}

/// Everything the results area renders.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub results: ResultsView,
    /// `None` hides the Previous/Next controls.
    pub pagination: Option<PageControls>,
    pub status: StatusLine,
}

impl SearchView {
    pub fn initial() -> Self {
        Self {
            results: ResultsView::Placeholder,
            pagination: None,
            status: StatusLine::Empty,
        }
    }

    /// Clear the table while a request is in flight.
    pub fn begin_loading(&mut self) {
        self.results = ResultsView::Cleared;
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::initial()
    }
}

/// Filter, pagination and request state of the search panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerState {
    filters: FilterState,
    offset: usize,
    page_size: usize,
    total: u64,
    requests: RequestSequencer,
}

impl Default for ExplorerState {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
            requests: RequestSequencer::new(),
        }
    }
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total from the last applied standard page.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Start a new standard search from the first page.
    pub fn submit_search(&mut self, filters: FilterState) -> PendingQuery {
        self.page_size = filters.page_size();
        self.filters = filters;
        self.offset = 0;
        self.page_query()
    }

    /// Re-issue the standard search for a 1-based page.
    pub fn go_to_page(&mut self, page: usize) -> PendingQuery {
        self.offset = offset_for_page(page, self.page_size);
        self.page_query()
    }

    /// Start a concurrent search. The `limit` field is replaced by the
    /// endpoint's fixed per-location limit.
    pub fn submit_concurrent(&mut self, filters: FilterState) -> PendingQuery {
        self.filters = filters.without(FormField::Limit.name());
        PendingQuery {
            token: self.requests.issue(),
            query: SearchQuery::Concurrent {
                filters: self.filters.clone(),
            },
        }
    }

    /// Back to defaults. Outstanding responses become stale.
    pub fn reset(&mut self) -> SearchView {
        self.filters = FilterState::default();
        self.offset = 0;
        self.page_size = DEFAULT_PAGE_SIZE;
        self.total = 0;
        self.requests.invalidate();
        SearchView::initial()
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        self.requests.is_current(token)
    }

    /// View for a standard page, or `None` if a newer request was issued.
    pub fn apply_page(&mut self, token: RequestToken, page: &WeatherPage) -> Option<SearchView> {
        if !self.is_current(token) {
            log::debug!("dropping stale page response (token {})", token.get());
            return None;
        }
        self.total = page.total;
        Some(SearchView {
            results: render_results(&page.data),
            pagination: page_controls(self.total, self.offset, self.page_size),
            status: StatusLine::Range(results_info(self.offset, page.count, page.total)),
        })
    }

    /// View for a concurrent response. Pagination never shows in this mode.
    pub fn apply_concurrent(
        &self,
        token: RequestToken,
        response: &ConcurrentResponse,
    ) -> Option<SearchView> {
        if !self.is_current(token) {
            log::debug!("dropping stale concurrent response (token {})", token.get());
            return None;
        }
        Some(SearchView {
            results: render_results(&response.data),
            pagination: None,
            status: StatusLine::Concurrent(ConcurrentSummary::from(&response.metadata)),
        })
    }

    /// Banner message for a failed request, or `None` if it is stale.
    pub fn apply_failure(&self, token: RequestToken, error: &ApiError) -> Option<String> {
        if !self.is_current(token) {
            log::debug!("dropping stale failure (token {}): {}", token.get(), error);
            return None;
        }
        Some(error.search_message())
    }

    fn page_query(&mut self) -> PendingQuery {
        PendingQuery {
            token: self.requests.issue(),
            query: SearchQuery::Page {
                filters: self.filters.clone(),
                offset: self.offset,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::NO_RESULTS;
    use crate::filters::SearchForm;
    use crate::models::{ConcurrentMetadata, WeatherRecord};

    fn page(total: u64, count: usize) -> WeatherPage {
        WeatherPage {
            success: true,
            error: None,
            data: vec![WeatherRecord::default(); count],
            total,
            count: count as u64,
        }
    }

    #[test]
    fn test_submit_search_resets_offset_and_reads_limit() {
        let mut explorer = ExplorerState::new();
        explorer.submit_search(FilterState::from_pairs([("limit", "10")]));
        explorer.go_to_page(4);
        assert_eq!(explorer.offset(), 30);

        let pending = explorer.submit_search(FilterState::from_pairs([("limit", "abc")]));
        assert_eq!(explorer.offset(), 0);
        assert_eq!(explorer.page_size(), 25);
        assert_eq!(pending.url("/api"), "/api/weather?limit=abc&offset=0");
    }

    #[test]
    fn test_paging_offsets_stay_multiples_of_page_size() {
        let mut explorer = ExplorerState::new();
        explorer.submit_search(FilterState::default());
        for page in 1..6 {
            let pending = explorer.go_to_page(page);
            assert_eq!(explorer.offset() % explorer.page_size(), 0);
            assert_eq!(
                pending.query,
                SearchQuery::Page {
                    filters: FilterState::default(),
                    offset: (page - 1) * 25,
                }
            );
        }
    }

    #[test]
    fn test_apply_page_on_last_page() {
        let mut explorer = ExplorerState::new();
        explorer.submit_search(FilterState::default());
        let pending = explorer.go_to_page(3);
        let view = explorer.apply_page(pending.token, &page(57, 7)).unwrap();
        assert_eq!(explorer.total(), 57);
        let controls = view.pagination.unwrap();
        assert_eq!(controls.current_page, 3);
        assert_eq!(controls.total_pages, 3);
        assert!(!controls.next_enabled());
        assert!(controls.prev_enabled());
        assert_eq!(
            view.status,
            StatusLine::Range("Showing 51-57 of 57 results".to_string())
        );
    }

    #[test]
    fn test_empty_page_shows_no_results() {
        let mut explorer = ExplorerState::new();
        let pending = explorer.submit_search(FilterState::default());
        let view = explorer.apply_page(pending.token, &page(0, 0)).unwrap();
        assert_eq!(view.results.message(), Some(NO_RESULTS));
        assert_eq!(view.pagination, None);
    }

    #[test]
    fn test_stale_responses_are_dropped() {
        let mut explorer = ExplorerState::new();
        let first = explorer.submit_search(FilterState::default());
        let second = explorer.go_to_page(2);
        assert_eq!(explorer.apply_page(first.token, &page(57, 25)), None);
        assert_eq!(
            explorer.apply_failure(first.token, &ApiError::Transport("timeout".into())),
            None
        );
        assert!(explorer.apply_page(second.token, &page(57, 25)).is_some());
    }

    #[test]
    fn test_concurrent_always_hides_pagination() {
        let mut explorer = ExplorerState::new();
        let standard = explorer.submit_search(FilterState::default());
        explorer.apply_page(standard.token, &page(500, 25));
        assert_eq!(explorer.total(), 500);

        let filters = FilterState::from_pairs([("limit", "50"), ("rain_today", "No")]);
        let pending = explorer.submit_concurrent(filters);
        assert_eq!(explorer.filters().get("limit"), None);
        let response = ConcurrentResponse {
            success: true,
            error: None,
            data: vec![WeatherRecord::default(); 3],
            metadata: ConcurrentMetadata {
                locations_processed: 10,
                processing_time: 0.5,
                max_workers: 4,
                total_records: 3,
            },
        };
        let view = explorer.apply_concurrent(pending.token, &response).unwrap();
        assert_eq!(view.pagination, None);
        assert!(matches!(view.status, StatusLine::Concurrent(_)));
        assert!(matches!(view.results, ResultsView::Table(ref rows) if rows.len() == 3));
    }

    #[test]
    fn test_reset_restores_defaults_and_invalidates() {
        let mut explorer = ExplorerState::new();
        explorer.submit_search(FilterState::from_pairs([("location", "Hobart"), ("limit", "10")]));
        let pending = explorer.go_to_page(2);

        let view = explorer.reset();
        assert_eq!(view, SearchView::initial());
        assert!(explorer.filters().is_empty());
        assert_eq!(explorer.offset(), 0);
        assert_eq!(explorer.page_size(), 25);
        assert_eq!(explorer.total(), 0);
        assert_eq!(explorer.apply_page(pending.token, &page(57, 10)), None);
    }

    #[test]
    fn test_default_form_pages_in_step_with_backend() {
        let mut form = SearchForm::default();
        let mut explorer = ExplorerState::new();
        let pending = explorer.submit_search(form.to_filters());
        assert_eq!(pending.url("/api"), "/api/weather?limit=25&offset=0");

        let view = explorer.apply_page(pending.token, &page(57, 25)).unwrap();
        assert_eq!(
            view.status,
            StatusLine::Range("Showing 1-25 of 57 results".to_string())
        );
        assert_eq!(explorer.go_to_page(2).url("/api"), "/api/weather?limit=25&offset=25");

        form.set(FormField::Location, "Albury");
        form.set(FormField::Limit, "10");
        form.clear();
        let pending = explorer.submit_search(form.to_filters());
        assert_eq!(pending.url("/api"), "/api/weather?limit=25&offset=0");
    }

    #[test]
    fn test_failure_message_for_current_request() {
        let mut explorer = ExplorerState::new();
        let pending = explorer.submit_search(FilterState::default());
        let message = explorer
            .apply_failure(pending.token, &ApiError::logical(Some("database locked".into())))
            .unwrap();
        assert_eq!(message, "Failed to load data: database locked");
    }
}
