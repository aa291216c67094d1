//! Search screen controller
//!
//! Owns the active query, the current page of results and the loading and
//! error flags that decide which view the search screen shows.

use super::request::{Ticket, TicketCounter};
use crate::api::{ApiError, FoodApi};
use crate::models::{DEFAULT_PAGE_SIZE, FoodSummary, SearchResult};
use crate::pagination::PageWindow;
use tracing::{debug, info};

/// Queries offered on the welcome view before anything was searched
pub const SUGGESTED_QUERIES: [&str; 4] = ["banana", "chicken", "apple", "milk"];

/// Observable state of a search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSession {
    /// Active query, empty until the first submission
    pub query: String,
    /// Page of the results currently displayed (1-based)
    pub current_page: u32,
    /// Page size reported by the backend
    pub page_size: u32,
    /// Whether a request is outstanding
    pub loading: bool,
    /// Message of the last failed request
    pub error: Option<String>,
    /// Set on the first submitted query and never cleared
    pub has_searched: bool,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self {
            query: String::new(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            loading: false,
            error: None,
            has_searched: false,
        }
    }
}

/// A search the controller wants executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub ticket: Ticket,
    pub query: String,
    pub page: u32,
}

/// What the search screen should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchView<'a> {
    /// A request is in flight
    Loading,
    /// The last request failed
    Failed(&'a str),
    /// Nothing has been searched yet
    Welcome,
    /// The search succeeded with no matches
    Empty,
    /// A page of matches
    Results {
        foods: &'a [FoodSummary],
        total: u64,
        pagination: Option<PageWindow>,
    },
}

/// Controller for the search screen
#[derive(Debug, Default)]
pub struct SearchController {
    session: SearchSession,
    foods: Vec<FoodSummary>,
    total: u64,
    attempted_page: u32,
    tickets: TicketCounter,
    scroll_to_top: bool,
}

impl SearchController {
    /// Create a controller with no active query
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state
    #[must_use]
    pub const fn session(&self) -> &SearchSession {
        &self.session
    }

    /// Foods on the current page
    #[must_use]
    pub fn foods(&self) -> &[FoodSummary] {
        &self.foods
    }

    /// Total number of matches across all pages
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Submit a new query, starting over at page 1
    ///
    /// Blank queries are ignored and leave every field untouched.
    pub fn submit_query(&mut self, query: &str) -> Option<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        self.session.has_searched = true;
        self.session.current_page = 1;
        self.session.query = query.to_string();
        info!(query, "submitting search");
        Some(self.start(1))
    }

    /// Move to another page of the active query
    pub fn change_page(&mut self, page: u32) -> Option<SearchRequest> {
        if self.session.query.is_empty() || page == 0 {
            return None;
        }
        Some(self.start(page))
    }

    /// Repeat the last attempted search
    pub fn retry(&mut self) -> Option<SearchRequest> {
        if self.session.query.is_empty() {
            return None;
        }
        let page = self.attempted_page.max(1);
        debug!(query = %self.session.query, page, "retrying search");
        Some(self.start(page))
    }

    fn start(&mut self, page: u32) -> SearchRequest {
        self.session.loading = true;
        self.session.error = None;
        self.attempted_page = page;

        SearchRequest {
            ticket: self.tickets.issue(),
            query: self.session.query.clone(),
            page,
        }
    }

    /// Apply the outcome of a request
    ///
    /// Returns `false` if the request was superseded and its outcome ignored.
    pub fn complete_search(
        &mut self,
        request: &SearchRequest,
        outcome: Result<SearchResult, ApiError>,
    ) -> bool {
        if !self.tickets.is_current(request.ticket) {
            debug!(ticket = request.ticket.value(), "dropping stale search response");
            return false;
        }

        match outcome {
            Ok(result) => {
                self.foods = result.foods;
                self.total = result.total;
                self.session.page_size = result.page_size;
                self.session.current_page = request.page;
                self.scroll_to_top = true;
            }
            Err(e) => {
                debug!(error = ?e, "search failed");
                self.foods.clear();
                self.total = 0;
                self.session.error = Some(e.to_string());
            }
        }

        self.session.loading = false;
        true
    }

    /// Execute a request against `api` on the calling thread
    pub fn run_search(&mut self, api: &dyn FoodApi, request: &SearchRequest) -> bool {
        let outcome = api.search(&request.query, request.page);
        self.complete_search(request, outcome)
    }

    /// Consume the pending scroll-to-top effect of the last successful search
    pub const fn take_scroll_to_top(&mut self) -> bool {
        let pending = self.scroll_to_top;
        self.scroll_to_top = false;
        pending
    }

    /// Pagination window for the current page, hidden for a single page
    #[must_use]
    pub fn page_window(&self) -> Option<PageWindow> {
        PageWindow::new(self.session.current_page, self.total, self.session.page_size)
    }

    /// Which view the screen should render
    #[must_use]
    pub fn view(&self) -> SearchView<'_> {
        if self.session.loading {
            SearchView::Loading
        } else if let Some(error) = &self.session.error {
            SearchView::Failed(error)
        } else if !self.session.has_searched {
            SearchView::Welcome
        } else if self.foods.is_empty() {
            SearchView::Empty
        } else {
            SearchView::Results {
                foods: &self.foods,
                total: self.total,
                pagination: self.page_window(),
            }
        }
    }
}
