//! Detail screen controller
//!
//! Holds one food record keyed by the identifier from the current route.
//! The first fetch is issued as soon as the controller is mounted.

use super::request::{Ticket, TicketCounter};
use crate::api::{ApiError, FoodApi};
use crate::models::{FdcId, FoodDetail};
use tracing::{debug, info};

/// A detail fetch the controller wants executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub ticket: Ticket,
    pub fdc_id: FdcId,
}

/// What the detail screen should render
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    /// Fetch in flight
    Loading,
    /// Fetch failed; offers retry and back
    Failed(&'a str),
    /// Record available
    Loaded(&'a FoodDetail),
    /// Nothing to show yet
    Blank,
}

/// Controller for the detail screen
#[derive(Debug)]
pub struct DetailController {
    fdc_id: FdcId,
    food: Option<FoodDetail>,
    loading: bool,
    error: Option<String>,
    tickets: TicketCounter,
}

impl DetailController {
    /// Mount the controller for `fdc_id` and issue its first fetch
    #[must_use]
    pub fn mount(fdc_id: FdcId) -> (Self, DetailRequest) {
        let mut controller = Self {
            fdc_id,
            food: None,
            loading: false,
            error: None,
            tickets: TicketCounter::default(),
        };
        let request = controller.start();
        (controller, request)
    }

    /// Identifier this controller shows
    #[must_use]
    pub const fn fdc_id(&self) -> &FdcId {
        &self.fdc_id
    }

    /// Whether a fetch is outstanding
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Message of the last failed fetch
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Loaded record, if any
    #[must_use]
    pub const fn food(&self) -> Option<&FoodDetail> {
        self.food.as_ref()
    }

    /// Follow a route change; the same identifier is a no-op
    pub fn navigate(&mut self, fdc_id: FdcId) -> Option<DetailRequest> {
        if fdc_id == self.fdc_id {
            return None;
        }
        self.fdc_id = fdc_id;
        self.food = None;
        Some(self.start())
    }

    /// Fetch the current identifier again
    pub fn retry(&mut self) -> DetailRequest {
        debug!(fdc_id = %self.fdc_id, "retrying detail fetch");
        self.start()
    }

    fn start(&mut self) -> DetailRequest {
        self.loading = true;
        self.error = None;
        info!(fdc_id = %self.fdc_id, "fetching food detail");

        DetailRequest {
            ticket: self.tickets.issue(),
            fdc_id: self.fdc_id.clone(),
        }
    }

    /// Apply the outcome of a fetch
    ///
    /// Returns `false` if the request was superseded and its outcome ignored.
    pub fn complete_detail(
        &mut self,
        request: &DetailRequest,
        outcome: Result<FoodDetail, ApiError>,
    ) -> bool {
        if !self.tickets.is_current(request.ticket) {
            debug!(ticket = request.ticket.value(), "dropping stale detail response");
            return false;
        }

        match outcome {
            Ok(food) => self.food = Some(food),
            Err(e) => {
                debug!(error = ?e, "detail fetch failed");
                self.error = Some(e.to_string());
            }
        }

        self.loading = false;
        true
    }

    /// Execute a request against `api` on the calling thread
    pub fn run_detail(&mut self, api: &dyn FoodApi, request: &DetailRequest) -> bool {
        let outcome = api.get_detail(&request.fdc_id);
        self.complete_detail(request, outcome)
    }

    /// Which view the screen should render
    #[must_use]
    pub fn view(&self) -> DetailView<'_> {
        if self.loading {
            DetailView::Loading
        } else if let Some(error) = &self.error {
            DetailView::Failed(error)
        } else if let Some(food) = &self.food {
            DetailView::Loaded(food)
        } else {
            DetailView::Blank
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{MockFoodApi, detail};

    #[test]
    fn test_mount_starts_loading() {
        let (controller, request) = DetailController::mount(FdcId::from(42));
        assert_eq!(request.fdc_id, FdcId::from(42));
        assert!(controller.is_loading());
        assert_eq!(controller.view(), DetailView::Loading);
    }

    #[test]
    fn test_successful_fetch_loads_food() {
        let api = MockFoodApi::new().with_detail(Ok(detail(42, "Apple, raw")));
        let (mut controller, request) = DetailController::mount(FdcId::from(42));

        assert!(controller.run_detail(&api, &request));

        assert!(!controller.is_loading());
        match controller.view() {
            DetailView::Loaded(food) => assert_eq!(food.description, "Apple, raw"),
            other => panic!("Expected loaded view, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_then_retry_reissues_same_fetch() {
        let api = MockFoodApi::new()
            .with_detail(Err(ApiError::NotFound))
            .with_detail(Ok(detail(999, "Mystery food")));
        let (mut controller, request) = DetailController::mount(FdcId::from(999));

        controller.run_detail(&api, &request);
        assert_eq!(controller.view(), DetailView::Failed("Food not found"));

        let retry = controller.retry();
        assert_eq!(retry.fdc_id, request.fdc_id);
        assert_eq!(controller.view(), DetailView::Loading);

        controller.run_detail(&api, &retry);
        assert!(matches!(controller.view(), DetailView::Loaded(_)));
        assert_eq!(api.detail_ids(), vec![FdcId::from(999), FdcId::from(999)]);
    }

    #[test]
    fn test_navigate_to_same_id_is_noop() {
        let (mut controller, _) = DetailController::mount(FdcId::from(1));
        assert!(controller.navigate(FdcId::from(1)).is_none());
    }

    #[test]
    fn test_navigate_discards_previous_response() {
        let (mut controller, first) = DetailController::mount(FdcId::from(1));
        let second = controller.navigate(FdcId::from(2)).unwrap();

        assert!(!controller.complete_detail(&first, Ok(detail(1, "First"))));
        assert!(controller.is_loading());

        assert!(controller.complete_detail(&second, Ok(detail(2, "Second"))));
        assert_eq!(controller.food().map(|f| f.description.as_str()), Some("Second"));
    }

    #[test]
    fn test_failure_keeps_error_until_retry() {
        let (mut controller, request) = DetailController::mount(FdcId::from(5));
        controller.complete_detail(&request, Err(ApiError::Api("HTTP Error: 500".to_string())));

        assert_eq!(controller.error(), Some("HTTP Error: 500"));
        assert!(!controller.is_loading());

        let _ = controller.retry();
        assert!(controller.error().is_none());
    }
}
