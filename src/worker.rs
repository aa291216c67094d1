//! Background execution of backend requests
//!
//! The TUI event loop must keep drawing while a request is outstanding, so
//! every request runs on its own short-lived thread and reports back over a
//! channel. Requests are never cancelled; controllers discard outcomes whose
//! ticket is no longer current.
//!
//! The tracing span that issued a request is entered on the worker thread,
//! so log lines from the HTTP client stay attached to the screen action that
//! caused them.

use crate::api::{ApiError, FoodApi};
use crate::controller::{DetailRequest, SearchRequest};
use crate::models::{FoodDetail, SearchResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use tracing::{Span, error};

/// Outcome of a request, paired with the request that produced it
#[derive(Debug)]
pub enum Completion {
    Search(SearchRequest, Result<SearchResult, ApiError>),
    Detail(DetailRequest, Result<FoodDetail, ApiError>),
}

/// Runs requests off the calling thread
pub struct Fetcher {
    api: Arc<dyn FoodApi>,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl Fetcher {
    /// Create a fetcher for `api`
    #[must_use]
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { api, tx, rx }
    }

    /// Start a search in the background
    pub fn search(&self, request: SearchRequest) {
        let api = Arc::clone(&self.api);
        self.spawn(
            "search",
            request,
            move |request: &SearchRequest| api.search(&request.query, request.page),
            Completion::Search,
        );
    }

    /// Start a detail fetch in the background
    pub fn detail(&self, request: DetailRequest) {
        let api = Arc::clone(&self.api);
        self.spawn(
            "detail",
            request,
            move |request: &DetailRequest| api.get_detail(&request.fdc_id),
            Completion::Detail,
        );
    }

    /// Next finished request, without blocking
    pub fn try_recv(&self) -> Option<Completion> {
        match self.rx.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Wait for the next finished request
    #[cfg(test)]
    pub(crate) fn recv(&self) -> Option<Completion> {
        self.rx.recv().ok()
    }

    /// Run `call` for `request` on a new thread
    ///
    /// Exactly one completion is sent per request: a panicking call or a
    /// thread that cannot be started completes it with
    /// `ApiError::Interrupted`.
    fn spawn<R, T, F>(
        &self,
        kind: &'static str,
        request: R,
        call: F,
        complete: fn(R, Result<T, ApiError>) -> Completion,
    ) where
        R: Clone + Send + 'static,
        T: Send + 'static,
        F: FnOnce(&R) -> Result<T, ApiError> + Send + 'static,
    {
        let tx = self.tx.clone();
        let span = Span::current();
        let fallback = request.clone();

        let spawned = thread::Builder::new()
            .name(format!("foodfinder-{kind}"))
            .spawn(move || {
                let _entered = span.enter();
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| call(&request)))
                    .unwrap_or_else(|payload| {
                        let reason = panic_message(payload.as_ref());
                        error!(kind, %reason, "request thread panicked");
                        Err(ApiError::Interrupted(reason))
                    });
                // Receiver is gone only when the app is shutting down.
                let _ = tx.send(complete(request, outcome));
            });

        if let Err(e) = spawned {
            error!(kind, error = %e, "failed to spawn request thread");
            let _ = self
                .tx
                .send(complete(fallback, Err(ApiError::Interrupted(e.to_string()))));
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "request thread panicked".to_string())
}
