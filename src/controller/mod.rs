//! Page-level controllers
//!
//! Each screen owns one controller holding its state for as long as the
//! screen is shown. Controllers never perform I/O themselves when driven by
//! the TUI: starting an operation returns a request value that the caller
//! executes (usually on a worker thread) and then hands back together with
//! its outcome. The `run_*` helpers do both steps synchronously for
//! command-line use.
//!
//! # Request ordering
//!
//! Every request carries a [`Ticket`]. Only the most recently issued ticket
//! is current; a completion for any older ticket is dropped without touching
//! state, so a slow response can never overwrite a newer one.

pub mod detail;
mod request;
pub mod search;

pub use detail::{DetailController, DetailRequest, DetailView};
pub use request::{Ticket, TicketCounter};
pub use search::{SUGGESTED_QUERIES, SearchController, SearchRequest, SearchSession, SearchView};
