//! Terminal user interface
//!
//! A ratatui front end over the search and detail controllers. The app owns
//! exactly one mounted screen at a time:
//!
//! ```text
//! ┌──────────────┐  Enter on a result  ┌──────────────────┐
//! │ Search  (/)  │ ──────────────────▶ │ Detail (/food/id)│
//! │              │ ◀────────────────── │                  │
//! └──────────────┘     Esc / Back      └──────────────────┘
//!        │                                      │
//!        └────── requests ──▶ Fetcher ◀─────────┘
//!                              (worker threads)
//! ```
//!
//! Key handling lives in `events` and never touches the network; the app
//! turns the resulting effects into background requests or navigation.

mod app;
mod error;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use app::App;
pub use error::{Result, UiError};
pub use events::Effect;
pub use state::{DetailScreen, Focus, QueryInput, Screen, SearchScreen};
pub use theme::Theme;
