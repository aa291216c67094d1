//! Browse command - interactive food browser

use crate::{FoodFinderError, api::FoodApi, route::Route, ui::App};
use std::sync::Arc;
use tracing::info;

type Result<T> = std::result::Result<T, FoodFinderError>;

/// Execute the browse command
///
/// Starts on `route` (the search screen by default) and submits `query`
/// right away when one is given.
///
/// # Errors
/// Returns an error if the terminal cannot be driven
pub fn execute(api: Arc<dyn FoodApi>, query: Option<&str>, route: Option<Route>) -> Result<()> {
    let route = route.unwrap_or_default();
    info!(%route, ?query, "starting browser");

    let mut app = App::new(api);
    app.start(route, query);
    app.run()?;
    Ok(())
}
