//! Ratatui widgets for the foodfinder TUI

mod food_detail;
mod food_list;
mod help_bar;
mod help_overlay;
mod pagination_bar;
mod search_bar;
mod status;
mod welcome;

pub use food_detail::FoodDetailCard;
pub use food_list::FoodList;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use pagination_bar::PaginationBar;
pub use search_bar::SearchBar;
pub use status::{ErrorView, LoadingView, Notice};
pub use welcome::WelcomeView;
