//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI
//! args and runs the operation against the backend.

pub mod browse;
pub mod config;
pub mod search;
pub mod show;

// Re-export execute functions for convenience
pub use browse::execute as browse;
pub use self::config::execute as config;
pub use search::execute as search;
pub use show::execute as show;
