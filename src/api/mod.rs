//! Backend API access
//!
//! This module defines the [`FoodApi`] trait that controllers and commands
//! talk to, and [`HttpFoodApi`], the implementation backed by the REST
//! service. The trait is the seam that lets tests substitute a scripted
//! backend without opening sockets.
//!
//! # Endpoints
//!
//! ```text
//! GET {base}/search?query={text}&page={n}  -> SearchResult
//! GET {base}/food/{fdcId}                  -> FoodDetail
//! ```
//!
//! Both calls are idempotent reads. Nothing here retries on failure;
//! retrying is always the caller's decision.

mod client;
pub mod error;

pub use client::{DEFAULT_BASE_URL, HttpFoodApi};
pub use error::ApiError;

use crate::models::{FdcId, FoodDetail, SearchResult};

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Read-only access to the food search backend
pub trait FoodApi: Send + Sync {
    /// Fetch one page of foods matching `query`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Connection` if the backend is unreachable and
    /// `ApiError::Api` if it answers with a failure status.
    fn search(&self, query: &str, page: u32) -> Result<SearchResult>;

    /// Fetch the full record for one food
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for an unknown id, otherwise the same
    /// errors as [`FoodApi::search`].
    fn get_detail(&self, id: &FdcId) -> Result<FoodDetail>;
}
