//! Testing utilities for foodfinder
//!
//! This module provides a scripted [`FoodApi`] implementation and small
//! fixture builders so controller tests never need a running backend.
//!
//! Only available when compiled with `cfg(test)`.

use crate::api::{ApiError, FoodApi, Result};
use crate::models::{FdcId, FoodDetail, FoodSummary, Nutrients, SearchResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted backend that replays queued responses and records calls
///
/// Responses are consumed in order; the last queued response is repeated
/// once the queue runs dry. With nothing queued, every call fails with an
/// `ApiError::Api` so a missing script is obvious in test output.
///
/// # Examples
/// ```ignore
/// let api = MockFoodApi::new().with_detail(Err(ApiError::NotFound));
/// assert!(api.get_detail(&FdcId::from(1)).is_err());
/// assert_eq!(api.detail_ids().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct MockFoodApi {
    searches: Mutex<VecDeque<Result<SearchResult>>>,
    details: Mutex<VecDeque<Result<FoodDetail>>>,
    search_log: Mutex<Vec<(String, u32)>>,
    detail_log: Mutex<Vec<FdcId>>,
}

impl MockFoodApi {
    /// Create a mock with no scripted responses
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next search call
    #[must_use]
    pub fn with_search(self, response: Result<SearchResult>) -> Self {
        self.searches.lock().expect("mock lock poisoned").push_back(response);
        self
    }

    /// Queue a response for the next detail call
    #[must_use]
    pub fn with_detail(self, response: Result<FoodDetail>) -> Self {
        self.details.lock().expect("mock lock poisoned").push_back(response);
        self
    }

    /// Number of search calls received
    pub fn search_calls(&self) -> usize {
        self.search_log.lock().expect("mock lock poisoned").len()
    }

    /// Arguments of every search call, in order
    pub fn searched(&self) -> Vec<(String, u32)> {
        self.search_log.lock().expect("mock lock poisoned").clone()
    }

    /// Identifiers of every detail call, in order
    pub fn detail_ids(&self) -> Vec<FdcId> {
        self.detail_log.lock().expect("mock lock poisoned").clone()
    }
}

fn next_response<T: Clone>(queue: &Mutex<VecDeque<Result<T>>>) -> Result<T> {
    let mut queue = queue.lock().expect("mock lock poisoned");
    match queue.len() {
        0 => Err(ApiError::Api("no scripted response".to_string())),
        1 => queue[0].clone(),
        _ => queue.pop_front().expect("queue is non-empty"),
    }
}

impl FoodApi for MockFoodApi {
    fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
        self.search_log
            .lock()
            .expect("mock lock poisoned")
            .push((query.to_string(), page));
        next_response(&self.searches)
    }

    fn get_detail(&self, id: &FdcId) -> Result<FoodDetail> {
        self.detail_log.lock().expect("mock lock poisoned").push(id.clone());
        next_response(&self.details)
    }
}

/// Build a search row with a numeric id
pub fn food(id: u64, description: &str) -> FoodSummary {
    FoodSummary {
        fdc_id: FdcId::from(id),
        description: description.to_string(),
        brand_owner: None,
        data_type: "Survey (FNDDS)".to_string(),
    }
}

/// Build a detail record with every nutrient known
pub fn detail(id: u64, description: &str) -> FoodDetail {
    FoodDetail {
        fdc_id: FdcId::from(id),
        description: description.to_string(),
        brand_owner: None,
        data_type: "Foundation".to_string(),
        nutrients: Nutrients {
            calories: Some(52.0),
            protein: Some(0.26),
            carbs: Some(13.81),
            fat: Some(0.17),
            fiber: Some(2.4),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repeats_last_response() {
        let api = MockFoodApi::new()
            .with_detail(Err(ApiError::NotFound))
            .with_detail(Ok(detail(1, "Apple")));

        assert!(api.get_detail(&FdcId::from(1)).is_err());
        assert!(api.get_detail(&FdcId::from(1)).is_ok());
        assert!(api.get_detail(&FdcId::from(1)).is_ok());
        assert_eq!(api.detail_ids().len(), 3);
    }

    #[test]
    fn test_mock_without_script_fails() {
        let api = MockFoodApi::new();
        assert!(api.search("milk", 1).is_err());
        assert_eq!(api.searched(), vec![("milk".to_string(), 1)]);
    }
}
