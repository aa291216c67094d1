//! Integration tests for foodfinder
//!
//! These tests run the HTTP client and the controllers against a local
//! fixture server that answers each connection with a scripted response.

use foodfinder::api::{ApiError, FoodApi, HttpFoodApi};
use foodfinder::api::error::CONNECTION_MESSAGE;
use foodfinder::config::{ENV_PREFIX, FoodFinderConfig};
use foodfinder::controller::{DetailController, DetailView, SearchController, SearchView};
use foodfinder::models::FdcId;
use std::collections::HashMap;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const TIMEOUT: Duration = Duration::from_secs(5);

/// One scripted HTTP answer
struct Reply {
    status: u16,
    body: &'static str,
}

const fn reply(status: u16, body: &'static str) -> Reply {
    Reply { status, body }
}

/// Local server answering one connection per scripted reply
struct FixtureServer {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl FixtureServer {
    fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for reply in replies {
                let (stream, _) = listener.accept().unwrap();
                let request_line = answer(stream, &reply);
                seen.lock().unwrap().push(request_line);
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            requests,
            handle: Some(handle),
        }
    }

    fn api(&self) -> HttpFoodApi {
        HttpFoodApi::new(&self.base_url, TIMEOUT).unwrap()
    }

    /// Request lines received so far, e.g. `GET /api/search?query=x&page=1 HTTP/1.1`
    fn finish(mut self) -> Vec<String> {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
        self.requests.lock().unwrap().clone()
    }
}

fn answer(stream: TcpStream, reply: &Reply) -> String {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();

    // Drain headers; GET requests carry no body
    loop {
        let mut header = String::new();
        let read = reader.read_line(&mut header).unwrap();
        if read == 0 || header == "\r\n" {
            break;
        }
    }

    let response = format!(
        "HTTP/1.1 {} Fixture\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        reply.status,
        reply.body.len(),
        reply.body
    );
    let mut stream = reader.into_inner();
    stream.write_all(response.as_bytes()).unwrap();
    stream.flush().unwrap();

    request_line.trim_end().to_string()
}

/// Base URL of a port nothing listens on
fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/api")
}

const BANANA_PAGE: &str = r#"{
    "foods": [
        {"fdcId": 173944, "description": "Bananas, raw", "dataType": "SR Legacy", "brandOwner": null}
    ],
    "total": 1,
    "page": 1,
    "pageSize": 20
}"#;

const EMPTY_PAGE: &str = r#"{"foods": [], "total": 0, "page": 1, "pageSize": 20}"#;

const APPLE_DETAIL: &str = r#"{
    "fdcId": 171688,
    "description": "Apples, raw, with skin",
    "dataType": "SR Legacy",
    "brandOwner": null,
    "nutrients": {"calories": 52, "protein": 0.26, "carbs": 13.81, "fat": 0.17, "fiber": null}
}"#;

#[test]
fn test_search_sends_query_and_page() {
    let server = FixtureServer::start(vec![reply(200, BANANA_PAGE)]);

    let result = server.api().search("banana", 1).unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.page_size, 20);
    assert_eq!(result.foods[0].fdc_id, FdcId::from(173_944));
    assert_eq!(result.foods[0].brand_owner, None);

    let requests = server.finish();
    assert_eq!(requests, vec!["GET /api/search?query=banana&page=1 HTTP/1.1"]);
}

#[test]
fn test_search_encodes_query() {
    let server = FixtureServer::start(vec![reply(200, EMPTY_PAGE)]);
    server.api().search("cheddar cheese & crackers", 3).unwrap();

    let requests = server.finish();
    assert_eq!(
        requests,
        vec!["GET /api/search?query=cheddar+cheese+%26+crackers&page=3 HTTP/1.1"]
    );
}

#[test]
fn test_detail_decodes_nutrients() {
    let server = FixtureServer::start(vec![reply(200, APPLE_DETAIL)]);

    let food = server.api().get_detail(&FdcId::from(171_688)).unwrap();
    assert_eq!(food.description, "Apples, raw, with skin");
    assert_eq!(food.nutrients.calories, Some(52.0));
    assert_eq!(food.nutrients.fiber, None);

    let requests = server.finish();
    assert_eq!(requests, vec!["GET /api/food/171688 HTTP/1.1"]);
}

#[test]
fn test_detail_not_found() {
    let server = FixtureServer::start(vec![reply(404, r#"{"error": "Food not found"}"#)]);

    let err = server.api().get_detail(&FdcId::from(999_999_999)).unwrap_err();
    assert_eq!(err, ApiError::NotFound);
    assert_eq!(err.to_string(), "Food not found");
    server.finish();
}

#[test]
fn test_server_error_message_is_used() {
    let server = FixtureServer::start(vec![reply(500, r#"{"error": "USDA API unavailable"}"#)]);

    let err = server.api().search("milk", 1).unwrap_err();
    assert_eq!(err.to_string(), "USDA API unavailable");
    server.finish();
}

#[test]
fn test_server_error_without_message_uses_status() {
    let server = FixtureServer::start(vec![reply(502, "<html>Bad Gateway</html>")]);

    let err = server.api().search("milk", 1).unwrap_err();
    assert_eq!(err.to_string(), "HTTP Error: 502");
    server.finish();
}

#[test]
fn test_oversized_page_is_passed_through() {
    let body = r#"{
        "foods": [
            {"fdcId": 1, "description": "Milk, whole", "dataType": "SR Legacy"},
            {"fdcId": 2, "description": "Milk, skim", "dataType": "SR Legacy"}
        ],
        "total": 2,
        "page": 1,
        "pageSize": 1
    }"#;
    let server = FixtureServer::start(vec![reply(200, body)]);

    let result = server.api().search("milk", 1).unwrap();
    assert_eq!(result.foods.len(), 2);
    assert_eq!(result.page_size, 1);
    assert!(!result.is_within_page_size());
    server.finish();
}

#[test]
fn test_malformed_success_body() {
    let server = FixtureServer::start(vec![reply(200, r#"{"foods": "#)]);

    let err = server.api().search("milk", 1).unwrap_err();
    assert!(matches!(err, ApiError::InvalidResponse(_)));
    server.finish();
}

#[test]
fn test_unreachable_backend() {
    let api = HttpFoodApi::new(&unreachable_base_url(), TIMEOUT).unwrap();

    let err = api.search("milk", 1).unwrap_err();
    assert!(err.is_connection());
    assert_eq!(err.to_string(), CONNECTION_MESSAGE);
}

#[test]
fn test_banana_search_shows_one_card_without_pagination() {
    let server = FixtureServer::start(vec![reply(200, BANANA_PAGE)]);
    let api = server.api();
    let mut controller = SearchController::new();

    let request = controller.submit_query("banana").unwrap();
    assert!(controller.run_search(&api, &request));

    match controller.view() {
        SearchView::Results {
            foods,
            total,
            pagination,
        } => {
            assert_eq!(foods.len(), 1);
            assert_eq!(total, 1);
            assert!(pagination.is_none());
        }
        other => panic!("Expected results, got {other:?}"),
    }
    server.finish();
}

#[test]
fn test_no_matches_is_not_an_error() {
    let server = FixtureServer::start(vec![reply(200, EMPTY_PAGE)]);
    let api = server.api();
    let mut controller = SearchController::new();

    let request = controller.submit_query("xyz123").unwrap();
    controller.run_search(&api, &request);

    assert_eq!(controller.view(), SearchView::Empty);
    assert!(controller.session().error.is_none());
    server.finish();
}

#[test]
fn test_unknown_food_then_retry() {
    let server = FixtureServer::start(vec![
        reply(404, r#"{"error": "Food not found"}"#),
        reply(200, APPLE_DETAIL),
    ]);
    let api = server.api();

    let (mut controller, request) = DetailController::mount(FdcId::from(171_688));
    controller.run_detail(&api, &request);
    assert_eq!(controller.view(), DetailView::Failed("Food not found"));

    let retry = controller.retry();
    assert_eq!(retry.fdc_id, FdcId::from(171_688));
    controller.run_detail(&api, &retry);
    assert!(matches!(controller.view(), DetailView::Loaded(_)));

    let requests = server.finish();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0], requests[1]);
}

#[test]
fn test_unreachable_backend_then_retry_same_query_and_page() {
    let api = HttpFoodApi::new(&unreachable_base_url(), TIMEOUT).unwrap();
    let mut controller = SearchController::new();

    controller.submit_query("milk").unwrap();
    let request = controller.change_page(2).unwrap();
    controller.run_search(&api, &request);
    assert_eq!(controller.view(), SearchView::Failed(CONNECTION_MESSAGE));

    let retry = controller.retry().unwrap();
    assert_eq!((retry.query.as_str(), retry.page), ("milk", 2));
}

#[test]
fn test_environment_overrides_config_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    FoodFinderConfig::default().save_to(&path).unwrap();

    let env = HashMap::from([
        ("FOODFINDER_QUIET".to_string(), "true".to_string()),
        ("FOODFINDER_LOG_LEVEL".to_string(), "debug".to_string()),
    ]);
    let config = FoodFinderConfig::load_with(
        &path,
        config::Environment::with_prefix(ENV_PREFIX).source(Some(env)),
    )
    .unwrap();

    assert!(config.quiet);
    assert_eq!(config.log_level.as_deref(), Some("debug"));
    assert_eq!(config.api_base_url, "http://localhost:8000/api");
}
