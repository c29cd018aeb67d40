//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use loghub_core::config::{AppConfig, LegacyOverrides};
use loghub_database::memory::MemoryLogStore;
use loghub_database::{CollectionMap, LogStore};
use loghub_service::LogService;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// In-memory store for direct inspection
    pub store: MemoryLogStore,
}

impl TestApp {
    /// Create a test application backed by an empty in-memory store
    pub fn new() -> Self {
        let store = MemoryLogStore::new();
        let router = build_test_router(Arc::new(store.clone()));
        Self { router, store }
    }

    /// Make an HTTP request with an optional JSON body
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a raw body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        send(&self.router, method, path, body).await
    }
}

/// Build the production router around `store` with default configuration
pub fn build_test_router(store: Arc<dyn LogStore>) -> Router {
    let config = AppConfig::from_toml_str(
        "[database]\nprovider = \"memory\"\n",
        &LegacyOverrides::default(),
    )
    .expect("Failed to load test config");

    let collections = Arc::new(
        CollectionMap::from_config(&config.database.collections)
            .expect("Failed to build collection map"),
    );
    let log_service = Arc::new(LogService::new(Arc::clone(&store), collections));

    loghub_api::build_router(loghub_api::AppState {
        config: Arc::new(config),
        store,
        log_service,
    })
}

/// Send one request through `router`
pub async fn send(router: &Router, method: &str, path: &str, body: String) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Body as an array, panicking otherwise
    pub fn items(&self) -> &Vec<Value> {
        self.body
            .as_array()
            .unwrap_or_else(|| panic!("Expected JSON array, got {:?}", self.body))
    }

    /// Error message from an error body
    pub fn message(&self) -> &str {
        self.body
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_else(|| panic!("Expected error body, got {:?}", self.body))
    }
}
