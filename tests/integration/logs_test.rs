//! Integration tests for log ingestion and queries.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use http::StatusCode;
use serde_json::{Value, json};

use loghub_core::error::AppError;
use loghub_core::result::AppResult;
use loghub_core::types::LogFilter;
use loghub_database::LogStore;
use loghub_entity::LogEntry;

use crate::helpers::{self, TestApp};

fn entry(level: &str, log_string: &str, timestamp: &str, source: &str) -> Value {
    json!({
        "level": level,
        "log_string": log_string,
        "timestamp": timestamp,
        "metadata": { "source": source }
    })
}

fn as_set(items: &[Value]) -> HashSet<String> {
    items.iter().map(Value::to_string).collect()
}

#[tokio::test]
async fn test_post_then_get_by_each_level() {
    let app = TestApp::new();

    for level in ["info", "error", "success"] {
        let body = entry(level, "boot", "t1", "svcA");
        let response = app
            .request("POST", "/logs", Some(json!([body.clone()])))
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.items(), &vec![body.clone()]);

        let response = app
            .request("GET", &format!("/logs/level/{level}"), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert!(response.items().contains(&body));
    }

    assert_eq!(app.store.count("info_logs"), 1);
    assert_eq!(app.store.count("error_logs"), 1);
    assert_eq!(app.store.count("success_logs"), 1);
}

#[tokio::test]
async fn test_level_is_case_insensitive() {
    let app = TestApp::new();
    let body = entry("ERROR", "disk full", "t9", "svcB");

    let response = app.request("POST", "/logs", Some(json!([body.clone()]))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items()[0]["level"], "ERROR");

    let response = app.request("GET", "/logs/level/Error", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items(), &vec![body]);
}

#[tokio::test]
async fn test_unknown_level_on_read() {
    let app = TestApp::new();

    let response = app.request("GET", "/logs/level/debug", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.message().contains("debug"));
}

#[tokio::test]
async fn test_undecodable_level_segment() {
    let app = TestApp::new();

    let response = app.request("GET", "/logs/level/%FF", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(!response.message().is_empty());
}

#[tokio::test]
async fn test_unknown_level_on_write() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/logs",
            Some(json!([entry("warning", "hot", "t1", "svcA")])),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().contains("warning"));
}

#[tokio::test]
async fn test_mixed_batch_fails_but_keeps_prefix() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/logs",
            Some(json!([
                entry("info", "one", "t1", "svcA"),
                entry("success", "two", "t2", "svcA"),
                entry("warning", "three", "t3", "svcA"),
                entry("error", "four", "t4", "svcA"),
            ])),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.body.get("message").is_some());
    assert!(response.body.as_array().is_none());

    assert_eq!(app.store.count("info_logs"), 1);
    assert_eq!(app.store.count("success_logs"), 1);
    assert_eq!(app.store.count("error_logs"), 0);
}

#[tokio::test]
async fn test_log_string_unions_all_collections() {
    let app = TestApp::new();
    let matches = vec![
        entry("info", "disk full", "t1", "svcA"),
        entry("error", "disk full", "t2", "svcB"),
        entry("success", "disk full", "t3", "svcC"),
    ];
    let mut batch = matches.clone();
    batch.push(entry("info", "disk ok", "t4", "svcA"));

    let response = app.request("POST", "/logs", Some(Value::Array(batch))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items().len(), 4);

    let response = app
        .request("GET", "/logs/log_string?log_string=disk%20full", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(as_set(response.items()), as_set(&matches));

    let response = app
        .request("GET", "/logs/log_string?log_string=nothing", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.items().is_empty());
}

#[tokio::test]
async fn test_timestamp_query() {
    let app = TestApp::new();
    app.request(
        "POST",
        "/logs",
        Some(json!([
            entry("info", "a", "2024-05-01T10:00:00Z", "svcA"),
            entry("error", "b", "2024-05-01T10:00:00Z", "svcB"),
            entry("error", "c", "2024-05-01T10:00:01Z", "svcB"),
        ])),
    )
    .await;

    let response = app
        .request("GET", "/logs/timestamp?timestamp=2024-05-01T10:00:00Z", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let messages: HashSet<_> = response
        .items()
        .iter()
        .map(|e| e["log_string"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, HashSet::from(["a".to_string(), "b".to_string()]));
}

#[tokio::test]
async fn test_metadata_source_round_trip() {
    let app = TestApp::new();
    let body = entry("info", "boot", "t1", "svcA");

    let response = app.request("POST", "/logs", Some(json!([body.clone()]))).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items(), &vec![body.clone()]);

    let response = app
        .request("GET", "/logs/metadata/source?source=svcA", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.items(), &vec![body]);
}

#[tokio::test]
async fn test_resubmission_creates_duplicates() {
    let app = TestApp::new();
    let body = entry("success", "deploy", "t5", "ci");

    for _ in 0..2 {
        let response = app.request("POST", "/logs", Some(json!([body.clone()]))).await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app
        .request("GET", "/logs/metadata/source?source=ci", None)
        .await;
    assert_eq!(response.items(), &vec![body.clone(), body]);
}

#[tokio::test]
async fn test_metadata_values_preserved() {
    let app = TestApp::new();
    let body = json!({
        "level": "info",
        "log_string": "req",
        "timestamp": "t1",
        "metadata": {
            "source": "gateway",
            "latency_ms": 12.5,
            "status": 200,
            "cached": false,
            "trace": { "id": "abc", "spans": [1, 2, 3] }
        }
    });

    app.request("POST", "/logs", Some(json!([body.clone()]))).await;
    let response = app.request("GET", "/logs/level/info", None).await;

    assert_eq!(response.items(), &vec![body]);
}

#[tokio::test]
async fn test_missing_query_parameter() {
    let app = TestApp::new();

    for path in ["/logs/log_string", "/logs/timestamp", "/logs/metadata/source"] {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.body["error"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_malformed_body() {
    let app = TestApp::new();

    let response = app
        .raw_request("POST", "/logs", "[{\"level\": \"info\"".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/logs",
            Some(json!([{ "level": "info", "log_string": "x", "timestamp": "t", "metadata": "svcA" }])),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count("info_logs"), 0);
}

#[tokio::test]
async fn test_empty_batch() {
    let app = TestApp::new();

    let response = app.request("POST", "/logs", Some(json!([]))).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.items().is_empty());
}

/// Store that drops writes for one source and fails reads entirely.
#[derive(Debug, Default)]
struct UnreliableStore {
    inner: loghub_database::memory::MemoryLogStore,
}

#[async_trait]
impl LogStore for UnreliableStore {
    fn provider_type(&self) -> &str {
        "unreliable"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::database("no reachable servers"))
    }

    async fn insert_one(&self, collection: &str, entry: &LogEntry) -> AppResult<bool> {
        if entry.metadata.source() == Some("lossy") {
            return Ok(false);
        }
        self.inner.insert_one(collection, entry).await
    }

    async fn find(&self, _collection: &str, _filter: &LogFilter) -> AppResult<Vec<LogEntry>> {
        Err(AppError::database("Server selection timeout: no reachable servers"))
    }
}

#[tokio::test]
async fn test_unacknowledged_entries_omitted() {
    let store = Arc::new(UnreliableStore::default());
    let router = helpers::build_test_router(store.clone());

    let batch = json!([
        entry("info", "one", "t1", "svcA"),
        entry("info", "two", "t2", "lossy"),
        entry("error", "three", "t3", "svcA"),
    ]);
    let response = helpers::send(&router, "POST", "/logs", batch.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.items(),
        &vec![
            entry("info", "one", "t1", "svcA"),
            entry("error", "three", "t3", "svcA"),
        ]
    );
    assert_eq!(store.inner.count("info_logs"), 1);
}

#[tokio::test]
async fn test_store_fault_is_internal_error() {
    let router = helpers::build_test_router(Arc::new(UnreliableStore::default()));

    let response = helpers::send(&router, "GET", "/logs/level/info", String::new()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "INTERNAL_ERROR");
    assert!(response.message().contains("no reachable servers"));
}
