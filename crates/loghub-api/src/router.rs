//! Route definitions for the LogHub HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(log_routes())
        .merge(health_routes())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Log ingestion and exact-match queries
fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", post(handlers::logs::create_logs))
        .route(
            "/logs/level/{level}",
            get(handlers::logs::get_logs_by_level),
        )
        .route(
            "/logs/log_string",
            get(handlers::logs::get_logs_by_log_string),
        )
        .route(
            "/logs/timestamp",
            get(handlers::logs::get_logs_by_timestamp),
        )
        .route(
            "/logs/metadata/source",
            get(handlers::logs::get_logs_by_metadata_source),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
