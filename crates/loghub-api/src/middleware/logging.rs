//! Access logging for every HTTP exchange.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Records method, path, query, status, and latency of each request.
///
/// Server errors are logged at `warn` so they stand out from routine
/// traffic; the handler has already logged the underlying cause.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let query = request.uri().query().unwrap_or_default().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, path = %path, query = %query, status, latency_ms, "Request failed");
    } else {
        info!(%method, path = %path, query = %query, status, latency_ms, "Request served");
    }

    response
}
