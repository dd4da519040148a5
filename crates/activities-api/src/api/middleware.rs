//! Request logging middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{debug, warn};

/// Log each request with its method, path, status, and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let latency_ms = start.elapsed().as_millis();

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, path, %status, latency_ms, "Request rejected");
    } else {
        debug!(%method, path, %status, latency_ms, "Request completed");
    }

    response
}
