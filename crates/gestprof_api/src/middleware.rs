//! Request logging middleware

use axum::{extract::Request, middleware::Next, response::Response};
use log::{info, warn};
use std::time::{Duration, Instant};

const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(100);

/// Logs method, path, status and latency of every request.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let started_at = Instant::now();
    let response = next.run(request).await;
    let elapsed = started_at.elapsed();

    if elapsed > SLOW_REQUEST_THRESHOLD {
        warn!(
            "event=http_request module=api status=slow method={} path={} duration_ms={}",
            method,
            path,
            elapsed.as_millis()
        );
    }

    info!(
        "event=http_request module=api status={} method={} path={} duration_ms={}",
        response.status().as_u16(),
        method,
        path,
        elapsed.as_millis()
    );

    response
}
