//! HTTP request instrumentation middleware.
//!
//! Wraps every request passing through the router, including ones that fall
//! through to the default not-found handler, and records
//! `http_requests_total` and `http_request_duration_seconds` once the
//! response is produced and the final status code is known.

use crate::app_state::AppState;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Records one counter increment and one histogram observation per
/// completed request, both under the same `{method, route, status}` labels.
///
/// The request itself is never blocked on bookkeeping: recording happens
/// after `next.run()` resolves. If the client aborts the connection before
/// a response exists, this future is dropped and nothing is recorded.
///
/// The `route` label is the literal request path, not a matched route
/// pattern, so every distinct concrete path produces its own label series.
pub(crate) async fn track_requests(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    // ---
    let start = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    // Status and headers are final here.
    let status = response.status().as_u16();
    state
        .metrics()
        .record_http_request(start, &path, &method, status);

    response
}
