use axum::response::IntoResponse;

/// Fixed greeting returned by `GET /`. Tests assert the exact text, so any
/// change here must be mirrored there.
pub const GREETING: &str = "App Monitoring using Prometheus and Grafana!";

/// Handler for the `/` endpoint.
///
/// Returns the greeting with status 200, independent of metrics state.
pub async fn root_handler() -> impl IntoResponse {
    GREETING
}
