//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` holds the
//! metrics backend, which is the only application-wide dependency this
//! service has.
//!
//! The state is designed to be cheaply cloneable (the metrics backend is
//! behind an `Arc`) so it can be passed efficiently to each request handler
//! without copying the registry.

use crate::domain::MetricsPtr;

/// Shared application state passed to all Axum handlers.
///
/// # Lifecycle
///
/// 1. Created once in `create_router()` during application startup
/// 2. Attached to the Axum router via `.with_state(app_state)`
/// 3. Cloned automatically by Axum for each incoming HTTP request
/// 4. Handlers and middleware extract via `State(state): State<AppState>`
///
/// The metrics registry lives inside the backend held here, so its
/// lifetime is the process lifetime; there is no teardown.
#[derive(Clone)]
pub(crate) struct AppState {
    /// Metrics implementation for recording request traffic.
    ///
    /// Prometheus-backed in the real router, no-op in unit tests.
    /// Wrapped in `Arc` via `MetricsPtr` for cheap cloning.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(metrics: MetricsPtr) -> Self {
        // ---
        AppState { metrics }
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}
