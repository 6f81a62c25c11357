// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{middleware::from_fn_with_state, routing::get, Router};

use handlers::metrics_handler;
use handlers::root_handler;
use middleware::track_requests;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod middleware;

pub use config::*;

// Publicly expose the greeting so tests can assert the exact text
pub use handlers::GREETING;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_noop_metrics, // ---
    create_prom_metrics,
};

/// Build the HTTP router with its Prometheus metrics backend.
///
/// The registry lives inside the backend, which is threaded through
/// [`AppState`]; each call to this function therefore produces a fully
/// independent server, registry included.
///
/// The instrumentation layer is attached to the finished router so it also
/// wraps requests that fall through to the default not-found handler.
pub fn create_router() -> Result<Router> {
    // ---
    let metrics = create_prom_metrics()?;

    // Build application state with all dependencies
    let app_state = AppState::new(metrics);

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/metrics", get(metrics_handler))
        .layer(from_fn_with_state(app_state.clone(), track_requests))
        .with_state(app_state);

    Ok(router)
}
