//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait
//! backed by an explicitly constructed `prometheus::Registry`. The registry
//! and every metric handle are owned by this struct and travel with the
//! application state. There is no global recorder and no ambient singleton,
//! so each constructed instance is an independent metrics universe.
//!
//! Besides the custom request counter, duration histogram, and version
//! gauge, the registry carries the library's process collector, which
//! refreshes process-level gauges (resident memory, CPU seconds, open fds)
//! on every gather.

use crate::domain::Metrics;
use anyhow::{Context, Result};
use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry, TextEncoder,
};
use std::time::Instant;

/// Upper bounds of the request duration histogram buckets, in seconds.
/// An implicit `+Inf` bucket is always appended by the library.
const DURATION_BUCKETS: &[f64] = &[0.1, 0.3, 0.5, 1.0, 1.5, 2.0];

/// Prometheus-based metrics implementation.
///
/// Label series are created lazily: a `{method, route, status}` combination
/// first appears in the exposition output after its first observation. The
/// `route` label carries the literal request path, so distinct concrete
/// paths produce distinct series.
pub struct PrometheusMetrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_request_duration: HistogramVec,
}

impl PrometheusMetrics {
    /// Build the registry and register all custom metrics plus the process
    /// collector. The `app_version` gauge is set here, once, and never
    /// updated afterwards.
    ///
    /// # Errors
    /// Returns an error if a metric cannot be constructed or registered.
    /// That can only happen at startup (bad opts or duplicate names), so
    /// failures here are treated as fatal.
    pub fn new() -> Result<Self> {
        // ---
        tracing::info!("Creating Prometheus metrics registry");

        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "Total number of HTTP requests"),
            &["method", "route", "status"],
        )?;
        registry
            .register(Box::new(http_requests.clone()))
            .context("failed to register http_requests_total")?;

        let http_request_duration = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Duration of HTTP requests in seconds",
            )
            .buckets(DURATION_BUCKETS.to_vec()),
            &["method", "route", "status"],
        )?;
        registry
            .register(Box::new(http_request_duration.clone()))
            .context("failed to register http_request_duration_seconds")?;

        // Set once; the registered clone keeps the gauge alive.
        let app_version = IntGauge::new("app_version", "Application version")?;
        registry
            .register(Box::new(app_version.clone()))
            .context("failed to register app_version")?;
        app_version.set(1); // version 1.0.0

        // Default process metrics, collected by the library on each gather.
        #[cfg(target_os = "linux")]
        registry
            .register(Box::new(
                prometheus::process_collector::ProcessCollector::for_self(),
            ))
            .context("failed to register process collector")?;

        Ok(PrometheusMetrics {
            registry,
            http_requests,
            http_request_duration,
        })
    }
}

impl Metrics for PrometheusMetrics {
    // ---
    fn render(&self) -> String {
        // ---
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();

        if let Err(err) = encoder.encode(&self.registry.gather(), &mut buffer) {
            tracing::error!("Failed to encode metrics: {err}");
            return String::new();
        }

        String::from_utf8(buffer).unwrap_or_default()
    }

    fn record_http_request(&self, start: Instant, path: &str, method: &str, status: u16) {
        // ---
        tracing::debug!("Recording HTTP request: {method} {path} -> {status}");

        let elapsed = start.elapsed().as_secs_f64();
        let status = status.to_string();
        let labels = [method, path, status.as_str()];

        // Counter and histogram always move together under the same labels.
        self.http_requests.with_label_values(&labels).inc();
        self.http_request_duration
            .with_label_values(&labels)
            .observe(elapsed);
    }
}
