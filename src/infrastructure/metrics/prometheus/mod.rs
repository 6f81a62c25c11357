mod prometheus_metrics;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

/// Creates a new Prometheus metrics implementation.
///
/// Builds a fresh registry with the custom request metrics, the version
/// gauge, and the process collector. The returned instance is rendered by
/// the `/metrics` endpoint for scraping.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    Ok(Arc::new(PrometheusMetrics::new()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_valid_metrics() {
        let result = create();
        assert!(result.is_ok());
    }
}
