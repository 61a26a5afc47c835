//! Prometheus metrics for the survey service.
//!
//! - `http_requests_total{method,path,status}` - requests handled per route
//! - `http_request_duration_seconds{method,path}` - request latency histogram
//! - `survey_answers_saved_total` - answer rows written
//! - `survey_store_errors_total` - submissions that failed in the store

use std::time::Duration;

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts, Registry, TextEncoder,
};

use crate::error::SurveyError;

/// Owns its own registry so several routers (e.g. in tests) never collide.
pub struct Metrics {
    registry: Registry,
    http_requests: IntCounterVec,
    http_latency: HistogramVec,
    answers_saved: IntCounter,
    store_errors: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, SurveyError> {
        let registry = Registry::new();

        let http_requests = IntCounterVec::new(
            Opts::new("http_requests_total", "HTTP requests handled by route"),
            &["method", "path", "status"],
        )?;
        let http_latency = HistogramVec::new(
            HistogramOpts::new("http_request_duration_seconds", "HTTP request latency by route")
                .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["method", "path"],
        )?;
        let answers_saved =
            IntCounter::new("survey_answers_saved_total", "Answer rows written to the store")?;
        let store_errors = IntCounter::new(
            "survey_store_errors_total",
            "Submissions that failed while writing to the store",
        )?;

        registry.register(Box::new(http_requests.clone()))?;
        registry.register(Box::new(http_latency.clone()))?;
        registry.register(Box::new(answers_saved.clone()))?;
        registry.register(Box::new(store_errors.clone()))?;

        Ok(Self {
            registry,
            http_requests,
            http_latency,
            answers_saved,
            store_errors,
        })
    }

    pub fn observe_request(&self, method: &str, path: &str, status: u16, elapsed: Duration) {
        let status = status.to_string();
        self.http_requests
            .with_label_values(&[method, path, status.as_str()])
            .inc();
        self.http_latency
            .with_label_values(&[method, path])
            .observe(elapsed.as_secs_f64());
    }

    pub fn record_saved(&self, count: usize) {
        self.answers_saved.inc_by(count as u64);
    }

    pub fn record_store_error(&self) {
        self.store_errors.inc();
    }

    /// Gather all metrics and encode them in Prometheus text format.
    pub fn gather(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = vec![];
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            tracing::error!(error = %e, "Failed to encode Prometheus metrics");
            return String::new();
        }
        match String::from_utf8(buffer) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!(error = %e, "Prometheus metrics were not valid UTF-8");
                String::new()
            }
        }
    }
}
