//! Basic metrics instrumentation for the geocoder client.
//!
//! Provides counters and duration tracking for gateway requests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for gateway traffic.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of gateway requests made
    requests_total: Arc<AtomicU64>,

    /// Total number of failed requests
    errors_total: Arc<AtomicU64>,

    /// Number of requests that hit the hard timeout
    timeouts_total: Arc<AtomicU64>,

    /// Number of successful route resolutions
    routes_resolved_total: Arc<AtomicU64>,

    /// Total duration of all requests in milliseconds
    duration_total_ms: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            requests_total: Arc::new(AtomicU64::new(0)),
            errors_total: Arc::new(AtomicU64::new(0)),
            timeouts_total: Arc::new(AtomicU64::new(0)),
            routes_resolved_total: Arc::new(AtomicU64::new(0)),
            duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a gateway request with its duration.
    pub fn record_request(&self, duration: Duration) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record a failed request.
    pub fn record_error(&self) {
        self.errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request that hit the hard timeout.
    pub fn record_timeout(&self) {
        self.timeouts_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful route resolution.
    pub fn record_route_resolved(&self) {
        self.routes_resolved_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot of all counters.
    pub fn summary(&self) -> MetricsSummary {
        let requests = self.requests_total.load(Ordering::Relaxed);
        let duration_ms = self.duration_total_ms.load(Ordering::Relaxed);

        MetricsSummary {
            requests_total: requests,
            errors_total: self.errors_total.load(Ordering::Relaxed),
            timeouts_total: self.timeouts_total.load(Ordering::Relaxed),
            routes_resolved_total: self.routes_resolved_total.load(Ordering::Relaxed),
            avg_duration_ms: if requests > 0 {
                duration_ms as f64 / requests as f64
            } else {
                0.0
            },
        }
    }
}

/// Point-in-time snapshot of the metrics counters.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsSummary {
    pub requests_total: u64,
    pub errors_total: u64,
    pub timeouts_total: u64,
    pub routes_resolved_total: u64,
    pub avg_duration_ms: f64,
}
