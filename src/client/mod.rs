//! HTTP client for the geocoder gateway.
//!
//! This module provides a synchronous HTTP client that is used from async
//! contexts via `tokio::task::spawn_blocking`. The gateway resolves travel
//! distances between two address strings, ranks address suggestions for a
//! partial query, and reverse-geocodes the current location.

mod async_wrapper;
pub use async_wrapper::{AsyncGeocodingClient, GeocodingProvider};

use crate::config::Config;
use crate::error::{GeocodingError, GeocodingResult};
use crate::metrics::Metrics;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Travel distance and duration for an address pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteInfo {
    /// Distance in kilometers
    pub distance_km: f64,

    /// Duration in minutes
    pub duration_min: f64,
}

/// One ranked address suggestion for a partial query.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AddressSuggestion {
    /// Display name (place or street label)
    pub name: String,

    /// Full address string
    pub address: String,
}

/// Route lookup response from the gateway.
#[derive(Debug, Deserialize)]
struct RouteResponse {
    /// "ok" or "no_route"
    status: String,

    #[serde(default)]
    distance_km: f64,

    #[serde(default)]
    duration_min: f64,
}

/// Address search response from the gateway.
#[derive(Debug, Deserialize)]
struct SearchResponse {
    suggestions: Vec<AddressSuggestion>,
}

/// Reverse geocoding response from the gateway.
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: String,
}

/// Synchronous HTTP client for the geocoder gateway.
///
/// The agent carries the hard request timeout from the configuration; a
/// lookup that exceeds it fails with [`GeocodingError::Timeout`], distinct
/// from the not-found failures.
#[derive(Clone)]
pub struct GeocodingClient {
    /// Base URL of the gateway
    base_url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl GeocodingClient {
    /// Create a new client from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.geocoder_base_url.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(20))
            .build();

        Self {
            base_url,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request and record metrics.
    fn get(&self, path: &str) -> GeocodingResult<ureq::Response> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self.agent.get(&url).call().map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if let Err(e) = &result {
            if matches!(e, GeocodingError::Timeout) {
                self.metrics.record_timeout();
            }
            self.metrics.record_error();
        }
        self.metrics.record_request(duration);

        result
    }

    /// Map a ureq error to a GeocodingError.
    fn map_error(&self, error: ureq::Error) -> GeocodingError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    403 => GeocodingError::PermissionDenied,
                    404 => GeocodingError::AddressNotFound(message),
                    _ => GeocodingError::Transport(format!("status {}: {}", code, message)),
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    GeocodingError::Transport("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    GeocodingError::Timeout
                } else {
                    GeocodingError::Transport(transport.to_string())
                }
            }
        }
    }

    /// Probe the gateway. Used by the lazy connection step before the first
    /// real lookup of a session.
    pub fn check_health(&self) -> GeocodingResult<()> {
        self.get("/v1/status").map(|_| ())
    }

    /// Resolve travel distance and duration between two address strings.
    ///
    /// This is the single most expensive and failure-prone call of a quote.
    pub fn resolve_distance(&self, origin: &str, destination: &str) -> GeocodingResult<RouteInfo> {
        let path = format!(
            "/v1/route?origin={}&destination={}",
            urlencoding::encode(origin),
            urlencoding::encode(destination)
        );
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| GeocodingError::Transport(e.to_string()))?;

        let route: RouteResponse = serde_json::from_str(&body)?;
        if route.status != "ok" {
            return Err(GeocodingError::RouteNotFound);
        }

        self.metrics.record_route_resolved();
        Ok(RouteInfo {
            distance_km: route.distance_km,
            duration_min: route.duration_min,
        })
    }

    /// Search ranked address suggestions for a partial query.
    ///
    /// Never fails: any internal error yields an empty list.
    pub fn search_addresses(&self, query: &str) -> Vec<AddressSuggestion> {
        let path = format!("/v1/search?q={}", urlencoding::encode(query));

        let result = self.get(&path).and_then(|response| {
            let body = response
                .into_string()
                .map_err(|e| GeocodingError::Transport(e.to_string()))?;
            let parsed: SearchResponse = serde_json::from_str(&body)?;
            Ok(parsed.suggestions)
        });

        match result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                tracing::warn!("Address search failed, returning no suggestions: {}", e);
                Vec::new()
            }
        }
    }

    /// Reverse-geocode the current location into an address string.
    ///
    /// Fails with [`GeocodingError::PermissionDenied`] when location access
    /// is refused or unavailable.
    pub fn current_location_address(&self) -> GeocodingResult<String> {
        let response = self.get("/v1/reverse")?;
        let body = response
            .into_string()
            .map_err(|e| GeocodingError::Transport(e.to_string()))?;

        let parsed: ReverseResponse = serde_json::from_str(&body)?;
        Ok(parsed.address)
    }
}
