use async_trait::async_trait;
use catvisit::client::{AddressSuggestion, GeocodingProvider, RouteInfo};
use catvisit::error::{GeocodingError, GeocodingResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Geocoding double returning canned distances and suggestions while
/// counting lookups.
pub struct MockGeocodingProvider {
    route: Option<RouteInfo>,
    suggestions: Vec<AddressSuggestion>,
    pub route_lookups: AtomicUsize,
}

impl MockGeocodingProvider {
    /// A provider that resolves every pair to the given route.
    pub fn with_route(distance_km: f64, duration_min: f64) -> Self {
        Self {
            route: Some(RouteInfo {
                distance_km,
                duration_min,
            }),
            suggestions: Vec::new(),
            route_lookups: AtomicUsize::new(0),
        }
    }

    /// A provider whose route lookups always fail with no-route.
    pub fn without_route() -> Self {
        Self {
            route: None,
            suggestions: Vec::new(),
            route_lookups: AtomicUsize::new(0),
        }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<AddressSuggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

#[async_trait]
impl GeocodingProvider for MockGeocodingProvider {
    async fn resolve_distance(&self, _: &str, _: &str) -> GeocodingResult<RouteInfo> {
        self.route_lookups.fetch_add(1, Ordering::SeqCst);
        self.route.ok_or(GeocodingError::RouteNotFound)
    }

    async fn search_addresses(&self, _: &str) -> Vec<AddressSuggestion> {
        self.suggestions.clone()
    }

    async fn current_location_address(&self) -> GeocodingResult<String> {
        Ok("Mill Road 5".to_string())
    }
}
