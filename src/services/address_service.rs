//! Address suggestion service with a TTL cache over the gateway search.

use crate::cache::TimedCache;
use crate::client::{AddressSuggestion, GeocodingProvider};
use crate::error::GeocodingResult;
use std::sync::Arc;

/// Ranked address suggestions for partial queries, cached per normalized
/// query so repeated keystroke lookups reuse the gateway's earlier answer.
pub struct AddressService {
    provider: Arc<dyn GeocodingProvider>,
    cache: TimedCache<String, Vec<AddressSuggestion>>,
    max_suggestions: usize,
}

impl AddressService {
    /// Create a service over the given provider.
    pub fn new(
        provider: Arc<dyn GeocodingProvider>,
        cache_ttl_seconds: u64,
        max_suggestions: usize,
    ) -> Self {
        Self {
            provider,
            cache: TimedCache::new(cache_ttl_seconds),
            max_suggestions,
        }
    }

    /// Ranked suggestions for a partial query. Never fails; blank queries
    /// and provider errors yield an empty list.
    pub async fn suggestions(&self, query: &str) -> Vec<AddressSuggestion> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.get(&normalized) {
            return cached;
        }

        let mut suggestions = self.provider.search_addresses(&normalized).await;
        suggestions.truncate(self.max_suggestions);
        self.cache.insert(normalized, suggestions.clone());
        suggestions
    }

    /// Reverse-geocoded address of the current location, for the
    /// "use my location" prefill.
    pub async fn current_location(&self) -> GeocodingResult<String> {
        self.provider.current_location_address().await
    }
}
