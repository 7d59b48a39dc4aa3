//! Async wrapper around the synchronous geocoding client.
//!
//! This module provides an async capability interface over the gateway by
//! running HTTP operations on a dedicated thread pool via
//! `tokio::task::spawn_blocking`, preventing blocking of the async runtime.
//! The concrete provider is injected at startup and is swappable for a test
//! double that returns canned distances.

use crate::client::{AddressSuggestion, GeocodingClient, RouteInfo};
use crate::error::{GeocodingError, GeocodingResult};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Async capability interface for geocoding and routing.
#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Resolve travel distance and duration for an address pair.
    async fn resolve_distance(&self, origin: &str, destination: &str)
        -> GeocodingResult<RouteInfo>;

    /// Ranked address suggestions for a partial query. Never fails; any
    /// internal error yields an empty list.
    async fn search_addresses(&self, query: &str) -> Vec<AddressSuggestion>;

    /// Reverse-geocoded address of the current location.
    async fn current_location_address(&self) -> GeocodingResult<String>;
}

/// Async wrapper around the synchronous [`GeocodingClient`].
///
/// Connection acquisition is lazy and idempotent: the first caller performs
/// the gateway health check, concurrent callers await the same in-flight
/// attempt (they queue on the session lock), and a failed attempt leaves the
/// session unset so the next call retries cleanly.
pub struct AsyncGeocodingClient {
    client: Arc<GeocodingClient>,

    /// True once the gateway handshake has succeeded this session
    session: Mutex<bool>,
}

impl AsyncGeocodingClient {
    pub fn new(client: GeocodingClient) -> Self {
        Self {
            client: Arc::new(client),
            session: Mutex::new(false),
        }
    }

    /// Run the gateway handshake once per session.
    async fn ensure_connected(&self) -> GeocodingResult<()> {
        let mut connected = self.session.lock().await;
        if *connected {
            return Ok(());
        }

        let client = self.client.clone();
        tokio::task::spawn_blocking(move || client.check_health())
            .await
            .map_err(|e| GeocodingError::Transport(format!("Task join error: {}", e)))??;

        *connected = true;
        Ok(())
    }
}

#[async_trait]
impl GeocodingProvider for AsyncGeocodingClient {
    async fn resolve_distance(
        &self,
        origin: &str,
        destination: &str,
    ) -> GeocodingResult<RouteInfo> {
        self.ensure_connected().await?;

        let client = self.client.clone();
        let origin = origin.to_string();
        let destination = destination.to_string();

        tokio::task::spawn_blocking(move || client.resolve_distance(&origin, &destination))
            .await
            .map_err(|e| GeocodingError::Transport(format!("Task join error: {}", e)))?
    }

    async fn search_addresses(&self, query: &str) -> Vec<AddressSuggestion> {
        if self.ensure_connected().await.is_err() {
            // Suggestion search never fails outward
            return Vec::new();
        }

        let client = self.client.clone();
        let query = query.to_string();

        tokio::task::spawn_blocking(move || client.search_addresses(&query))
            .await
            .unwrap_or_default()
    }

    async fn current_location_address(&self) -> GeocodingResult<String> {
        self.ensure_connected().await?;

        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.current_location_address())
            .await
            .map_err(|e| GeocodingError::Transport(format!("Task join error: {}", e)))?
    }
}
