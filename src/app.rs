//! Top-level application controller.
//!
//! Owns the settings and the appointment book explicitly (no ambient module
//! state), with load-at-start and persist-on-mutation hooks. Subcomponents
//! receive what they need by reference or shared handle.

use crate::client::GeocodingProvider;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::{ClipboardResult, QuoteResult, StorageResult};
use crate::models::{Appointment, ClientEntry, Quote, Settings};
use crate::repositories::{AppointmentRepository, SettingsRepository};
use crate::services::{AddressService, AppointmentBook, ConfirmDetails, HistoryService, QuoteBuilder};
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state and the operations the presentation layer drives.
pub struct App {
    settings: RwLock<Settings>,
    settings_repo: Arc<dyn SettingsRepository>,
    book: Arc<AppointmentBook>,
    quotes: QuoteBuilder,
    history: HistoryService,
    addresses: AddressService,
}

impl App {
    /// Wire the controller and load persisted state.
    ///
    /// Settings fall back to defaults on first run; a corrupt or unreadable
    /// record is an error so it is never silently overwritten.
    pub async fn load(
        config: &Config,
        provider: Arc<dyn GeocodingProvider>,
        settings_repo: Arc<dyn SettingsRepository>,
        appointment_repo: Arc<dyn AppointmentRepository>,
    ) -> StorageResult<Self> {
        let settings = settings_repo.load().await?.unwrap_or_default();

        let book = Arc::new(AppointmentBook::new(appointment_repo));
        book.load().await?;

        Ok(Self {
            settings: RwLock::new(settings),
            settings_repo,
            quotes: QuoteBuilder::new(provider.clone()),
            history: HistoryService::new(book.clone()),
            addresses: AddressService::new(
                provider,
                config.suggestion_cache_ttl_minutes * 60,
                config.max_suggestions,
            ),
            book,
        })
    }

    /// Snapshot of the current settings.
    pub async fn settings(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Replace the settings and persist them.
    ///
    /// A failed write is logged and swallowed; the in-memory settings stay
    /// authoritative for the session.
    pub async fn save_settings(&self, settings: Settings) {
        if let Err(e) = self.settings_repo.save(&settings).await {
            tracing::warn!("Failed to persist settings, keeping in-memory state: {}", e);
        }
        *self.settings.write().await = settings;
    }

    /// Build a quote for the given destination and dates.
    pub async fn build_quote(
        &self,
        destination: &str,
        dates: &[NaiveDate],
        cat_count: u32,
    ) -> QuoteResult<Quote> {
        let settings = self.settings().await;
        self.quotes
            .build_quote(destination, dates, cat_count, &settings)
            .await
    }

    /// Confirm a quote: materialize one pending appointment per date and
    /// hand the batch to the book. Returns the created appointments.
    pub async fn confirm_quote(&self, quote: &Quote, details: &ConfirmDetails) -> Vec<Appointment> {
        let batch = QuoteBuilder::confirm_quote(quote, details);
        tracing::info!(
            count = batch.len(),
            client = %details.client_name,
            "quote confirmed"
        );
        self.book.add(batch.clone()).await;
        batch
    }

    /// The appointment book.
    pub fn book(&self) -> &Arc<AppointmentBook> {
        &self.book
    }

    /// Deduplicated client history for prefill.
    pub async fn unique_clients(&self) -> Vec<ClientEntry> {
        self.history.unique_clients().await
    }

    /// Fuzzy-ranked prefill candidates for a partially typed client name.
    pub async fn prefill_candidates(&self, query: &str, max_results: usize) -> Vec<ClientEntry> {
        self.history.prefill_candidates(query, max_results).await
    }

    /// The address suggestion service.
    pub fn addresses(&self) -> &AddressService {
        &self.addresses
    }

    /// Copy a quote's breakdown text to the clipboard.
    pub fn copy_breakdown(&self, quote: &Quote, clipboard: &mut dyn Clipboard) -> ClipboardResult<()> {
        clipboard.set_text(&quote.breakdown_text())
    }
}
