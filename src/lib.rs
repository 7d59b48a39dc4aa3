//! Catvisit - pricing, scheduling and reminder engine for a home
//! cat-sitting/feeding service.
//!
//! The engine quotes a price for a visit based on travel distance, date
//! (weekend/holiday surcharge) and cat count, then tracks scheduled and
//! completed visits and fires reminders against wall-clock time.
//!
//! # Architecture
//!
//! - **models**: Settings, appointments, quotes and client history entries
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the geocoder gateway (distance, suggestions)
//! - **repositories**: Durable settings and appointment records
//! - **services**: Pricing, quote building, the appointment book, reminders,
//!   client history and address suggestions
//! - **notify**: Alert delivery with a system path and in-app fallback
//! - **calendar**: iCalendar export of single appointments
//! - **matching**: Fuzzy client-name matching for quote prefill
//! - **cache**: TTL cache backing address suggestions

pub mod app;
pub mod cache;
pub mod calendar;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod notify;
pub mod repositories;
pub mod services;

pub use app::App;
pub use cache::TimedCache;
pub use client::{AddressSuggestion, AsyncGeocodingClient, GeocodingClient, GeocodingProvider, RouteInfo};
pub use config::Config;
pub use error::{
    ClipboardError, ConfigError, GeocodingError, NotifyError, QuoteError, StorageError,
};
pub use matching::{ClientMatch, ClientMatcher};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{Appointment, AppointmentStatus, ClientEntry, DateCharge, PricingTier, Quote, Settings};
pub use services::{
    AddressService, AppointmentBook, ConfirmDetails, HistoryService, QuoteBuilder,
    ReminderScheduler,
};
