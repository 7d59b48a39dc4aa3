//! Shared trait doubles for integration tests.
#![allow(dead_code)]

mod mock_appointment_repository;
mod mock_clipboard;
mod mock_geocoding_provider;
mod mock_settings_repository;

pub use mock_appointment_repository::MockAppointmentRepository;
pub use mock_clipboard::MockClipboard;
pub use mock_geocoding_provider::MockGeocodingProvider;
pub use mock_settings_repository::MockSettingsRepository;
