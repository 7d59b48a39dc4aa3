//! Data structures for settings, appointments, quotes and client history.

pub mod appointment;
pub mod client_entry;
pub mod quote;
pub mod settings;

pub use appointment::{is_holiday, Appointment, AppointmentStatus};
pub use client_entry::ClientEntry;
pub use quote::{DateCharge, Quote};
pub use settings::{PricingTier, Settings};
