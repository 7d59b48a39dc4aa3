//! Business logic: pricing, quoting, the appointment book, reminders,
//! client history and address suggestions.

pub mod address_service;
pub mod appointment_service;
pub mod history_service;
pub mod pricing;
pub mod quote_service;
pub mod reminder_service;

pub use address_service::AddressService;
pub use appointment_service::AppointmentBook;
pub use history_service::{unique_clients, HistoryService};
pub use pricing::visit_price;
pub use quote_service::{ConfirmDetails, QuoteBuilder};
pub use reminder_service::{ReminderAlert, ReminderScheduler};
