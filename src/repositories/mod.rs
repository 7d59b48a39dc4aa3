//! Persistence collaborators for settings and appointments.
//!
//! Each record is read once at startup and rewritten in full after every
//! mutation; expected collection sizes are small (hundreds, not millions).

mod file;
mod traits;

pub use file::{FileAppointmentRepository, FileSettingsRepository};
pub use traits::{AppointmentRepository, SettingsRepository};
