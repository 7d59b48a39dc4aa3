//! Appointment model representing a committed, persisted, single-date visit.

use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an appointment.
///
/// Deserialization defaults to `Pending` so records persisted before the
/// status field existed migrate when they are loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Scheduled, not yet carried out
    #[default]
    Pending,

    /// Visit has been carried out
    Completed,
}

/// A committed, single-date scheduled feeding visit.
///
/// Appointments are created in batches when a quote is confirmed, one per
/// selected date. They are exclusively owned by the appointment book and
/// mutate only by flipping `status` to completed, or by removal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    /// Unique identifier
    pub id: String,

    /// Name of the client (the cat owner)
    pub client_name: String,

    /// Visit address
    pub address: String,

    /// Calendar date of the visit
    pub date: NaiveDate,

    /// Clock time of the visit
    pub time: NaiveTime,

    /// Number of cats to feed (at least 1)
    pub cat_count: u32,

    /// Travel distance from the base address, in kilometers
    pub distance_km: f64,

    /// Travel duration, in minutes
    pub duration_min: f64,

    /// Price for this single date, computed independently per date
    pub total_price: f64,

    /// Door/key-box code for entry
    #[serde(default)]
    pub lock_code: String,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Whether the date carries the weekend/holiday surcharge
    pub is_holiday: bool,

    /// Lifecycle status; missing in older records, defaults to pending
    #[serde(default)]
    pub status: AppointmentStatus,
}

impl Appointment {
    /// Whether this appointment still awaits its visit.
    pub fn is_pending(&self) -> bool {
        self.status == AppointmentStatus::Pending
    }

    /// Minute-of-day of the scheduled time (0..=1439).
    pub fn scheduled_minute_of_day(&self) -> i64 {
        use chrono::Timelike;
        i64::from(self.time.hour()) * 60 + i64::from(self.time.minute())
    }
}

/// Whether a date counts as a holiday for pricing: any Saturday or Sunday.
/// There is no public-holiday calendar lookup.
pub fn is_holiday(date: NaiveDate) -> bool {
    use chrono::Datelike;
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
