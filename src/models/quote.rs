//! Quote model: an ephemeral price estimate for one or more visit dates.
//!
//! Quotes are never persisted. They live only within a single quoting session
//! and are discarded on confirmation or navigation away.

use chrono::NaiveDate;
use serde::Serialize;

/// The independently computed price for one requested date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DateCharge {
    /// The visit date
    pub date: NaiveDate,

    /// Whether this date carried the weekend/holiday surcharge
    pub is_holiday: bool,

    /// Price for this single date
    pub price: f64,
}

/// A multi-date price estimate, not yet committed to the schedule.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Quote {
    /// Travel distance from the base address, in kilometers (one lookup per quote)
    pub distance_km: f64,

    /// Travel duration, in minutes
    pub duration_min: f64,

    /// Sum of all per-date prices
    pub total_price: f64,

    /// Per-date breakdown, in selection order
    pub per_date: Vec<DateCharge>,

    /// Human-readable breakdown lines
    pub breakdown: Vec<String>,
}

impl Quote {
    /// The breakdown rendered as a single copyable block of text.
    pub fn breakdown_text(&self) -> String {
        self.breakdown.join("\n")
    }

    /// Number of holiday days in the quote.
    pub fn holiday_day_count(&self) -> usize {
        self.per_date.iter().filter(|c| c.is_holiday).count()
    }
}
