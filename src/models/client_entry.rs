//! Client history entry derived from the appointment book.

use chrono::NaiveDate;
use serde::Serialize;

/// A previously served client, used to prefill new quotes.
///
/// `last_date` carries the date of the first occurrence encountered in the
/// stored appointment order, which is not necessarily the most recent visit.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClientEntry {
    /// Client name as entered on the quote
    pub name: String,

    /// Visit address
    pub address: String,

    /// Date of the first occurrence in stored order
    pub last_date: NaiveDate,
}
