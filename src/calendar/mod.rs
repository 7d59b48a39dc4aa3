//! Calendar export: serialize one appointment into an iCalendar document
//! consumable by standard calendar import.

use crate::models::Appointment;
use chrono::{Duration, NaiveDateTime, Utc};

/// Visit length used for the event end time.
const VISIT_MINUTES: i64 = 30;

/// Serialize a single appointment as an iCalendar (RFC 5545) document.
///
/// The event spans 30 minutes from the scheduled time and embeds one alarm
/// triggering 30 minutes before the start.
pub fn appointment_to_ics(appt: &Appointment) -> String {
    let start = NaiveDateTime::new(appt.date, appt.time);
    let end = start + Duration::minutes(VISIT_MINUTES);

    let description = format!(
        "Client: {}\\nCats: {}\\nLock code: {}\\nNotes: {}\\nPrice: {}",
        escape_text(&appt.client_name),
        appt.cat_count,
        escape_text(&appt.lock_code),
        escape_text(&appt.notes),
        appt.total_price
    );

    let lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//catvisit//EN".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", appt.id),
        format!("DTSTAMP:{}", Utc::now().format("%Y%m%dT%H%M%SZ")),
        format!("DTSTART:{}", format_dt(start)),
        format!("DTEND:{}", format_dt(end)),
        format!("SUMMARY:Feeding visit - {}", escape_text(&appt.client_name)),
        format!("DESCRIPTION:{}", description),
        format!("LOCATION:{}", escape_text(&appt.address)),
        "BEGIN:VALARM".to_string(),
        "ACTION:DISPLAY".to_string(),
        "DESCRIPTION:Feeding visit soon".to_string(),
        "TRIGGER:-PT30M".to_string(),
        "END:VALARM".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ];

    // RFC 5545 requires CRLF line endings
    let mut document = lines.join("\r\n");
    document.push_str("\r\n");
    document
}

/// Floating local date-time in basic iCalendar format.
fn format_dt(dt: NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

/// Escape TEXT property values per RFC 5545.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
