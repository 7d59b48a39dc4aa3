//! Reminder scheduler: a recurring tick that scans today's pending
//! appointments and fires alerts at fixed offsets before the visit.

use crate::models::Appointment;
use crate::notify::Notifier;
use crate::services::appointment_service::AppointmentBook;
use chrono::{Local, NaiveDateTime, Timelike};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Which threshold an alert crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReminderAlert {
    /// Exactly 30 minutes ahead of the visit
    ThirtyMinutes,

    /// The visit time is now
    Now,
}

/// Recurring background check over the appointment book.
///
/// Alerts are edge-triggered: a tick landing on 29 or 31 minutes due to
/// scheduling jitter misses the 30-minute threshold, and no catch-up is
/// attempted. Each `(appointment, threshold)` pair fires at most once per
/// run; the fired set lives in memory only, so a process restart can repeat
/// an alert.
pub struct ReminderScheduler {
    book: Arc<AppointmentBook>,
    notifier: Arc<dyn Notifier>,
    tick: Duration,

    /// Edges already delivered this run. Ticks shorter than a minute land
    /// several scans inside the same minute; this keeps them to one alert.
    fired: Mutex<HashSet<(String, ReminderAlert)>>,
}

impl ReminderScheduler {
    /// Create a scheduler over the given book, delivering through `notifier`.
    pub fn new(book: Arc<AppointmentBook>, notifier: Arc<dyn Notifier>, tick: Duration) -> Self {
        Self {
            book,
            notifier,
            tick,
            fired: Mutex::new(HashSet::new()),
        }
    }

    /// Spawn the recurring tick loop. The loop exits when `shutdown` flips
    /// to true.
    pub fn spawn(self: Arc<Self>, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.tick);
            // A burst of catch-up ticks after a stall would all land on the
            // same minute; skip them instead
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        self.tick_at(Local::now().naive_local()).await;
                    }
                    changed = shutdown.changed() => {
                        if changed.is_err() || *shutdown.borrow() {
                            tracing::info!("reminder scheduler shutting down");
                            break;
                        }
                    }
                }
            }
        })
    }

    /// Run one scan against the given wall-clock instant.
    ///
    /// Split out from the loop so the edge-trigger behavior is testable
    /// without waiting on real time.
    pub async fn tick_at(&self, now: NaiveDateTime) {
        let today = now.date();
        let now_minute = i64::from(now.time().hour()) * 60 + i64::from(now.time().minute());

        for appt in self.book.list().await {
            if !appt.is_pending() || appt.date != today {
                continue;
            }

            let minutes_until = appt.scheduled_minute_of_day() - now_minute;
            match minutes_until {
                30 => self.deliver(&appt, ReminderAlert::ThirtyMinutes).await,
                0 => self.deliver(&appt, ReminderAlert::Now).await,
                _ => {}
            }
        }
    }

    /// Fire-and-forget delivery; no retry. Repeat crossings of an already
    /// delivered edge are dropped here.
    async fn deliver(&self, appt: &Appointment, alert: ReminderAlert) {
        let first_crossing = self
            .fired
            .lock()
            .map(|mut fired| fired.insert((appt.id.clone(), alert)))
            .unwrap_or(true);
        if !first_crossing {
            return;
        }

        let (title, body) = match alert {
            ReminderAlert::ThirtyMinutes => (
                "Feeding visit in 30 minutes".to_string(),
                format!("{} at {} ({})", appt.client_name, appt.time, appt.address),
            ),
            ReminderAlert::Now => (
                "Feeding visit now".to_string(),
                format!("{} at {}", appt.client_name, appt.address),
            ),
        };

        if let Err(e) = self.notifier.notify(&title, &body).await {
            tracing::warn!("reminder delivery failed: {}", e);
        }
    }
}
