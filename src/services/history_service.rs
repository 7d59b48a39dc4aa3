//! Client history index derived from the appointment book.

use crate::matching::ClientMatcher;
use crate::models::{Appointment, ClientEntry};
use crate::services::appointment_service::AppointmentBook;
use std::collections::HashSet;
use std::sync::Arc;

/// Deduplicated list of previously served clients, in stored order.
///
/// Deduplication key is the exact `(name, address)` string pair. The first
/// occurrence encountered wins for `last_date`; the underlying list is not
/// sorted chronologically, so "last" really means "first stored".
pub fn unique_clients(appointments: &[Appointment]) -> Vec<ClientEntry> {
    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut clients = Vec::new();

    for appt in appointments {
        let key = (appt.client_name.clone(), appt.address.clone());
        if seen.insert(key) {
            clients.push(ClientEntry {
                name: appt.client_name.clone(),
                address: appt.address.clone(),
                last_date: appt.date,
            });
        }
    }

    clients
}

/// Derives client history fresh from the current book snapshot on each call;
/// nothing is cached.
pub struct HistoryService {
    book: Arc<AppointmentBook>,
    matcher: ClientMatcher,
}

impl HistoryService {
    /// Create a history service over the given book.
    pub fn new(book: Arc<AppointmentBook>) -> Self {
        Self {
            book,
            matcher: ClientMatcher::new(),
        }
    }

    /// Deduplicated client list from the current snapshot.
    pub async fn unique_clients(&self) -> Vec<ClientEntry> {
        unique_clients(&self.book.list().await)
    }

    /// Fuzzy-ranked prefill candidates for a partially typed client name.
    pub async fn prefill_candidates(&self, query: &str, max_results: usize) -> Vec<ClientEntry> {
        let clients = self.unique_clients().await;
        self.matcher
            .find_matches(query, &clients, max_results)
            .into_iter()
            .map(|m| m.client)
            .collect()
    }
}
