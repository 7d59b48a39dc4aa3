//! The appointment book: the process-wide collection of scheduled visits.

use crate::error::StorageResult;
use crate::models::{Appointment, AppointmentStatus};
use crate::repositories::AppointmentRepository;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-wide owner of all appointment records.
///
/// Every mutation rewrites the full collection through the repository. A
/// persistence failure is logged and swallowed: the in-memory state stays
/// authoritative for the session, at the accepted risk of loss on exit.
///
/// Mutations follow read-modify-write under a single writer lock, which is
/// sufficient for the cooperative single-runtime model; the lock also keeps
/// the book safe if a multi-threaded runtime is ever used.
pub struct AppointmentBook {
    appointments: RwLock<Vec<Appointment>>,
    repo: Arc<dyn AppointmentRepository>,
}

impl AppointmentBook {
    /// Create an empty book backed by the given repository.
    pub fn new(repo: Arc<dyn AppointmentRepository>) -> Self {
        Self {
            appointments: RwLock::new(Vec::new()),
            repo,
        }
    }

    /// Replace the in-memory collection with the persisted record.
    ///
    /// Runs once at startup; records lacking a status field arrive migrated
    /// to pending by the repository's load.
    pub async fn load(&self) -> StorageResult<()> {
        let loaded = self.repo.load().await?;
        tracing::info!(count = loaded.len(), "appointments loaded");
        *self.appointments.write().await = loaded;
        Ok(())
    }

    /// Append a batch of appointments (one per confirmed quote date).
    pub async fn add(&self, batch: Vec<Appointment>) {
        let snapshot = {
            let mut appointments = self.appointments.write().await;
            appointments.extend(batch);
            appointments.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Remove the appointment with the given identifier. No-op when absent.
    pub async fn remove(&self, id: &str) {
        let snapshot = {
            let mut appointments = self.appointments.write().await;
            let before = appointments.len();
            appointments.retain(|a| a.id != id);
            if appointments.len() == before {
                return;
            }
            appointments.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Mark the appointment with the given identifier as completed.
    /// No-op when absent; idempotent when already completed.
    pub async fn complete(&self, id: &str) {
        let snapshot = {
            let mut appointments = self.appointments.write().await;
            match appointments
                .iter_mut()
                .find(|a| a.id == id && a.status == AppointmentStatus::Pending)
            {
                Some(appt) => appt.status = AppointmentStatus::Completed,
                None => return,
            }
            appointments.clone()
        };
        self.persist(&snapshot).await;
    }

    /// Snapshot of the current collection, in stored order.
    pub async fn list(&self) -> Vec<Appointment> {
        self.appointments.read().await.clone()
    }

    /// Full rewrite of the collection. Failures are non-fatal.
    async fn persist(&self, snapshot: &[Appointment]) {
        if let Err(e) = self.repo.save(snapshot).await {
            tracing::warn!("Failed to persist appointments, keeping in-memory state: {}", e);
        }
    }
}
