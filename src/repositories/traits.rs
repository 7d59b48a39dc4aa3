use crate::error::StorageResult;
use crate::models::{Appointment, Settings};
use async_trait::async_trait;

/// Durable store for the singleton settings record.
///
/// Abstraction over the key-value collaborator, enabling different
/// implementations (file-backed, in-memory test double).
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Read the persisted settings. `None` on first run.
    async fn load(&self) -> StorageResult<Option<Settings>>;

    /// Serialize and write the full settings record.
    async fn save(&self, settings: &Settings) -> StorageResult<()>;
}

/// Durable store for the appointment list record.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Read the persisted appointment list. Empty on first run. Records
    /// lacking a status field come back migrated to pending.
    async fn load(&self) -> StorageResult<Vec<Appointment>>;

    /// Serialize and write the full appointment list.
    async fn save(&self, appointments: &[Appointment]) -> StorageResult<()>;
}
