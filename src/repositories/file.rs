//! File-backed repositories storing each record as a JSON document under the
//! configured data directory.

use crate::error::StorageResult;
use crate::models::{Appointment, Settings};
use crate::repositories::traits::{AppointmentRepository, SettingsRepository};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Name of the settings record file.
const SETTINGS_FILE: &str = "settings.json";

/// Name of the appointments record file.
const APPOINTMENTS_FILE: &str = "appointments.json";

/// Read a JSON record file, returning `None` when it does not exist yet.
async fn read_record(path: &Path) -> StorageResult<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Write a JSON record file, creating the data directory on first save.
async fn write_record(path: &Path, contents: &str) -> StorageResult<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await?;
    Ok(())
}

/// Settings repository storing the record at `<data_dir>/settings.json`.
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(SETTINGS_FILE),
        }
    }
}

#[async_trait]
impl SettingsRepository for FileSettingsRepository {
    async fn load(&self) -> StorageResult<Option<Settings>> {
        match read_record(&self.path).await? {
            Some(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, settings: &Settings) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(settings)?;
        write_record(&self.path, &contents).await
    }
}

/// Appointment repository storing the record at `<data_dir>/appointments.json`.
pub struct FileAppointmentRepository {
    path: PathBuf,
}

impl FileAppointmentRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            path: data_dir.into().join(APPOINTMENTS_FILE),
        }
    }
}

#[async_trait]
impl AppointmentRepository for FileAppointmentRepository {
    async fn load(&self) -> StorageResult<Vec<Appointment>> {
        match read_record(&self.path).await? {
            // Status migration happens here, once, through the serde default
            // on the status field
            Some(contents) => Ok(serde_json::from_str(&contents)?),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, appointments: &[Appointment]) -> StorageResult<()> {
        let contents = serde_json::to_string_pretty(appointments)?;
        write_record(&self.path, &contents).await
    }
}
