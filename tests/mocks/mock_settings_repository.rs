use async_trait::async_trait;
use catvisit::error::StorageResult;
use catvisit::models::Settings;
use catvisit::repositories::SettingsRepository;
use std::sync::Mutex;

/// In-memory settings record.
pub struct MockSettingsRepository {
    stored: Mutex<Option<Settings>>,
}

impl Default for MockSettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSettingsRepository {
    /// An empty record, as on first run.
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(None),
        }
    }

    pub fn seeded(settings: Settings) -> Self {
        Self {
            stored: Mutex::new(Some(settings)),
        }
    }

    pub fn stored(&self) -> Option<Settings> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepository {
    async fn load(&self) -> StorageResult<Option<Settings>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> StorageResult<()> {
        *self.stored.lock().unwrap() = Some(settings.clone());
        Ok(())
    }
}
