use async_trait::async_trait;
use catvisit::error::StorageResult;
use catvisit::models::Appointment;
use catvisit::repositories::AppointmentRepository;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory appointment record, counting saves.
pub struct MockAppointmentRepository {
    stored: Mutex<Vec<Appointment>>,
    saves: AtomicUsize,
}

impl Default for MockAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAppointmentRepository {
    pub fn new() -> Self {
        Self {
            stored: Mutex::new(Vec::new()),
            saves: AtomicUsize::new(0),
        }
    }

    /// Seed the record with pre-existing appointments.
    pub fn seeded(appointments: Vec<Appointment>) -> Self {
        Self {
            stored: Mutex::new(appointments),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Appointment> {
        self.stored.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppointmentRepository for MockAppointmentRepository {
    async fn load(&self) -> StorageResult<Vec<Appointment>> {
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn save(&self, appointments: &[Appointment]) -> StorageResult<()> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        *self.stored.lock().unwrap() = appointments.to_vec();
        Ok(())
    }
}
