//! In-memory mock implementations for the waitlist repository trait.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::waitlist::WaitlistRepo,
    domain::entities::waitlist_entry::WaitlistEntry,
};

/// In-memory implementation of WaitlistRepo for testing.
///
/// Keeps insertion order and, like the Postgres table, does not enforce unique emails.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    inserts: AtomicUsize,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repo with initial entries for testing.
    pub fn with_entries(entries: Vec<WaitlistEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
            inserts: AtomicUsize::new(0),
        }
    }

    /// Get all entries (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of times `insert` was called. Seeded entries are not counted.
    pub fn insert_calls(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            email: email.to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        Ok(self.get_all())
    }
}

/// Repo whose every call fails the way a lost database connection would.
#[derive(Default)]
pub struct FailingWaitlistRepo;

#[async_trait]
impl WaitlistRepo for FailingWaitlistRepo {
    async fn insert(&self, _email: &str) -> AppResult<WaitlistEntry> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }

    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>> {
        Err(AppError::from(sqlx::Error::PoolTimedOut))
    }
}
