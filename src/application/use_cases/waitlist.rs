use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::{
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::waitlist_entry::WaitlistEntry,
};

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Stores a new signup. The repository assigns `id` and `created_at`.
    async fn insert(&self, email: &str) -> AppResult<WaitlistEntry>;
    async fn list_all(&self) -> AppResult<Vec<WaitlistEntry>>;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn join(&self, email: &str) -> AppResult<WaitlistEntry> {
        if !is_valid_email(email) {
            return Err(AppError::InvalidInput("Invalid email format".into()));
        }

        let entry = self.repo.insert(email).await?;
        info!(entry_id = %entry.id, "Added waitlist entry");
        Ok(entry)
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list_all().await
    }
}
