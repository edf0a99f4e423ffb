use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::application::validators::validate_email_domain;

/// A single waitlist signup as stored in the `waitlist` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub email: String,
    pub created_at: NaiveDateTime,
}

/// Insertable shape of [`WaitlistEntry`].
///
/// Mirrors the table minus the generated columns (`id`, `created_at`). Unknown fields
/// in the request body are dropped during deserialization, so a client-supplied `id`
/// never reaches the repository. Keep the rules here in sync with the migration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewWaitlistEntry {
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "validate_email_domain")
    )]
    pub email: String,
}
