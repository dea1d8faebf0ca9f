use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted user row. `id` and `created_at` are store-assigned and immutable.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for create and update.
///
/// Fields are optional so an absent field surfaces as a 400 validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
}
