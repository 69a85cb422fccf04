//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table. `password_hash` is selected separately.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
