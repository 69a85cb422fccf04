//! Connection request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for connection_requests table
#[derive(Debug, Clone, FromRow)]
pub struct ConnectionRequestModel {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    /// 'pending' or 'accepted' (enforced by a CHECK constraint)
    pub status: String,
    pub created_at: DateTime<Utc>,
}
