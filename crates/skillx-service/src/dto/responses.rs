//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids serialize as JSON numbers.

use chrono::{DateTime, Utc};
use serde::Serialize;

use skillx_core::Id;

// ============================================================================
// Common Response Types
// ============================================================================

/// `{ "message": ... }` acknowledgement for mutations without an entity payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageOnlyResponse {
    pub message: String,
}

impl MessageOnlyResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Access and refresh token pair issued at login
#[derive(Debug, Clone, Serialize)]
pub struct TokenPairResponse {
    pub access: String,
    pub refresh: String,
}

/// New access token issued from a refresh token
#[derive(Debug, Clone, Serialize)]
pub struct AccessTokenResponse {
    pub access: String,
}

// ============================================================================
// User Responses
// ============================================================================

/// Public user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: Id,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
}

// ============================================================================
// Connection Responses
// ============================================================================

/// Connection request with both endpoints embedded
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionResponse {
    pub id: Id,
    pub sender: UserResponse,
    pub receiver: UserResponse,
    pub sender_id: Id,
    pub receiver_id: Id,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Message Responses
// ============================================================================

/// Stored message with both endpoints embedded
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Id,
    pub sender: UserResponse,
    pub receiver: UserResponse,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

/// Result of `POST /mark-messages-read/{user_id}/`
#[derive(Debug, Clone, Serialize)]
pub struct MarkReadResponse {
    pub message: String,
    pub messages_updated: u64,
}

impl MarkReadResponse {
    pub fn new(messages_updated: u64) -> Self {
        Self {
            message: format!("Marked {messages_updated} messages as read"),
            messages_updated,
        }
    }
}

/// Result of `DELETE /delete-conversation/{user_id}/`
#[derive(Debug, Clone, Serialize)]
pub struct DeleteConversationResponse {
    pub message: String,
    pub messages_deleted: u64,
}

impl DeleteConversationResponse {
    pub fn new(messages_deleted: u64) -> Self {
        Self {
            message: "Conversation deleted successfully".to_string(),
            messages_deleted,
        }
    }
}

// ============================================================================
// Conversation Responses
// ============================================================================

/// Conversation summary with the peer's profile flattened in
#[derive(Debug, Clone, Serialize)]
pub struct ConversationResponse {
    /// Position in this response, not a stable key
    pub id: u32,
    pub other_user_id: Id,
    pub other_user_username: String,
    pub other_user_email: String,
    pub other_user_skills: Option<String>,
    pub last_message: String,
    pub last_message_timestamp: DateTime<Utc>,
    pub unread_count: u32,
    pub messages: Vec<ConversationMessageResponse>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConversationMessageResponse {
    pub id: Id,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sender_id: Id,
    pub is_from_me: bool,
    pub is_read: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
