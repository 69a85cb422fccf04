//! Request DTOs for API endpoints
//!
//! Bodies derive `Deserialize`; those with field constraints also derive
//! `Validate`. Ids that the endpoint treats as required are still `Option`
//! so that a missing id produces the endpoint's own error message instead of
//! a generic deserialization failure.

use serde::Deserialize;
use validator::Validate;

use skillx_core::Id;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    pub password: String,

    pub password_confirm: String,

    pub bio: Option<String>,

    #[validate(length(max = 255, message = "skills_have must be at most 255 characters"))]
    pub skills_have: Option<String>,

    #[validate(length(max = 255, message = "skills_want must be at most 255 characters"))]
    pub skills_want: Option<String>,
}

/// Username/password login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Exchange a refresh token for a new access token
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Full profile update; `username` and `email` are required
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 150, message = "Username must be 1-150 characters"))]
    pub username: String,

    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,

    pub bio: Option<String>,

    #[validate(length(max = 255, message = "skills_have must be at most 255 characters"))]
    pub skills_have: Option<String>,

    #[validate(length(max = 255, message = "skills_want must be at most 255 characters"))]
    pub skills_want: Option<String>,
}

/// Query string of `GET /search/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub skill: Option<String>,
    pub username: Option<String>,
    pub q: Option<String>,
}

/// Body of `DELETE /delete-account/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteAccountRequest {
    pub password: Option<String>,
}

// ============================================================================
// Connection Requests
// ============================================================================

/// Body of `POST /send-request/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendConnectionRequest {
    pub receiver_id: Option<Id>,
}

/// Body of `POST /accept-request/` and `POST /reject-request/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectionActionRequest {
    pub request_id: Option<Id>,
}

// ============================================================================
// Message Requests
// ============================================================================

/// Body of `POST /send-message/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: Option<Id>,
    pub content: Option<String>,
}
