//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::helpers::{assert_json, assert_status, TestServer};

/// Password accepted by the strength rules
pub const TEST_PASSWORD: &str = "Tr1cky-Lantern";

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data.
///
/// Mixes in the start time so reruns against the same database don't collide.
pub fn unique_suffix() -> String {
    let started = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{started}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("user{suffix}"),
            email: format!("user{suffix}@example.com"),
            password: TEST_PASSWORD.to_string(),
            password_confirm: TEST_PASSWORD.to_string(),
            bio: None,
            skills_have: None,
            skills_want: None,
        }
    }

    pub fn with_skills(mut self, have: &str, want: &str) -> Self {
        self.skills_have = Some(have.to_string());
        self.skills_want = Some(want.to_string());
        self
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.username.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Token pair returned by login
#[derive(Debug, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// `{"message": ...}` body
#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub skills_have: Option<String>,
    pub skills_want: Option<String>,
}

/// Connection request with both endpoints embedded
#[derive(Debug, Deserialize)]
pub struct ConnectionResponse {
    pub id: i64,
    pub sender: UserResponse,
    pub receiver: UserResponse,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub status: String,
    pub created_at: String,
}

/// Sent message
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: i64,
    pub sender: UserResponse,
    pub receiver: UserResponse,
    pub content: String,
    pub timestamp: String,
    pub is_read: bool,
}

/// One conversation summary
#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub id: u32,
    pub other_user_id: i64,
    pub other_user_username: String,
    pub last_message: String,
    pub unread_count: u64,
    pub messages: Vec<Value>,
}

/// A registered user with a live access token
#[derive(Debug)]
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub access: String,
    pub refresh: String,
}

impl TestUser {
    /// Register, log in and load the profile
    pub async fn create(server: &TestServer, request: RegisterRequest) -> anyhow::Result<Self> {
        let response = server.post("/api/register/", &request).await?;
        assert_status(response, reqwest::StatusCode::CREATED).await?;

        let response = server
            .post("/api/login/", &LoginRequest::from_register(&request))
            .await?;
        let tokens: TokenPair = assert_json(response, reqwest::StatusCode::OK).await?;

        let response = server.get_auth("/api/profile/", &tokens.access).await?;
        let profile: UserResponse = assert_json(response, reqwest::StatusCode::OK).await?;

        Ok(Self {
            id: profile.id,
            username: request.username,
            password: request.password,
            access: tokens.access,
            refresh: tokens.refresh,
        })
    }

    /// Register a fresh user with no skills
    pub async fn unique(server: &TestServer) -> anyhow::Result<Self> {
        Self::create(server, RegisterRequest::unique()).await
    }
}
