//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

use validator::ValidationErrors;

pub use requests::{
    ConnectionActionRequest, DeleteAccountRequest, LoginRequest, RefreshRequest, RegisterRequest,
    SearchQuery, SendConnectionRequest, SendMessageRequest, UpdateProfileRequest,
};

pub use responses::{
    AccessTokenResponse, ConnectionResponse, ConversationMessageResponse, ConversationResponse,
    DeleteConversationResponse, HealthChecks, HealthResponse, MarkReadResponse, MessageOnlyResponse,
    MessageResponse, ReadinessResponse, TokenPairResponse, UserResponse,
};

/// Pick a single human-readable message out of a validation failure.
///
/// Fields are visited in name order so the chosen message is deterministic.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(message) => message.to_string(),
                None => format!("{field}: {}", e.code),
            })
        })
        .unwrap_or_else(|| "Invalid request".to_string())
}
