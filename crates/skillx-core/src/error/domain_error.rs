//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found")]
    UserNotFound(Id),

    #[error("Request not found or already processed")]
    ConnectionRequestNotFound(Id),

    #[error("Connection not found")]
    ConnectionNotFound(Id),

    #[error("Message not found or you don't have permission to delete it")]
    MessageNotFound(Id),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("{0}")]
    ValidationError(String),

    #[error("Cannot send to yourself")]
    SelfConnectionRequest,

    #[error("Cannot send message to yourself")]
    SelfMessage,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Permission denied")]
    NotConnectionParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already connected with this user")]
    AlreadyConnected,

    #[error("Request already sent")]
    DuplicateRequest,

    #[error("This email is already in use.")]
    EmailAlreadyExists,

    #[error("This username is already taken.")]
    UsernameTaken,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ConnectionRequestNotFound(_) => "UNKNOWN_REQUEST",
            Self::ConnectionNotFound(_) => "UNKNOWN_CONNECTION",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::SelfConnectionRequest => "SELF_REQUEST",
            Self::SelfMessage => "SELF_MESSAGE",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotConnectionParticipant => "FORBIDDEN",

            // Conflict
            Self::AlreadyConnected => "ALREADY_CONNECTED",
            Self::DuplicateRequest => "DUPLICATE_REQUEST",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::UsernameTaken => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ConnectionRequestNotFound(_)
                | Self::ConnectionNotFound(_)
                | Self::MessageNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::SelfConnectionRequest
                | Self::SelfMessage
                | Self::WeakPassword(_)
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotConnectionParticipant)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyConnected
                | Self::DuplicateRequest
                | Self::EmailAlreadyExists
                | Self::UsernameTaken
        )
    }
}
