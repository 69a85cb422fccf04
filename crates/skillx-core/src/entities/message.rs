//! Message entity - a direct message between two users

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Id;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 5000;

/// Message entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Id,
    pub sender_id: Id,
    pub receiver_id: Id,
    pub content: String,
    /// Assigned at creation, never changed
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
}

impl Message {
    /// Create a new unread Message
    pub fn new(id: Id, sender_id: Id, receiver_id: Id, content: String) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            content,
            timestamp: Utc::now(),
            is_read: false,
        }
    }

    /// Check if the user is sender or receiver
    #[inline]
    pub fn involves(&self, user_id: Id) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// The counterpart of `user_id` in this message
    pub fn peer_of(&self, user_id: Id) -> Id {
        if self.sender_id == user_id {
            self.receiver_id
        } else {
            self.sender_id
        }
    }

    /// Unread and addressed to `user_id`
    #[inline]
    pub fn is_unread_for(&self, user_id: Id) -> bool {
        self.receiver_id == user_id && !self.is_read
    }

    /// Mark as read. Only the receiver flips the flag, and only false -> true.
    pub fn mark_read_by(&mut self, user_id: Id) -> bool {
        if self.is_unread_for(user_id) {
            self.is_read = true;
            true
        } else {
            false
        }
    }
}

/// Data required to create a message; id and timestamp come from the datastore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub sender_id: Id,
    pub receiver_id: Id,
    pub content: String,
}

impl NewMessage {
    /// Build a message after checking the sender/receiver pair and content
    pub fn new(sender_id: Id, receiver_id: Id, content: String) -> Result<Self, DomainError> {
        if sender_id == receiver_id {
            return Err(DomainError::SelfMessage);
        }
        validate_content(&content)?;
        Ok(Self {
            sender_id,
            receiver_id,
            content,
        })
    }
}

/// Content must be non-empty and at most [`MAX_MESSAGE_LENGTH`] characters
pub fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.is_empty() {
        return Err(DomainError::ValidationError(
            "receiver_id and content are required".to_string(),
        ));
    }
    if content.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(DomainError::ContentTooLong {
            max: MAX_MESSAGE_LENGTH,
        });
    }
    Ok(())
}
