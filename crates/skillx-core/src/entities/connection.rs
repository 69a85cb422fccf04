//! Connection request entity - a directed edge between two users
//!
//! A request starts `Pending` and becomes `Accepted` once the receiver
//! approves it. Rejection and removal delete the row, so there is no
//! terminal "rejected" state.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;
use crate::value_objects::Id;

/// Status of a connection request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConnectionStatus {
    #[default]
    Pending,
    Accepted,
}

impl ConnectionStatus {
    /// Database/API representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConnectionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            other => Err(DomainError::InternalError(format!(
                "unknown connection status: {other}"
            ))),
        }
    }
}

/// Connection request entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionRequest {
    pub id: Id,
    pub sender_id: Id,
    pub receiver_id: Id,
    pub status: ConnectionStatus,
    pub created_at: DateTime<Utc>,
}

impl ConnectionRequest {
    /// Create a new pending request
    pub fn new(id: Id, sender_id: Id, receiver_id: Id) -> Self {
        Self {
            id,
            sender_id,
            receiver_id,
            status: ConnectionStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status == ConnectionStatus::Pending
    }

    #[inline]
    pub fn is_accepted(&self) -> bool {
        self.status == ConnectionStatus::Accepted
    }

    /// Check if the user is either endpoint of this edge
    #[inline]
    pub fn involves(&self, user_id: Id) -> bool {
        self.sender_id == user_id || self.receiver_id == user_id
    }

    /// Check if this edge links the two users, in either direction
    pub fn connects(&self, a: Id, b: Id) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }

    /// The other endpoint, if `user_id` is part of the edge
    pub fn peer_of(&self, user_id: Id) -> Option<Id> {
        if self.sender_id == user_id {
            Some(self.receiver_id)
        } else if self.receiver_id == user_id {
            Some(self.sender_id)
        } else {
            None
        }
    }

    /// Check if `user_id` may accept or reject this request
    pub fn awaits(&self, user_id: Id) -> bool {
        self.is_pending() && self.receiver_id == user_id
    }

    /// Transition pending -> accepted. Only the receiver may accept.
    pub fn accept(&mut self, receiver_id: Id) -> Result<(), DomainError> {
        if !self.awaits(receiver_id) {
            return Err(DomainError::ConnectionRequestNotFound(self.id));
        }
        self.status = ConnectionStatus::Accepted;
        Ok(())
    }
}

/// Check the send rules for a new request.
///
/// `accepted_between` reports an accepted edge in either direction;
/// `pending_forward` reports a pending edge from sender to receiver. A pending
/// edge in the reverse direction is deliberately not checked.
pub fn check_send(
    sender_id: Id,
    receiver_id: Id,
    accepted_between: bool,
    pending_forward: bool,
) -> Result<(), DomainError> {
    if sender_id == receiver_id {
        return Err(DomainError::SelfConnectionRequest);
    }
    if accepted_between {
        return Err(DomainError::AlreadyConnected);
    }
    if pending_forward {
        return Err(DomainError::DuplicateRequest);
    }
    Ok(())
}
