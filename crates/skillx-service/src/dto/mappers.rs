//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Entities that embed other records are paired with them first.

use skillx_core::entities::{ConnectionRequest, Message, User};
use skillx_core::{Conversation, ConversationMessage};

use super::responses::{
    ConnectionResponse, ConversationMessageResponse, ConversationResponse, MessageResponse,
    UserResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            bio: user.bio.clone(),
            skills_have: user.skills_have.clone(),
            skills_want: user.skills_want.clone(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            bio: user.bio,
            skills_have: user.skills_have,
            skills_want: user.skills_want,
        }
    }
}

// ============================================================================
// Connection Mappers
// ============================================================================

/// A connection request together with its resolved endpoints
pub struct ConnectionWithUsers<'a> {
    pub request: &'a ConnectionRequest,
    pub sender: &'a User,
    pub receiver: &'a User,
}

impl From<ConnectionWithUsers<'_>> for ConnectionResponse {
    fn from(c: ConnectionWithUsers<'_>) -> Self {
        Self {
            id: c.request.id,
            sender: UserResponse::from(c.sender),
            receiver: UserResponse::from(c.receiver),
            sender_id: c.request.sender_id,
            receiver_id: c.request.receiver_id,
            status: c.request.status.as_str(),
            created_at: c.request.created_at,
        }
    }
}

// ============================================================================
// Message Mappers
// ============================================================================

/// A message together with its resolved endpoints
pub struct MessageWithUsers<'a> {
    pub message: Message,
    pub sender: &'a User,
    pub receiver: &'a User,
}

impl From<MessageWithUsers<'_>> for MessageResponse {
    fn from(m: MessageWithUsers<'_>) -> Self {
        Self {
            id: m.message.id,
            sender: UserResponse::from(m.sender),
            receiver: UserResponse::from(m.receiver),
            content: m.message.content,
            timestamp: m.message.timestamp,
            is_read: m.message.is_read,
        }
    }
}

// ============================================================================
// Conversation Mappers
// ============================================================================

impl From<ConversationMessage> for ConversationMessageResponse {
    fn from(m: ConversationMessage) -> Self {
        Self {
            id: m.id,
            content: m.content,
            timestamp: m.timestamp,
            sender_id: m.sender_id,
            is_from_me: m.is_from_me,
            is_read: m.is_read,
        }
    }
}

/// A conversation together with the peer's profile
pub struct ConversationWithPeer<'a> {
    pub conversation: Conversation,
    pub peer: &'a User,
}

impl From<ConversationWithPeer<'_>> for ConversationResponse {
    fn from(c: ConversationWithPeer<'_>) -> Self {
        let conversation = c.conversation;
        Self {
            id: conversation.id,
            other_user_id: c.peer.id,
            other_user_username: c.peer.username.clone(),
            other_user_email: c.peer.email.clone(),
            other_user_skills: c.peer.skills_have.clone(),
            last_message: conversation.last_message,
            last_message_timestamp: conversation.last_message_timestamp,
            unread_count: conversation.unread_count,
            messages: conversation
                .messages
                .into_iter()
                .map(ConversationMessageResponse::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillx_core::{ConnectionStatus, Id};

    fn user(id: i64, name: &str) -> User {
        User::new(Id::new(id), name.to_string(), format!("{name}@example.com"))
    }

    #[test]
    fn test_connection_mapping_embeds_users() {
        let alice = user(1, "alice");
        let bob = user(2, "bob");
        let mut request = ConnectionRequest::new(Id::new(10), alice.id, bob.id);
        request.status = ConnectionStatus::Accepted;

        let response = ConnectionResponse::from(ConnectionWithUsers {
            request: &request,
            sender: &alice,
            receiver: &bob,
        });

        assert_eq!(response.status, "accepted");
        assert_eq!(response.sender.username, "alice");
        assert_eq!(response.receiver_id, bob.id);
    }

    #[test]
    fn test_conversation_mapping_uses_peer_profile() {
        let mut peer = user(2, "bob");
        peer.skills_have = Some("Piano".to_string());
        let me = Id::new(1);

        let messages = vec![Message::new(Id::new(1), peer.id, me, "hi".to_string())];
        let conversation = skillx_core::aggregate(me, messages).remove(0);

        let response = ConversationResponse::from(ConversationWithPeer {
            conversation,
            peer: &peer,
        });

        assert_eq!(response.id, 1);
        assert_eq!(response.other_user_username, "bob");
        assert_eq!(response.other_user_skills.as_deref(), Some("Piano"));
        assert_eq!(response.unread_count, 1);
        assert!(!response.messages[0].is_from_me);
    }
}
