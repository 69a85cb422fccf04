//! Groups a user's flat message history into per-peer conversations

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::entities::Message;
use crate::value_objects::Id;

/// One message as seen from the requesting user's side
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationMessage {
    pub id: Id,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub sender_id: Id,
    pub is_from_me: bool,
    pub is_read: bool,
}

/// Derived conversation between the requesting user and one peer.
///
/// `id` is a position-in-response counter starting at 1, assigned in order of
/// first encounter. It is not stable across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    pub id: u32,
    pub peer_id: Id,
    pub last_message: String,
    pub last_message_timestamp: DateTime<Utc>,
    pub unread_count: u32,
    /// Chronological, oldest first
    pub messages: Vec<ConversationMessage>,
}

impl Conversation {
    fn open(id: u32, peer_id: Id, first: &Message) -> Self {
        Self {
            id,
            peer_id,
            last_message: first.content.clone(),
            last_message_timestamp: first.timestamp,
            unread_count: 0,
            messages: Vec::new(),
        }
    }

    fn push(&mut self, user_id: Id, message: Message) {
        // Input is sorted by (timestamp, id); on equal timestamps the first
        // message seen stays the last message.
        if message.timestamp > self.last_message_timestamp {
            self.last_message.clone_from(&message.content);
            self.last_message_timestamp = message.timestamp;
        }
        if message.is_unread_for(user_id) {
            self.unread_count += 1;
        }
        self.messages.push(ConversationMessage {
            id: message.id,
            is_from_me: message.sender_id == user_id,
            sender_id: message.sender_id,
            timestamp: message.timestamp,
            is_read: message.is_read,
            content: message.content,
        });
    }
}

/// Build the conversation list for `user_id`.
///
/// `messages` may arrive in any order and may contain messages the user is not
/// part of; those are ignored. The result is ordered by
/// `last_message_timestamp`, most recent first.
pub fn aggregate(user_id: Id, mut messages: Vec<Message>) -> Vec<Conversation> {
    messages.retain(|m| m.involves(user_id));
    messages.sort_by(|a, b| a.timestamp.cmp(&b.timestamp).then(a.id.cmp(&b.id)));

    let mut conversations: Vec<Conversation> = Vec::new();
    let mut by_peer: HashMap<Id, usize> = HashMap::new();

    for message in messages {
        let peer_id = message.peer_of(user_id);
        let index = *by_peer.entry(peer_id).or_insert_with(|| {
            let id = conversations.len() as u32 + 1;
            conversations.push(Conversation::open(id, peer_id, &message));
            conversations.len() - 1
        });
        conversations[index].push(user_id, message);
    }

    // stable: ties keep first-encounter order
    conversations.sort_by(|a, b| b.last_message_timestamp.cmp(&a.last_message_timestamp));
    conversations
}
