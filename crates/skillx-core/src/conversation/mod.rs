//! Conversation view - derived on read, never persisted

mod aggregator;

pub use aggregator::{aggregate, Conversation, ConversationMessage};
