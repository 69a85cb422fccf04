//! # skillx-core
//!
//! Domain layer containing entities, value objects, repository traits and the
//! conversation aggregator. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod conversation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use conversation::{aggregate, Conversation, ConversationMessage};
pub use entities::{
    check_send, validate_content, ConnectionRequest, ConnectionStatus, Message, NewMessage,
    NewUser, ProfileUpdate, User, UserSearch, MAX_MESSAGE_LENGTH,
};
pub use error::DomainError;
pub use traits::{ConnectionRepository, MessageRepository, RepoResult, UserRepository};
pub use value_objects::{Id, IdParseError};
