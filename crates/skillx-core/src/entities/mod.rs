//! Domain entities - core business objects

mod connection;
mod message;
mod user;

pub use connection::{check_send, ConnectionRequest, ConnectionStatus};
pub use message::{validate_content, Message, NewMessage, MAX_MESSAGE_LENGTH};
pub use user::{NewUser, ProfileUpdate, User, UserSearch};
