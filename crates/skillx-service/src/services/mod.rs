//! Business logic services
//!
//! Each service borrows the shared [`ServiceContext`] and implements one
//! group of use cases.

pub mod auth;
pub mod connection;
pub mod context;
pub mod conversation;
pub mod error;
pub mod message;
pub mod user;

pub use auth::AuthService;
pub use connection::ConnectionService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use conversation::ConversationService;
pub use error::{ServiceError, ServiceResult};
pub use message::MessageService;
pub use user::UserService;
