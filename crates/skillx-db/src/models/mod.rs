//! Database models - SQLx-compatible structs for PostgreSQL tables

mod connection;
mod message;
mod user;

pub use connection::ConnectionRequestModel;
pub use message::MessageModel;
pub use user::UserModel;
