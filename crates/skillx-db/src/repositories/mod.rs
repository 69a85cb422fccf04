//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in skillx-core.

mod connection;
mod error;
mod message;
mod user;

pub use connection::PgConnectionRepository;
pub use message::PgMessageRepository;
pub use user::PgUserRepository;
