//! Model to entity mappers
//!
//! Conversions from database rows (models) into domain entities (skillx-core).

mod connection;
mod message;
mod user;

pub use user::UserUpdate;
