//! Axum extractors for request handling
//!
//! Custom extractors for authentication, path ids and JSON bodies.

mod auth;
mod body;
mod path;

pub use auth::{bearer_user_id, AuthUser};
pub use body::JsonBody;
pub use path::IdPath;
