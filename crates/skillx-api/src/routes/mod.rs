//! Route definitions
//!
//! All API routes are mounted under `/api` with trailing slashes.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, connections, conversations, health, messages, users};
use crate::state::AppState;

/// Create the API router (health routes are kept apart so they skip rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(connection_routes())
        .merge(message_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(auth::register))
        .route("/login/", post(auth::login))
        .route("/refresh/", post(auth::refresh))
        .route("/logout/", post(auth::logout))
}

/// Profile, discovery and account routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/", get(users::get_profile).put(users::update_profile))
        .route("/users/", get(users::list_users))
        .route("/users/:user_id/", get(users::get_user))
        .route("/search/", get(users::search_users))
        .route("/delete-account/", delete(users::delete_account))
}

/// Connection request routes
fn connection_routes() -> Router<AppState> {
    Router::new()
        .route("/send-request/", post(connections::send_request))
        .route("/pending-requests/", get(connections::pending_requests))
        .route("/my-connections/", get(connections::my_connections))
        .route("/accept-request/", post(connections::accept_request))
        .route("/reject-request/", post(connections::reject_request))
        .route("/connections/:connection_id/", delete(connections::remove_connection))
}

/// Messaging and conversation routes
fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/conversations/", get(conversations::list_conversations))
        .route("/send-message/", post(messages::send_message))
        .route("/delete-message/:message_id/", delete(messages::delete_message))
        .route("/delete-conversation/:user_id/", delete(messages::delete_conversation))
        .route("/mark-messages-read/:user_id/", post(messages::mark_messages_read))
}
