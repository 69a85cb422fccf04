//! Security audit logging
//!
//! Emits `target: "security"` events for every request, plus a data access
//! event when a caller successfully reads one of their private listings.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::extractors::bearer_user_id;
use crate::state::AppState;

/// Paths whose responses contain only the caller's own data
const SENSITIVE_PATHS: &[&str] = &[
    "/api/conversations/",
    "/api/my-connections/",
    "/api/pending-requests/",
    "/api/profile/",
];

/// Log API access and sensitive data reads
pub async fn security_audit(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let user_id = bearer_user_id(request.headers(), state.jwt_service());
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client_ip = client_ip(request.headers(), remote);
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    info!(
        target: "security",
        event = "api_access",
        method = %method,
        path = %path,
        user_id = ?user_id,
        client_ip = client_ip.as_deref().unwrap_or("unknown"),
        user_agent = %user_agent,
        "API_ACCESS"
    );

    let response = next.run(request).await;

    if let Some(user_id) = user_id {
        if response.status().is_success() && is_sensitive_path(&path) {
            info!(
                target: "security",
                event = "data_access",
                user_id = %user_id,
                path = %path,
                status = response.status().as_u16(),
                "DATA_ACCESS"
            );
        }
    }

    response
}

/// First hop of `X-Forwarded-For`, else the socket peer address
pub fn client_ip(headers: &HeaderMap, remote: Option<SocketAddr>) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .map(str::to_owned)
        .or_else(|| remote.map(|addr| addr.ip().to_string()))
}

pub fn is_sensitive_path(path: &str) -> bool {
    SENSITIVE_PATHS.iter().any(|p| path.starts_with(p))
}
