//! Connection handlers
//!
//! Sending, answering and removing connection requests.

use axum::{extract::State, Json};
use skillx_service::{
    ConnectionActionRequest, ConnectionResponse, ConnectionService, MessageOnlyResponse,
    SendConnectionRequest,
};

use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a connection request
///
/// POST /api/send-request/
pub async fn send_request(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<JsonBody<SendConnectionRequest>>,
) -> ApiResult<Created<Json<MessageOnlyResponse>>> {
    let request = body.map(|JsonBody(b)| b).unwrap_or_default();
    let service = ConnectionService::new(state.service_context());
    let response = service.send(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Pending requests addressed to the caller
///
/// GET /api/pending-requests/
pub async fn pending_requests(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.pending_requests(auth.user_id).await?;
    Ok(Json(response))
}

/// Accepted connections of the caller
///
/// GET /api/my-connections/
pub async fn my_connections(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConnectionResponse>>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.my_connections(auth.user_id).await?;
    Ok(Json(response))
}

/// Accept a pending request
///
/// POST /api/accept-request/
pub async fn accept_request(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<JsonBody<ConnectionActionRequest>>,
) -> ApiResult<Json<MessageOnlyResponse>> {
    let request = body.map(|JsonBody(b)| b).unwrap_or_default();
    let service = ConnectionService::new(state.service_context());
    let response = service.accept(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Reject a pending request
///
/// POST /api/reject-request/
pub async fn reject_request(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<JsonBody<ConnectionActionRequest>>,
) -> ApiResult<Json<MessageOnlyResponse>> {
    let request = body.map(|JsonBody(b)| b).unwrap_or_default();
    let service = ConnectionService::new(state.service_context());
    let response = service.reject(auth.user_id, request).await?;
    Ok(Json(response))
}

/// Remove a connection or withdraw a request
///
/// DELETE /api/connections/{id}/
pub async fn remove_connection(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(connection_id): IdPath,
) -> ApiResult<Json<MessageOnlyResponse>> {
    let service = ConnectionService::new(state.service_context());
    let response = service.remove(auth.user_id, connection_id).await?;
    Ok(Json(response))
}
