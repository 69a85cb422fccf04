//! Message handlers

use axum::{extract::State, Json};
use skillx_service::{
    DeleteConversationResponse, MarkReadResponse, MessageOnlyResponse, MessageResponse,
    MessageService, SendMessageRequest,
};

use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Send a message
///
/// POST /api/send-message/
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<JsonBody<SendMessageRequest>>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let request = body.map(|JsonBody(b)| b).unwrap_or_default();
    let service = MessageService::new(state.service_context());
    let response = service.send(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Delete one of the caller's messages
///
/// DELETE /api/delete-message/{message_id}/
pub async fn delete_message(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(message_id): IdPath,
) -> ApiResult<Json<MessageOnlyResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.delete(auth.user_id, message_id).await?;
    Ok(Json(response))
}

/// Delete the whole conversation with a peer
///
/// DELETE /api/delete-conversation/{user_id}/
pub async fn delete_conversation(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(peer_id): IdPath,
) -> ApiResult<Json<DeleteConversationResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.delete_conversation(auth.user_id, peer_id).await?;
    Ok(Json(response))
}

/// Mark a peer's messages to the caller as read
///
/// POST /api/mark-messages-read/{user_id}/
pub async fn mark_messages_read(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(peer_id): IdPath,
) -> ApiResult<Json<MarkReadResponse>> {
    let service = MessageService::new(state.service_context());
    let response = service.mark_read(auth.user_id, peer_id).await?;
    Ok(Json(response))
}
