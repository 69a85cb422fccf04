//! Conversation handlers

use axum::{extract::State, Json};
use skillx_service::{ConversationResponse, ConversationService};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// List the caller's conversations, most recent first
///
/// GET /api/conversations/
pub async fn list_conversations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ConversationResponse>>> {
    let service = ConversationService::new(state.service_context());
    let response = service.list(auth.user_id).await?;
    Ok(Json(response))
}
