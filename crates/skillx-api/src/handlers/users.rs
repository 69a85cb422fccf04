//! User handlers
//!
//! Own profile, user discovery and account deletion.

use axum::{
    extract::{Query, State},
    Json,
};
use skillx_service::{
    DeleteAccountRequest, MessageOnlyResponse, SearchQuery, UpdateProfileRequest, UserResponse,
    UserService,
};

use crate::extractors::{AuthUser, IdPath, JsonBody};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get own profile
///
/// GET /api/profile/
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Update own profile
///
/// PUT /api/profile/
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}

/// List users the caller is not yet connected to
///
/// GET /api/users/
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.list_discoverable(auth.user_id).await?;
    Ok(Json(response))
}

/// Search users by skill, username or either
///
/// GET /api/search/?skill=&username=&q=
pub async fn search_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let response = service.search(auth.user_id, query).await?;
    Ok(Json(response))
}

/// Get a user by id
///
/// GET /api/users/{user_id}/
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.get_user(user_id).await?;
    Ok(Json(response))
}

/// Delete own account after password re-verification
///
/// DELETE /api/delete-account/
pub async fn delete_account(
    State(state): State<AppState>,
    auth: AuthUser,
    body: Option<JsonBody<DeleteAccountRequest>>,
) -> ApiResult<Json<MessageOnlyResponse>> {
    let request = body.map(|JsonBody(b)| b).unwrap_or_default();
    let service = UserService::new(state.service_context());
    let response = service.delete_account(auth.user_id, request).await?;
    Ok(Json(response))
}
