//! User service
//!
//! Profile management, discovery and account deletion.

use skillx_common::auth::verify_password;
use skillx_core::entities::{ProfileUpdate, User, UserSearch};
use skillx_core::{DomainError, Id};
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{DeleteAccountRequest, MessageOnlyResponse, SearchQuery, UpdateProfileRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn load(&self, user_id: Id) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(user_id).into())
    }

    /// Get the caller's own profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_id: Id) -> ServiceResult<UserResponse> {
        self.load(user_id).await.map(UserResponse::from)
    }

    /// Replace the caller's profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Id,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        request.validate()?;

        let mut user = self.load(user_id).await?;
        let users = self.ctx.user_repo();

        if users.email_exists(&request.email, Some(user_id)).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }
        if users.username_exists(&request.username, Some(user_id)).await? {
            return Err(DomainError::UsernameTaken.into());
        }

        user.update_profile(ProfileUpdate {
            username: request.username,
            email: request.email,
            bio: request.bio,
            skills_have: request.skills_have,
            skills_want: request.skills_want,
        });
        users.update(&user).await?;

        info!(user_id = %user_id, "Profile updated");

        Ok(UserResponse::from(user))
    }

    /// Get any user's public profile
    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Id) -> ServiceResult<UserResponse> {
        self.load(user_id).await.map(UserResponse::from)
    }

    /// Everyone except the caller and the caller's accepted connections
    #[instrument(skip(self))]
    pub async fn list_discoverable(&self, user_id: Id) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list_discoverable(user_id).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Search other users by skill, username or either
    #[instrument(skip(self))]
    pub async fn search(&self, user_id: Id, query: SearchQuery) -> ServiceResult<Vec<UserResponse>> {
        let search = UserSearch::from_terms(
            query.skill.as_deref(),
            query.username.as_deref(),
            query.q.as_deref(),
        )
        .ok_or_else(|| ServiceError::validation("Search term required (skill, username, or q)"))?;

        let users = self.ctx.user_repo().search(user_id, &search).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Delete the caller's account after re-checking the password
    #[instrument(skip(self, request))]
    pub async fn delete_account(
        &self,
        user_id: Id,
        request: DeleteAccountRequest,
    ) -> ServiceResult<MessageOnlyResponse> {
        let hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let password = request.password.unwrap_or_default();
        if !verify_password(&password, &hash)? {
            warn!(target: "security", user_id = %user_id, "Account deletion refused: invalid password");
            return Err(ServiceError::validation("Invalid password"));
        }

        self.ctx.user_repo().delete(user_id).await?;

        warn!(target: "security", user_id = %user_id, "Account deleted");

        Ok(MessageOnlyResponse::new("Account deleted successfully"))
    }
}
