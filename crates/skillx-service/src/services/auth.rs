//! Authentication service
//!
//! Handles user registration, login, token refresh, and logout.

use skillx_common::auth::{hash_password, validate_password_strength, verify_password};
use skillx_common::AppError;
use skillx_core::entities::NewUser;
use skillx_core::DomainError;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{
    AccessTokenResponse, LoginRequest, MessageOnlyResponse, RefreshRequest, RegisterRequest,
    TokenPairResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<MessageOnlyResponse> {
        request.validate()?;

        if request.password != request.password_confirm {
            return Err(ServiceError::validation("Passwords don't match"));
        }
        validate_password_strength(&request.password, &request.username)?;

        let users = self.ctx.user_repo();
        if users.username_exists(&request.username, None).await? {
            return Err(DomainError::UsernameTaken.into());
        }
        if users.email_exists(&request.email, None).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = hash_password(&request.password)?;

        let new_user = NewUser {
            username: request.username,
            email: request.email,
            bio: request.bio,
            skills_have: request.skills_have,
            skills_want: request.skills_want,
        };
        let user = users.create(&new_user, &password_hash).await?;

        info!(user_id = %user.id, "User registered successfully");

        Ok(MessageOnlyResponse::new("User registered successfully"))
    }

    /// Login with username and password
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<TokenPairResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let tokens = self.ctx.jwt_service().generate_token_pair(user.id)?;

        info!(user_id = %user.id, "User logged in");

        Ok(TokenPairResponse {
            access: tokens.access,
            refresh: tokens.refresh,
        })
    }

    /// Issue a new access token from a refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshRequest) -> ServiceResult<AccessTokenResponse> {
        let access = self
            .ctx
            .jwt_service()
            .refresh_access_token(&request.refresh)?;

        Ok(AccessTokenResponse { access })
    }

    /// Acknowledge a logout. Tokens are stateless, so the client discards them.
    #[instrument(skip(self))]
    pub async fn logout(&self, user_id: skillx_core::Id) -> ServiceResult<MessageOnlyResponse> {
        info!(user_id = %user_id, "User logged out");
        Ok(MessageOnlyResponse::new("Successfully logged out"))
    }
}
