//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillx_core::entities::{NewUser, User, UserSearch};
use skillx_core::error::DomainError;
use skillx_core::traits::{RepoResult, UserRepository};
use skillx_core::value_objects::Id;

use crate::mappers::UserUpdate;
use crate::models::UserModel;

use super::error::{contains_pattern, map_db_error, map_unique_violation};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, skills_have, skills_want, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[Id]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, skills_have, skills_want, created_at, updated_at
            FROM users
            WHERE id = ANY($1)
            ",
        )
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, skills_have, skills_want, created_at, updated_at
            FROM users
            WHERE username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn username_exists(&self, username: &str, exclude: Option<Id>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE username = $1 AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(username)
        .bind(exclude.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str, exclude: Option<Id>) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM users
                WHERE LOWER(email) = LOWER($1) AND ($2::BIGINT IS NULL OR id <> $2)
            )
            ",
        )
        .bind(email)
        .bind(exclude.map(Id::into_inner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash), fields(username = %user.username))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let model = sqlx::query_as::<_, UserModel>(
            r"
            INSERT INTO users (username, email, password_hash, bio, skills_have, skills_want)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, username, email, bio, skills_have, skills_want, created_at, updated_at
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(&user.bio)
        .bind(&user.skills_have)
        .bind(&user.skills_want)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        Ok(User::from(model))
    }

    #[instrument(skip(self), fields(user_id = %user.id))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let update = UserUpdate::new(user);

        let result = sqlx::query(
            r"
            UPDATE users
            SET username = $2, email = $3, bio = $4, skills_have = $5, skills_want = $6,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(update.id)
        .bind(update.username)
        .bind(update.email)
        .bind(update.bio)
        .bind(update.skills_have)
        .bind(update.skills_want)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UsernameTaken))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Id) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT password_hash FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn list_discoverable(&self, user_id: Id) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.id, u.username, u.email, u.bio, u.skills_have, u.skills_want,
                   u.created_at, u.updated_at
            FROM users u
            WHERE u.id <> $1
              AND NOT EXISTS (
                  SELECT 1 FROM connection_requests c
                  WHERE c.status = 'accepted'
                    AND ((c.sender_id = $1 AND c.receiver_id = u.id)
                      OR (c.sender_id = u.id AND c.receiver_id = $1))
              )
            ORDER BY u.id
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, exclude: Id, search: &UserSearch) -> RepoResult<Vec<User>> {
        // $2 toggles the skills_have match, $3 the username match
        let (by_skill, by_username) = match search {
            UserSearch::Skill(_) => (true, false),
            UserSearch::Username(_) => (false, true),
            UserSearch::Any(_) => (true, true),
        };

        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, username, email, bio, skills_have, skills_want, created_at, updated_at
            FROM users
            WHERE id <> $1
              AND (($2 AND skills_have ILIKE $4) OR ($3 AND username ILIKE $4))
            ORDER BY id
            ",
        )
        .bind(exclude.into_inner())
        .bind(by_skill)
        .bind(by_username)
        .bind(contains_pattern(search.term()))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(User::from).collect())
    }
}
