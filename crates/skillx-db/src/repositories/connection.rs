//! PostgreSQL implementation of ConnectionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use skillx_core::entities::ConnectionRequest;
use skillx_core::error::DomainError;
use skillx_core::traits::{ConnectionRepository, RepoResult};
use skillx_core::value_objects::Id;

use crate::models::ConnectionRequestModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConnectionRepository
#[derive(Clone)]
pub struct PgConnectionRepository {
    pool: PgPool,
}

impl PgConnectionRepository {
    /// Create a new PgConnectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn into_entities(models: Vec<ConnectionRequestModel>) -> RepoResult<Vec<ConnectionRequest>> {
    models.into_iter().map(ConnectionRequest::try_from).collect()
}

#[async_trait]
impl ConnectionRepository for PgConnectionRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Id) -> RepoResult<Option<ConnectionRequest>> {
        let result = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM connection_requests
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ConnectionRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending_for_receiver(
        &self,
        id: Id,
        receiver_id: Id,
    ) -> RepoResult<Option<ConnectionRequest>> {
        let result = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM connection_requests
            WHERE id = $1 AND receiver_id = $2 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ConnectionRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn accepted_exists_between(&self, a: Id, b: Id) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM connection_requests
                WHERE status = 'accepted'
                  AND ((sender_id = $1 AND receiver_id = $2)
                    OR (sender_id = $2 AND receiver_id = $1))
            )
            ",
        )
        .bind(a.into_inner())
        .bind(b.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn pending_exists(&self, sender_id: Id, receiver_id: Id) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM connection_requests
                WHERE sender_id = $1 AND receiver_id = $2 AND status = 'pending'
            )
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, sender_id: Id, receiver_id: Id) -> RepoResult<ConnectionRequest> {
        let model = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            INSERT INTO connection_requests (sender_id, receiver_id, status)
            VALUES ($1, $2, 'pending')
            RETURNING id, sender_id, receiver_id, status, created_at
            ",
        )
        .bind(sender_id.into_inner())
        .bind(receiver_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        ConnectionRequest::try_from(model)
    }

    #[instrument(skip(self))]
    async fn mark_accepted(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE connection_requests
            SET status = 'accepted'
            WHERE id = $1 AND status = 'pending'
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ConnectionRequestNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Id) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM connection_requests WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ConnectionNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_accepted_for(&self, user_id: Id) -> RepoResult<Vec<ConnectionRequest>> {
        let results = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM connection_requests
            WHERE status = 'accepted' AND (sender_id = $1 OR receiver_id = $1)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }

    #[instrument(skip(self))]
    async fn find_pending_for(&self, receiver_id: Id) -> RepoResult<Vec<ConnectionRequest>> {
        let results = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, sender_id, receiver_id, status, created_at
            FROM connection_requests
            WHERE status = 'pending' AND receiver_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(receiver_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        into_entities(results)
    }
}
