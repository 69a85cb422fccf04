//! Connection service
//!
//! Drives the connection request lifecycle: send, accept, reject, remove and
//! the two listings.

use std::collections::HashMap;

use skillx_core::entities::{check_send, ConnectionRequest, User};
use skillx_core::{DomainError, Id};
use tracing::{info, instrument, warn};

use crate::dto::mappers::ConnectionWithUsers;
use crate::dto::{ConnectionActionRequest, ConnectionResponse, MessageOnlyResponse, SendConnectionRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Connection service
pub struct ConnectionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConnectionService<'a> {
    /// Create a new ConnectionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a connection request to another user
    #[instrument(skip(self, request))]
    pub async fn send(
        &self,
        user_id: Id,
        request: SendConnectionRequest,
    ) -> ServiceResult<MessageOnlyResponse> {
        let receiver_id = request
            .receiver_id
            .ok_or_else(|| ServiceError::validation("receiver_id is required"))?;

        let connections = self.ctx.connection_repo();

        self.ctx
            .user_repo()
            .find_by_id(receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(receiver_id))?;

        let accepted = connections.accepted_exists_between(user_id, receiver_id).await?;
        let pending = connections.pending_exists(user_id, receiver_id).await?;
        check_send(user_id, receiver_id, accepted, pending)?;

        let created = connections.create(user_id, receiver_id).await?;

        info!(request_id = %created.id, receiver_id = %receiver_id, "Connection request sent");

        Ok(MessageOnlyResponse::new("Request sent"))
    }

    /// Find a pending request addressed to `user_id`
    async fn pending_for(&self, user_id: Id, request_id: Option<Id>) -> ServiceResult<ConnectionRequest> {
        // a missing id reads the same as an unknown one
        let request_id = request_id.ok_or(DomainError::ConnectionRequestNotFound(Id::default()))?;

        self.ctx
            .connection_repo()
            .find_pending_for_receiver(request_id, user_id)
            .await?
            .ok_or_else(|| DomainError::ConnectionRequestNotFound(request_id).into())
    }

    /// Accept a pending request addressed to the caller
    #[instrument(skip(self, request))]
    pub async fn accept(
        &self,
        user_id: Id,
        request: ConnectionActionRequest,
    ) -> ServiceResult<MessageOnlyResponse> {
        let mut pending = self.pending_for(user_id, request.request_id).await?;
        pending.accept(user_id)?;

        self.ctx.connection_repo().mark_accepted(pending.id).await?;

        info!(request_id = %pending.id, sender_id = %pending.sender_id, "Connection accepted");

        Ok(MessageOnlyResponse::new("Connection accepted"))
    }

    /// Reject a pending request addressed to the caller; the request is deleted
    #[instrument(skip(self, request))]
    pub async fn reject(
        &self,
        user_id: Id,
        request: ConnectionActionRequest,
    ) -> ServiceResult<MessageOnlyResponse> {
        let pending = self.pending_for(user_id, request.request_id).await?;

        self.ctx.connection_repo().delete(pending.id).await?;

        info!(request_id = %pending.id, sender_id = %pending.sender_id, "Connection request rejected");

        Ok(MessageOnlyResponse::new("Connection request rejected"))
    }

    /// Remove a connection request of any status. Either endpoint may do this.
    #[instrument(skip(self))]
    pub async fn remove(&self, user_id: Id, connection_id: Id) -> ServiceResult<MessageOnlyResponse> {
        let connection = self
            .ctx
            .connection_repo()
            .find_by_id(connection_id)
            .await?
            .ok_or(DomainError::ConnectionNotFound(connection_id))?;

        if !connection.involves(user_id) {
            warn!(target: "security", user_id = %user_id, connection_id = %connection_id, "Connection removal denied");
            return Err(DomainError::NotConnectionParticipant.into());
        }

        self.ctx.connection_repo().delete(connection_id).await?;

        info!(connection_id = %connection_id, "Connection removed");

        Ok(MessageOnlyResponse::new("Connection removed successfully"))
    }

    /// Accepted connections where the caller is either endpoint
    #[instrument(skip(self))]
    pub async fn my_connections(&self, user_id: Id) -> ServiceResult<Vec<ConnectionResponse>> {
        let accepted = self.ctx.connection_repo().find_accepted_for(user_id).await?;

        info!(target: "security", user_id = %user_id, count = accepted.len(), "DATA_ACCESS connections");

        self.with_users(accepted).await
    }

    /// Pending requests addressed to the caller
    #[instrument(skip(self))]
    pub async fn pending_requests(&self, user_id: Id) -> ServiceResult<Vec<ConnectionResponse>> {
        let pending = self.ctx.connection_repo().find_pending_for(user_id).await?;

        info!(target: "security", user_id = %user_id, count = pending.len(), "DATA_ACCESS pending_requests");

        self.with_users(pending).await
    }

    /// Resolve both endpoints of every request in one lookup
    async fn with_users(&self, requests: Vec<ConnectionRequest>) -> ServiceResult<Vec<ConnectionResponse>> {
        let mut ids: Vec<Id> = requests
            .iter()
            .flat_map(|r| [r.sender_id, r.receiver_id])
            .collect();
        ids.sort_unstable();
        ids.dedup();

        let users: HashMap<Id, User> = self
            .ctx
            .user_repo()
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        Ok(requests
            .iter()
            .filter_map(|request| {
                let sender = users.get(&request.sender_id)?;
                let receiver = users.get(&request.receiver_id)?;
                Some(ConnectionResponse::from(ConnectionWithUsers {
                    request,
                    sender,
                    receiver,
                }))
            })
            .collect())
    }
}
