//! Message service
//!
//! Direct messages between users. Messages are immutable once sent apart
//! from the read flag.

use skillx_core::entities::NewMessage;
use skillx_core::{DomainError, Id};
use tracing::{info, instrument};

use crate::dto::mappers::MessageWithUsers;
use crate::dto::{
    DeleteConversationResponse, MarkReadResponse, MessageOnlyResponse, MessageResponse,
    SendMessageRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const REQUIRED_FIELDS: &str = "receiver_id and content are required";

/// Message service
pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    /// Create a new MessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Send a message to another user
    #[instrument(skip(self, request))]
    pub async fn send(&self, user_id: Id, request: SendMessageRequest) -> ServiceResult<MessageResponse> {
        let (Some(receiver_id), Some(content)) = (request.receiver_id, request.content) else {
            return Err(ServiceError::validation(REQUIRED_FIELDS));
        };

        let new_message = NewMessage::new(user_id, receiver_id, content)?;

        let users = self.ctx.user_repo();
        let receiver = users
            .find_by_id(receiver_id)
            .await?
            .ok_or(DomainError::UserNotFound(receiver_id))?;
        let sender = users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let message = self.ctx.message_repo().create(&new_message).await?;

        info!(message_id = %message.id, receiver_id = %receiver_id, "Message sent");

        Ok(MessageResponse::from(MessageWithUsers {
            message,
            sender: &sender,
            receiver: &receiver,
        }))
    }

    /// Delete one of the caller's own messages
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Id, message_id: Id) -> ServiceResult<MessageOnlyResponse> {
        let messages = self.ctx.message_repo();

        // someone else's message is indistinguishable from a missing one
        match messages.find_by_id(message_id).await? {
            Some(message) if message.sender_id == user_id => {}
            _ => return Err(DomainError::MessageNotFound(message_id).into()),
        }

        messages.delete(message_id).await?;

        info!(message_id = %message_id, "Message deleted");

        Ok(MessageOnlyResponse::new("Message deleted successfully"))
    }

    /// Delete every message between the caller and `peer_id`
    #[instrument(skip(self))]
    pub async fn delete_conversation(
        &self,
        user_id: Id,
        peer_id: Id,
    ) -> ServiceResult<DeleteConversationResponse> {
        let deleted = self.ctx.message_repo().delete_between(user_id, peer_id).await?;

        info!(peer_id = %peer_id, deleted, "Conversation deleted");

        Ok(DeleteConversationResponse::new(deleted))
    }

    /// Mark everything `peer_id` sent to the caller as read
    #[instrument(skip(self))]
    pub async fn mark_read(&self, user_id: Id, peer_id: Id) -> ServiceResult<MarkReadResponse> {
        let updated = self.ctx.message_repo().mark_read_from(peer_id, user_id).await?;

        Ok(MarkReadResponse::new(updated))
    }
}
