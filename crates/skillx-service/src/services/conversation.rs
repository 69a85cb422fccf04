//! Conversation service
//!
//! Materializes the caller's conversations from their message history on
//! every request.

use std::collections::HashMap;

use skillx_core::{aggregate, Id, User};
use tracing::{info, instrument, warn};

use crate::dto::mappers::ConversationWithPeer;
use crate::dto::ConversationResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Conversation service
pub struct ConversationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ConversationService<'a> {
    /// Create a new ConversationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List the caller's conversations, most recent first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Id) -> ServiceResult<Vec<ConversationResponse>> {
        let messages = self.ctx.message_repo().find_involving(user_id).await?;
        let conversations = aggregate(user_id, messages);

        let peer_ids: Vec<Id> = conversations.iter().map(|c| c.peer_id).collect();
        let peers: HashMap<Id, User> = self
            .ctx
            .user_repo()
            .find_by_ids(&peer_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        info!(target: "security", user_id = %user_id, count = conversations.len(), "DATA_ACCESS conversations");

        Ok(conversations
            .into_iter()
            .filter_map(|conversation| match peers.get(&conversation.peer_id) {
                Some(peer) => Some(ConversationResponse::from(ConversationWithPeer {
                    conversation,
                    peer,
                })),
                None => {
                    warn!(peer_id = %conversation.peer_id, "Skipping conversation with unknown peer");
                    None
                }
            })
            .collect())
    }
}
