//! ConnectionRequest entity <-> model mapper

use skillx_core::entities::{ConnectionRequest, ConnectionStatus};
use skillx_core::error::DomainError;
use skillx_core::value_objects::Id;

use crate::models::ConnectionRequestModel;

/// Convert a row into an entity. Fails only on an unknown status string.
impl TryFrom<ConnectionRequestModel> for ConnectionRequest {
    type Error = DomainError;

    fn try_from(model: ConnectionRequestModel) -> Result<Self, Self::Error> {
        Ok(ConnectionRequest {
            id: Id::new(model.id),
            sender_id: Id::new(model.sender_id),
            receiver_id: Id::new(model.receiver_id),
            status: model.status.parse::<ConnectionStatus>()?,
            created_at: model.created_at,
        })
    }
}
