//! Message entity <-> model mapper

use skillx_core::entities::Message;
use skillx_core::value_objects::Id;

use crate::models::MessageModel;

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Id::new(model.id),
            sender_id: Id::new(model.sender_id),
            receiver_id: Id::new(model.receiver_id),
            content: model.content,
            timestamp: model.timestamp,
            is_read: model.is_read,
        }
    }
}
