//! 메시지 조회 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::messages::Message;

/// 메시지 한 건
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub content: String,
    pub created_at: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id_string(),
            created_at: message.created_at.try_to_rfc3339_string().unwrap_or_default(),
            content: message.content,
        }
    }
}

/// `GET /api/get-messages` 성공 응답 (최신순)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesResponse {
    pub success: bool,
    pub messages: Vec<MessageResponse>,
}
