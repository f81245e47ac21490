//! 메시지 수신 설정 응답 DTO

use serde::{Deserialize, Serialize};
use super::UserResponse;

/// `GET /api/accept-messages` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptMessagesStatusResponse {
    pub success: bool,
    pub is_accepting_messages: bool,
}

/// `POST /api/accept-messages` 성공 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptMessagesUpdateResponse {
    pub success: bool,
    pub message: String,
    pub updated_user: UserResponse,
}
