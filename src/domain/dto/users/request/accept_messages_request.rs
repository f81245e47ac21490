//! 메시지 수신 설정 변경 요청 DTO

use serde::Deserialize;

/// `POST /api/accept-messages` 본문
///
/// ```json
/// { "acceptMessages": false }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptMessagesRequest {
    pub accept_messages: bool,
}
