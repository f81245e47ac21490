//! 로그인/세션 응답 DTO
use serde::{Deserialize, Serialize};
use crate::domain::models::session::SessionUser;

/// 로그인 성공 응답
///
/// 토큰은 `session-token` 쿠키로도 함께 내려갑니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub success: bool,
    pub message: String,
    pub user: SessionUser,
    pub token: String,
    /// 토큰 만료까지 남은 시간 (초)
    pub expires_in: i64,
}

/// `GET /api/auth/session` 응답. 세션이 없으면 `{}`로 직렬화됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
}
