//! 세션 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`, `jti`)에 로그인 시점의 사용자 정보를
//! 덧붙입니다. 사용자 정보는 토큰 발급 당시의 스냅샷이므로, 최신 값이 필요한
//! 핸들러는 데이터베이스에서 다시 읽어야 합니다.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// 토큰의 주체 (사용자 ID)
    pub sub: String,
    pub username: String,
    pub is_verified: bool,
    pub is_accepting_messages: bool,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
    /// 토큰 고유 ID
    pub jti: String,
}
