//! 로그인 요청 DTO
use serde::Deserialize;
use validator::Validate;

/// 자격 증명 로그인 요청
///
/// `identifier`에는 이메일 또는 사용자명 중 하나를 넣습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
