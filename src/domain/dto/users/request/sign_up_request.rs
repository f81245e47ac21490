//! 회원가입 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::validate_username_chars;

/// 회원가입 요청
///
/// ```json
/// { "username": "alice", "email": "alice@example.com", "password": "hunter22" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    /// 사용자명 (2-20자, 영문/숫자/언더스코어)
    #[validate(length(min = 2, max = 20, message = "Username must be 2-20 characters"))]
    #[validate(custom(function = "validate_username_chars"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}
