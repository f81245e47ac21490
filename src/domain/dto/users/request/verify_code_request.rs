//! 이메일 인증 코드 확인 요청 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::validate_verify_code;

/// 인증 코드 확인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(custom(function = "validate_verify_code"))]
    pub code: String,
}
