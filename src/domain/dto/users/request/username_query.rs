//! 사용자명 중복 확인 쿼리 DTO

use serde::Deserialize;
use validator::Validate;
use crate::utils::validate_username_chars;

/// `GET /api/check-username-unique?username=...`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UsernameQuery {
    #[validate(length(min = 2, max = 20, message = "Username must be 2-20 characters"))]
    #[validate(custom(function = "validate_username_chars"))]
    #[serde(default)]
    pub username: String,
}
