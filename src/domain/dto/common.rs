//! 공통 응답 봉투

use serde::{Deserialize, Serialize};

/// 모든 API 응답의 기본 형식
///
/// ```json
/// { "success": true, "message": "Message sent successfully" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self { success: true, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }
}
