//! 메시지 전송 요청 DTO

use serde::Deserialize;
use validator::Validate;

/// 익명 메시지 전송 요청 (로그인 불필요)
///
/// 본문 길이는 10자 이상 300자 이하입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 10, max = 300, message = "Content must be between 10 and 300 characters"))]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::messages::{MESSAGE_MAX_LENGTH, MESSAGE_MIN_LENGTH};

    fn with_len(len: u64) -> SendMessageRequest {
        SendMessageRequest {
            username: "alice".to_string(),
            content: "a".repeat(len as usize),
        }
    }

    #[test]
    fn test_content_length_bounds() {
        assert!(with_len(MESSAGE_MIN_LENGTH - 1).validate().is_err());
        assert!(with_len(MESSAGE_MIN_LENGTH).validate().is_ok());
        assert!(with_len(MESSAGE_MAX_LENGTH).validate().is_ok());
        assert!(with_len(MESSAGE_MAX_LENGTH + 1).validate().is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let req = SendMessageRequest {
            username: "alice".to_string(),
            // 101자, UTF-8로는 303바이트
            content: "가".repeat(101),
        };
        assert!(req.validate().is_ok());
    }
}
