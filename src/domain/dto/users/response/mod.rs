//! # 사용자 관련 응답 DTO 모듈
//!
//! 응답에는 비밀번호 해시와 인증 코드가 절대 포함되지 않습니다.

pub mod user_response;
pub mod accept_messages_response;

pub use user_response::UserResponse;
pub use accept_messages_response::*;
