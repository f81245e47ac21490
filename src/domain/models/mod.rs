//! # Domain Models
//!
//! 데이터베이스에 저장되지 않고 요청 처리 중에만 쓰이는 도메인 모델입니다.
//!
//! - [`session`] - 세션 토큰 클레임과 인증된 사용자 정보

pub mod session;

pub use session::*;
