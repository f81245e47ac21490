//! 도메인 엔티티 모듈
//!
//! MongoDB `users` 컬렉션에 저장되는 문서 구조를 정의합니다.
//! 메시지는 별도 컬렉션 없이 사용자 문서에 내장됩니다.

pub mod users;
pub mod messages;

pub use users::*;
pub use messages::*;
