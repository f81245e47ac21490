//! # 사용자 DTO 모듈
//!
//! - [`request`] - 회원가입, 인증 코드, 사용자명 중복 확인, 메시지 수신 설정 요청
//! - [`response`] - 공개 사용자 정보와 메시지 수신 설정 응답

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
