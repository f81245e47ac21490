//! 에러 타입 모듈
//!
//! - [`errors`] - HTTP 응답으로 변환되는 애플리케이션 전역 에러
//! - [`credentials`] - 자격 증명 로그인 전략의 타입 있는 실패 사유

pub mod errors;
pub mod credentials;

pub use errors::*;
pub use credentials::*;
