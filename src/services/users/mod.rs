//! 사용자 관리 서비스 모듈
//!
//! 회원 가입, 이메일 인증, 사용자명 중복 확인, 메시지 수신 설정을 담당합니다.

pub mod user_service;

pub use user_service::*;
