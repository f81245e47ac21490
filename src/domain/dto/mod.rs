//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문과 1:1로 대응하는 타입들입니다.
//! JSON 필드명은 프론트엔드와 맞추기 위해 camelCase를 사용하며,
//! 모든 응답은 `success` 필드를 가진 공통 봉투 형식을 따릅니다.
//!
//! - [`common`] - 공통 응답 봉투 (`{success, message}`)
//! - [`users`] - 회원가입, 인증 코드, 사용자명 확인, 메시지 수신 설정
//! - [`auth`] - 로그인 요청/응답
//! - [`messages`] - 메시지 전송/조회

pub mod common;
pub mod users;
pub mod auth;
pub mod messages;
