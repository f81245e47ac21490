//! 인증 메일 발송 모듈
//!
//! - [`EmailSender`] - 발송 방식에 대한 추상화
//! - [`ResendEmailSender`] - Resend HTTP API로 실제 메일 발송
//! - [`LogEmailSender`] - API 키가 없는 개발 환경에서 인증 코드를 로그로 출력

pub mod email_sender;

pub use email_sender::*;
