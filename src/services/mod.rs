//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 애플리케이션 시작 시 한 번 생성되어 `web::Data`로 핸들러에 주입됩니다.
//! 저장소와 메일 발송기는 trait 객체로 받으므로 테스트에서 인메모리 구현으로
//! 바꿔 끼울 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{users::UserService, auth::SessionTokenService};
//!
//! let user_service = UserService::new(user_store.clone(), email_sender.clone());
//! let token_service = SessionTokenService::from_env()?;
//! ```

pub mod auth;
pub mod email;
pub mod messages;
pub mod users;
