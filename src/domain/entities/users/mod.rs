//! Users Entity Module
//!
//! 회원가입, 이메일 인증, 로그인, 메시지 수신 설정을 모두 담는 사용자 엔티티입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new_unverified(
//!     "alice".to_string(),
//!     "alice@example.com".to_string(),
//!     password_hash,
//!     "482913".to_string(),
//!     expiry,
//! );
//! assert!(!user.is_verified);
//! assert!(user.is_accepting_messages);
//! ```

pub mod user;

pub use user::User;
