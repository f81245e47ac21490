//! 인증 서비스 모듈
//!
//! - [`CredentialsService`] - 아이디(이메일 또는 사용자명) + 비밀번호 검증
//! - [`SessionTokenService`] - HS256 세션 토큰 발급/검증
//!
//! # Examples
//!
//! ```rust,ignore
//! let user = credentials.authorize("alice", "hunter22").await?;
//! let token = token_service.issue(&user)?;
//! ```

pub mod credentials_service;
pub mod token_service;

pub use credentials_service::*;
pub use token_service::*;
