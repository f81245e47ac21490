//! 세션 모델
//!
//! - [`claims`] - 세션 토큰(JWT)에 실리는 클레임
//! - [`session_user`] - 핸들러가 받는 인증된 사용자 정보와 actix 추출자

pub mod claims;
pub mod session_user;

pub use claims::SessionClaims;
pub use session_user::{OptionalSession, SessionUser};
