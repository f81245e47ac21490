//! 자격 증명 로그인 실패 사유
//!
//! 로그인 전략은 실패를 예외가 아닌 값으로 돌려줍니다. 세 가지 인증 실패는
//! 로그에서만 구분되고, 클라이언트에게는 모두 같은 401 응답으로 나갑니다.

use thiserror::Error;
use super::AppError;

/// 클라이언트에게 보여주는 로그인 실패 문구
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// 자격 증명 검증 실패 사유
#[derive(Error, Debug)]
pub enum CredentialsError {
    /// 이메일/사용자명에 해당하는 사용자가 없음
    #[error("No user found with this email or username")]
    UserNotFound,

    /// 이메일 인증을 마치지 않은 계정
    #[error("Please verify your account before logging in")]
    AccountNotVerified,

    /// 비밀번호 불일치
    #[error("Incorrect password")]
    IncorrectPassword,

    /// 저장소 조회나 해시 비교 자체가 실패한 경우
    #[error(transparent)]
    Backend(#[from] AppError),
}

impl From<CredentialsError> for AppError {
    fn from(err: CredentialsError) -> Self {
        match err {
            CredentialsError::Backend(inner) => inner,
            _ => AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()),
        }
    }
}
