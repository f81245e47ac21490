//! 자격 증명(아이디 + 비밀번호) 인증
//!
//! 로그인 판단 순서:
//!
//! 1. 이메일 또는 사용자명으로 사용자 조회
//! 2. 없으면 [`CredentialsError::UserNotFound`]
//! 3. 이메일 인증 전이면 [`CredentialsError::AccountNotVerified`]
//! 4. bcrypt 해시 비교가 실패하면 [`CredentialsError::IncorrectPassword`]
//!
//! 세 실패는 클라이언트에게 모두 같은 401 "Invalid credentials"로 보입니다.

use std::sync::Arc;
use crate::{
    domain::entities::users::User,
    errors::{CredentialsError, ErrorContext},
    repositories::users::UserStore,
};

pub struct CredentialsService {
    user_store: Arc<dyn UserStore>,
}

impl CredentialsService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// 자격 증명을 확인하고 인증된 사용자를 반환합니다.
    ///
    /// `identifier`는 이메일 또는 사용자명입니다.
    pub async fn authorize(&self, identifier: &str, password: &str) -> Result<User, CredentialsError> {
        let identifier = identifier.trim();

        let user = self.user_store
            .find_by_email_or_username(identifier)
            .await?
            .ok_or(CredentialsError::UserNotFound)?;

        if !user.is_verified {
            return Err(CredentialsError::AccountNotVerified);
        }

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(password, &user.password_hash)
            .context("Password verification failed")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            return Err(CredentialsError::IncorrectPassword);
        }

        Ok(user)
    }
}
