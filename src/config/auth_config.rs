//! # Authentication Configuration Module
//!
//! 세션 토큰 서명, 세션 쿠키, 인증 메일 발송에 필요한 설정을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### 세션 토큰
//! ```bash
//! export SESSION_SECRET="your-super-secret-session-key"   # 프로덕션 필수
//! export SESSION_MAX_AGE_HOURS="720"                      # 기본 30일
//! ```
//!
//! ### 인증 메일 (Resend)
//! ```bash
//! export RESEND_API_KEY="re_..."      # 없으면 인증 코드를 로그로만 출력
//! export EMAIL_FROM="Mystery Message <onboarding@resend.dev>"
//! ```

use std::env;
use crate::config::Environment;
use crate::errors::AppError;

const DEV_SESSION_SECRET: &str = "mystery-message-dev-secret";

/// 세션 토큰 설정
///
/// 세션 토큰은 `SESSION_SECRET`으로 서명된 HS256 JWT이며,
/// `session-token` 쿠키 또는 `Authorization: Bearer` 헤더로 전달됩니다.
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 토큰 서명 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// 프로덕션 환경에서 `SESSION_SECRET`이 비어 있거나 설정되지 않은 경우
    /// `AppError::InternalError`를 반환합니다. 그 외 환경에서는 경고를 남기고
    /// 개발용 기본값을 사용합니다.
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for(env::var("SESSION_SECRET").ok(), &Environment::current())
    }

    /// 주어진 값과 환경으로 비밀키를 결정합니다.
    pub fn secret_for(value: Option<String>, environment: &Environment) -> Result<String, AppError> {
        match value.filter(|s| !s.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if environment.is_production() => Err(AppError::InternalError(
                "SESSION_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
                Ok(DEV_SESSION_SECRET.to_string())
            }
        }
    }

    /// 세션 유효 시간 (`SESSION_MAX_AGE_HOURS`, 기본값: 720시간 = 30일)
    pub fn max_age_hours() -> i64 {
        env::var("SESSION_MAX_AGE_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
            .filter(|h: &i64| *h > 0)
            .unwrap_or(720)
    }

    /// 세션 쿠키 이름
    pub fn cookie_name() -> &'static str {
        "session-token"
    }

    /// 쿠키에 Secure 속성을 붙일지 여부 (프로덕션에서만)
    pub fn secure_cookie() -> bool {
        Environment::current().is_production()
    }
}

/// 인증 메일 발송 설정
pub struct EmailConfig;

impl EmailConfig {
    /// Resend API 키. 설정되지 않으면 메일 대신 로그로 인증 코드를 출력합니다.
    pub fn resend_api_key() -> Option<String> {
        env::var("RESEND_API_KEY").ok().filter(|k| !k.trim().is_empty())
    }

    /// 발신자 주소 (`EMAIL_FROM`)
    pub fn from_address() -> String {
        env::var("EMAIL_FROM")
            .unwrap_or_else(|_| "Mystery Message <onboarding@resend.dev>".to_string())
    }

    /// Resend API 엔드포인트 (`RESEND_API_URL`)
    pub fn api_url() -> String {
        env::var("RESEND_API_URL").unwrap_or_else(|_| "https://api.resend.com/emails".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_required_in_production() {
        let result = SessionConfig::secret_for(None, &Environment::Production);
        assert!(matches!(result, Err(AppError::InternalError(_))));

        let blank = SessionConfig::secret_for(Some("   ".to_string()), &Environment::Production);
        assert!(blank.is_err());
    }

    #[test]
    fn test_secret_falls_back_outside_production() {
        let secret = SessionConfig::secret_for(None, &Environment::Development).unwrap();
        assert_eq!(secret, DEV_SESSION_SECRET);
    }

    #[test]
    fn test_explicit_secret_wins() {
        let secret = SessionConfig::secret_for(Some("s3cret".to_string()), &Environment::Production).unwrap();
        assert_eq!(secret, "s3cret");
    }

    #[test]
    fn test_cookie_name() {
        assert_eq!(SessionConfig::cookie_name(), "session-token");
    }
}
