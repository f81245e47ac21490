//! 세션 토큰 관리 서비스 구현
//!
//! HS256으로 서명된 JWT 세션 토큰의 발급과 검증을 담당합니다.
//! 토큰에는 로그인 시점의 사용자 정보가 함께 실려, 매 요청마다 데이터베이스를
//! 조회하지 않고도 세션 사용자를 복원할 수 있습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;
use crate::{
    config::SessionConfig,
    domain::entities::users::User,
    domain::models::session::{SessionClaims, SessionUser},
    errors::{AppError, ErrorContext},
};

/// 세션 토큰 관리 서비스
///
/// 애플리케이션 시작 시 한 번 만들어 `web::Data`로 공유합니다.
#[derive(Clone)]
pub struct SessionTokenService {
    secret: String,
    max_age_hours: i64,
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("max_age_hours", &self.max_age_hours)
            .finish_non_exhaustive()
    }
}

impl SessionTokenService {
    pub fn new(secret: impl Into<String>, max_age_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            max_age_hours,
        }
    }

    /// `SESSION_SECRET`, `SESSION_MAX_AGE_HOURS` 환경 변수로 서비스를 만듭니다.
    ///
    /// # Errors
    ///
    /// 프로덕션에서 비밀키가 없으면 `AppError::InternalError`
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::new(SessionConfig::secret()?, SessionConfig::max_age_hours()))
    }

    /// 세션 유효 시간 (초)
    pub fn max_age_seconds(&self) -> i64 {
        self.max_age_hours * 3600
    }

    /// 사용자 정보를 토큰 클레임으로 옮깁니다.
    ///
    /// 토큰에는 `_id`, `username`, `is_verified`, `is_accepting_messages`만 실리고
    /// 비밀번호 해시나 인증 코드는 절대 포함되지 않습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 저장되지 않은 사용자 (ID 없음)
    pub fn claims_for(&self, user: &User) -> Result<SessionClaims, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::hours(self.max_age_hours);

        Ok(SessionClaims {
            sub: user.id_string().ok_or_else(|| {
                AppError::InternalError("User has no id".to_string())
            })?,
            username: user.username.clone(),
            is_verified: user.is_verified,
            is_accepting_messages: user.is_accepting_messages,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// 사용자를 위한 세션 토큰 발급
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = token_service.issue(&user)?;
    /// ```
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let claims = self.claims_for(user)?;
        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &SessionClaims) -> Result<String, AppError> {
        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());

        encode(&Header::default(), claims, &encoding_key)
            .context("Failed to sign session token")
    }

    /// 세션 토큰 검증 및 클레임 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 만료, 서명 불일치, 형식 오류
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AppError> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        decode::<SessionClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Session expired".to_string())
                }
                _ => AppError::AuthenticationError(format!("Invalid session token: {}", e)),
            })
    }

    /// 토큰을 검증하고 핸들러에 노출할 세션 사용자를 만듭니다.
    pub fn session_user(&self, token: &str) -> Result<SessionUser, AppError> {
        self.verify(token).map(SessionUser::from)
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    pub fn extract_bearer_token(auth_header: &str) -> Result<&str, AppError> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError("Invalid authorization header".to_string()))
    }
}
