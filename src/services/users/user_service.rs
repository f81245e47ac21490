//! # 사용자 관리 서비스 구현
//!
//! 회원 가입, 이메일 인증, 사용자명 중복 확인, 메시지 수신 설정을 담당합니다.
//!
//! ## 회원 가입 흐름
//!
//! ```text
//! sign_up(username, email, password)
//!   ├─ 인증된 사용자가 username 사용 중 ──────────▶ 400 Username is already taken
//!   ├─ email 사용자 존재
//!   │    ├─ 인증 완료 ─────────────────────────────▶ 400 User already exists with this email
//!   │    └─ 인증 전   ─▶ 비밀번호/코드/만료 갱신
//!   ├─ 신규 ─────────▶ 인증 전 사용자 생성
//!   └─ 인증 메일 발송 ─▶ 실패 시 500
//! ```
//!
//! 인증 코드는 숫자 6자리이며 발급 후 1시간 동안 유효합니다.

use std::sync::Arc;
use bcrypt::hash;
use mongodb::bson::DateTime;
use rand::Rng;
use crate::{
    config::PasswordConfig,
    domain::{
        dto::users::request::SignUpRequest,
        entities::users::User,
    },
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
    services::email::EmailSender,
    utils::normalize_email,
};

pub const USERNAME_TAKEN: &str = "Username is already taken";
pub const EMAIL_TAKEN: &str = "User already exists with this email";
pub const USER_NOT_FOUND: &str = "User not found";
pub const VERIFICATION_EMAIL_FAILED: &str = "Failed to send verification email";
pub const CODE_EXPIRED: &str = "Verification code has expired. Please sign up again to get a new code.";
pub const CODE_INCORRECT: &str = "Incorrect verification code";
pub const UPDATE_TARGET_MISSING: &str = "Unable to find user to update message acceptance status";
pub const UPDATE_ACCEPTANCE_FAILED: &str = "Error updating message acceptance status";
pub const READ_ACCEPTANCE_FAILED: &str = "Error retrieving message acceptance status";

/// 6자리 숫자 인증 코드 생성
pub fn generate_verify_code() -> String {
    rand::thread_rng().gen_range(100_000..1_000_000).to_string()
}

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_store: Arc<dyn UserStore>,
    email_sender: Arc<dyn EmailSender>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(user_store: Arc<dyn UserStore>, email_sender: Arc<dyn EmailSender>) -> Self {
        Self::with_bcrypt_cost(user_store, email_sender, PasswordConfig::bcrypt_cost())
    }

    pub fn with_bcrypt_cost(
        user_store: Arc<dyn UserStore>,
        email_sender: Arc<dyn EmailSender>,
        bcrypt_cost: u32,
    ) -> Self {
        Self { user_store, email_sender, bcrypt_cost }
    }

    /// 회원 가입
    ///
    /// 입력값 검증은 호출자(핸들러)가 마친 상태라고 가정합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용자명/이메일이 이미 인증된 사용자에게 속함
    /// * `AppError::InternalError` - 해싱 실패
    /// * `AppError::ServerError` - 인증 메일 발송 실패
    /// * `AppError::DatabaseError` - 저장소 오류
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<()> {
        let username = request.username.trim().to_string();
        let email = normalize_email(&request.email);

        if self.user_store.find_verified_by_username(&username).await?.is_some() {
            return Err(AppError::ValidationError(USERNAME_TAKEN.to_string()));
        }

        let verify_code = generate_verify_code();
        let expiry = User::verify_code_expiry_from(DateTime::now());

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, self.bcrypt_cost)
            .context("Password hashing failed")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        match self.user_store.find_by_email(&email).await? {
            Some(existing) if existing.is_verified => {
                return Err(AppError::ValidationError(EMAIL_TAKEN.to_string()));
            }
            Some(existing) => {
                let id = existing.id_string().ok_or_else(|| {
                    AppError::InternalError("Stored user has no id".to_string())
                })?;
                self.user_store
                    .reset_pending_registration(&id, &password_hash, &verify_code, expiry)
                    .await?;
                log::info!("Re-issued verification code for unverified user {}", existing.username);
            }
            None => {
                let user = User::new_unverified(username.clone(), email.clone(), password_hash, verify_code.clone(), expiry);
                self.user_store.create(user).await.map_err(|e| match e {
                    AppError::ConflictError(_) => AppError::ValidationError(USERNAME_TAKEN.to_string()),
                    other => other,
                })?;
                log::info!("Registered new user {}", username);
            }
        }

        self.email_sender
            .send_verification_email(&email, &username, &verify_code)
            .await
            .map_err(|e| {
                log::error!("Verification email to {} failed: {}", email, e);
                AppError::ServerError(VERIFICATION_EMAIL_FAILED.to_string())
            })
    }

    /// 이메일 인증 코드 확인
    ///
    /// 만료 여부를 코드 일치보다 먼저 알려 줍니다. 만료된 코드는 다시 가입해야
    /// 새로 발급받을 수 있기 때문입니다.
    pub async fn verify_code(&self, username: &str, code: &str) -> AppResult<()> {
        let user = self.user_store
            .find_by_username(username.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let now = DateTime::now();
        let expired = user.is_verify_code_expired(now);

        if user.verify_code_matches(code) && !expired {
            let id = user.id_string().ok_or_else(|| {
                AppError::InternalError("Stored user has no id".to_string())
            })?;
            self.user_store.mark_verified(&id).await?;
            log::info!("User {} verified", user.username);
            return Ok(());
        }

        if expired {
            Err(AppError::ValidationError(CODE_EXPIRED.to_string()))
        } else {
            log::warn!("Incorrect verification code for {}", user.username);
            Err(AppError::ValidationError(CODE_INCORRECT.to_string()))
        }
    }

    /// 인증된 사용자 중 같은 사용자명이 없으면 `true`
    pub async fn is_username_unique(&self, username: &str) -> AppResult<bool> {
        Ok(self.user_store.find_verified_by_username(username).await?.is_none())
    }

    /// 메시지 수신 여부 변경
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 세션 사용자의 레코드가 없음
    /// * `AppError::ServerError` - 그 외 모든 실패
    pub async fn set_accepting_messages(&self, user_id: &str, accept: bool) -> AppResult<User> {
        match self.user_store.set_accepting_messages(user_id, accept).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(AppError::AuthenticationError(UPDATE_TARGET_MISSING.to_string())),
            Err(e) => {
                log::error!("Failed to update message acceptance for {}: {}", user_id, e);
                Err(AppError::ServerError(UPDATE_ACCEPTANCE_FAILED.to_string()))
            }
        }
    }

    /// 저장된 메시지 수신 여부 조회 (토큰 값이 아닌 데이터베이스 값)
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 레코드 없음
    /// * `AppError::ServerError` - 그 외 모든 실패
    pub async fn is_accepting_messages(&self, user_id: &str) -> AppResult<bool> {
        match self.user_store.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(user.is_accepting_messages),
            Ok(None) => Err(AppError::NotFound(USER_NOT_FOUND.to_string())),
            Err(e) => {
                log::error!("Failed to read message acceptance for {}: {}", user_id, e);
                Err(AppError::ServerError(READ_ACCEPTANCE_FAILED.to_string()))
            }
        }
    }
}
