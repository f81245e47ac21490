//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러 응답은 API 공통 봉투
//! `{ "success": false, "message": "..." }` 형식을 따릅니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn send(data: SendMessageRequest) -> Result<(), AppError> {
//!     let user = store.find_by_username(&data.username).await?
//!         .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
//!     Ok(())
//! }
//! ```
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 클라이언트 메시지 |
//! |----------|-------------|-------------------|
//! | `ValidationError` | 400 | 원본 메시지 |
//! | `AuthenticationError` | 401 | 원본 메시지 |
//! | `AuthorizationError` | 403 | 원본 메시지 |
//! | `NotFound` | 404 | 원본 메시지 |
//! | `ConflictError` | 409 | 원본 메시지 |
//! | `ServerError` | 500 | 원본 메시지 (엔드포인트별 고정 문구) |
//! | `DatabaseError` / `ExternalServiceError` / `InternalError` | 500 | 일반 문구, 상세 내용은 로그에만 기록 |
//!
//! 라이브러리 에러는 [`ErrorContext`]로 감싸 `InternalError`로 만듭니다.
//!
//! ```rust,ignore
//! let hash = bcrypt::hash(password, cost).context("Password hashing failed")?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 클라이언트에 노출하는 일반 서버 오류 문구
pub const GENERIC_SERVER_ERROR: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 외부 서비스 에러 (500 Internal Server Error)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500 Internal Server Error, 상세 내용은 로그 전용)
    #[error("Internal server error: {0}")]
    InternalError(String),

    /// 클라이언트에게 보여줄 고정 문구가 있는 서버 에러 (500 Internal Server Error)
    #[error("Server error: {0}")]
    ServerError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지를 반환합니다.
    ///
    /// `ServerError`를 제외한 500 계열 에러의 상세 내용은 숨기고 일반 문구를 사용합니다.
    pub fn client_message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg)
            | AppError::ServerError(msg) => msg,
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => GENERIC_SERVER_ERROR,
        }
    }

    /// 500 계열 에러인지 확인
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            AppError::DatabaseError(_)
                | AppError::ExternalServiceError(_)
                | AppError::InternalError(_)
                | AppError::ServerError(_)
        )
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 서버 로그에 원본 내용을 남기고, 클라이언트에는
    /// [`AppError::client_message`]만 노출합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.is_server_error() {
            log::error!("요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "success": false,
                "message": self.client_message()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(crate::utils::validation_messages(&errors).join(", "))
    }
}
