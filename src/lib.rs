//! Mystery Message 백엔드
//!
//! 익명 메시지 서비스의 HTTP API 서버입니다. 사용자는 이메일 인증을 거쳐 가입하고,
//! 공개 페이지를 통해 누구에게서나 익명 메시지를 받습니다.
//!
//! # Features
//!
//! - **회원 가입**: 6자리 인증 코드 메일 발송, 1시간 유효
//! - **자격 증명 로그인**: 이메일 또는 사용자명 + 비밀번호, HS256 세션 토큰
//! - **라우트 가드**: 세션 유무에 따른 대시보드/인증 페이지 리다이렉트
//! - **메시지 수신 설정**: 익명 메시지 수신 여부 토글
//! - **MongoDB**: 사용자 문서에 메시지를 내장해 저장, 첫 요청 시 지연 연결
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Middlewares   │ ← 세션 복원, 라우트 가드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (UserStore)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use mystery_message::core::AppState;
//! use mystery_message::db::DbConnector;
//!
//! let connector = Arc::new(DbConnector::from_env());
//! let state = AppState::from_env(connector)?;
//! let user = state.credentials.authorize("alice", "hunter22").await?;
//! let token = state.tokens.issue(&user)?;
//! ```

/// 라우트와 세션 미들웨어가 모두 붙은 테스트 앱
#[cfg(test)]
macro_rules! init_test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state.clone()))
                .wrap(crate::middlewares::SessionMiddleware::new($state.tokens.clone()))
                .configure(crate::routes::configure_all_routes),
        )
    };
}

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
