//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 1. 세션 미들웨어 (SessionMiddleware)
//! - `session-token` 쿠키 또는 `Authorization: Bearer` 헤더에서 토큰 추출
//! - 검증에 성공하면 [`SessionUser`](crate::domain::models::session::SessionUser)를
//!   request extension에 저장
//! - 토큰이 없거나 유효하지 않으면 세션 없이 그대로 진행
//!
//! ### 2. 라우트 가드 (RouteGuard)
//! - 대시보드와 인증 페이지 경로에서 세션 유무에 따라 307 리다이렉트
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! App::new()
//!     .wrap(RouteGuard)                               // 세션 미들웨어 다음에 실행
//!     .wrap(SessionMiddleware::new(tokens.clone()))   // 먼저 실행
//! ```

pub mod session_middleware;
mod session_inner;
pub mod route_guard;

pub use session_middleware::SessionMiddleware;
pub use route_guard::{guard_decision, GuardDecision, RouteGuard};
