//! # Core Module
//!
//! 애플리케이션 상태 조립을 담당합니다.
//!
//! 서비스는 전역 싱글톤이 아니라 [`AppState`]에 묶여 시작 시 한 번 만들어지고,
//! `web::Data`를 통해 각 워커의 핸들러와 미들웨어에 주입됩니다.
//!
//! ```text
//! main ─▶ AppState::from_env()
//!            ├─ DbConnector (지연 연결)
//!            ├─ UserRepository ─▶ Arc<dyn UserStore>
//!            ├─ EmailSender (Resend 또는 로그)
//!            └─ SessionTokenService
//!                    │
//!                    ▼
//!        App::new().app_data(web::Data::new(state.clone()))
//! ```

pub mod state;

pub use state::*;
