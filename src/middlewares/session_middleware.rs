//! 세션 미들웨어
//!
//! 요청 파이프라인에서 세션 토큰을 검증하고 세션 사용자를 복원합니다.
//! 보호 여부는 결정하지 않습니다. 세션이 필요한 핸들러는
//! `SessionUser` 추출자로 401을 돌려줍니다.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};
use crate::middlewares::session_inner::SessionMiddlewareService;
use crate::services::auth::SessionTokenService;

/// 세션 복원 미들웨어
pub struct SessionMiddleware {
    tokens: Arc<SessionTokenService>,
}

impl SessionMiddleware {
    pub fn new(tokens: Arc<SessionTokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = SessionMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::header, test, web, App, HttpResponse};
    use actix_web::cookie::Cookie;
    use crate::config::SessionConfig;
    use crate::core::testing::TestState;
    use crate::domain::models::session::{OptionalSession, SessionUser};

    async fn whoami(session: OptionalSession) -> HttpResponse {
        match session.0 {
            Some(user) => HttpResponse::Ok().body(user.username),
            None => HttpResponse::Ok().body("anonymous"),
        }
    }

    async fn protected(user: SessionUser) -> HttpResponse {
        HttpResponse::Ok().body(user.id)
    }

    #[actix_web::test]
    async fn test_session_from_cookie_and_bearer() {
        let test_state = TestState::new();
        let (_, token) = test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(test_state.state.tokens.clone()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SessionConfig::cookie_name(), token.clone()))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");
    }

    #[actix_web::test]
    async fn test_stale_cookie_falls_back_to_bearer() {
        let test_state = TestState::new();
        let (_, token) = test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(test_state.state.tokens.clone()))
                .route("/whoami", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SessionConfig::cookie_name(), "expired.or.foreign"))
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");
    }

    #[actix_web::test]
    async fn test_invalid_token_counts_as_no_session() {
        let test_state = TestState::new();
        let app = test::init_service(
            App::new()
                .wrap(SessionMiddleware::new(test_state.state.tokens.clone()))
                .route("/whoami", web::get().to(whoami))
                .route("/protected", web::get().to(protected)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new(SessionConfig::cookie_name(), "garbage.token.value"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "anonymous");

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header((header::AUTHORIZATION, "Bearer garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }
}
