//! SessionMiddleware 세션 복원 로직의 핵심적인 기능
use std::rc::Rc;
use std::sync::Arc;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{http::header, Error, HttpMessage};
use futures_util::future::LocalBoxFuture;
use crate::config::SessionConfig;
use crate::domain::models::session::SessionUser;
use crate::errors::AppError;
use crate::services::auth::SessionTokenService;

/// 실제 세션 복원을 수행하는 서비스
pub struct SessionMiddlewareService<S> {
    pub service: Rc<S>,
    pub tokens: Arc<SessionTokenService>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        match session_from_request(&req, &self.tokens) {
            Ok(Some(user)) => {
                log::debug!("세션 복원: 사용자 {}", user.username);
                req.extensions_mut().insert(user);
            }
            Ok(None) => {}
            Err(err) => {
                // 유효하지 않은 토큰은 세션 없음과 같게 취급
                log::debug!("세션 토큰 무시: {}", err);
            }
        }

        Box::pin(async move { service.call(req).await })
    }
}

/// 쿠키를 먼저 보고, 없거나 검증에 실패하면 Authorization 헤더에서 토큰을 찾습니다.
fn session_from_request(
    req: &ServiceRequest,
    tokens: &SessionTokenService,
) -> Result<Option<SessionUser>, AppError> {
    if let Some(cookie) = req.cookie(SessionConfig::cookie_name()) {
        match tokens.session_user(cookie.value()) {
            Ok(user) => return Ok(Some(user)),
            Err(err) => log::debug!("세션 쿠키 무시, 헤더 확인: {}", err),
        }
    }

    let Some(auth_header) = req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        return Ok(None);
    };

    let token = SessionTokenService::extract_bearer_token(auth_header)?;
    tokens.session_user(token).map(Some)
}
