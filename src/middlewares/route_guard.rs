//! 라우트 가드
//!
//! 페이지 경로에 대한 접근을 세션 유무로 나눕니다.
//!
//! | 경로 | 세션 없음 | 세션 있음 |
//! |------|-----------|-----------|
//! | `/dashboard`, `/dashboard/*` | 307 → `/sign-in` | 통과 |
//! | `/sign-in`, `/sign-up`, `/verify`, `/verify/*`, `/` | 통과 | 307 → `/dashboard` |
//! | 그 외 | 통과 | 통과 |
//!
//! 세션 판단은 [`SessionMiddleware`](super::SessionMiddleware)가 넣어 둔
//! `SessionUser`로 하므로, 이 미들웨어는 세션 미들웨어 안쪽에 등록해야 합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::session::SessionUser;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// 가드 판단 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(&'static str),
}

/// `path`가 `prefix` 자체이거나 그 하위 경로인지 확인
fn is_under(path: &str, prefix: &str) -> bool {
    path == prefix
        || path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// 경로와 인증 여부로 리다이렉트 여부를 결정합니다.
pub fn guard_decision(path: &str, authenticated: bool) -> GuardDecision {
    let dashboard = is_under(path, DASHBOARD_PATH);
    let auth_page = path == "/"
        || path == SIGN_IN_PATH
        || path == "/sign-up"
        || is_under(path, "/verify");

    match (authenticated, dashboard, auth_page) {
        (false, true, _) => GuardDecision::Redirect(SIGN_IN_PATH),
        (true, _, true) => GuardDecision::Redirect(DASHBOARD_PATH),
        _ => GuardDecision::Pass,
    }
}

/// 라우트 가드 미들웨어
pub struct RouteGuard;

impl<S, B> Transform<S, ServiceRequest> for RouteGuard
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RouteGuardService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardService {
            service: Rc::new(service),
        }))
    }
}

pub struct RouteGuardService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RouteGuardService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let authenticated = req.extensions().get::<SessionUser>().is_some();

        if let GuardDecision::Redirect(location) = guard_decision(req.path(), authenticated) {
            log::debug!("라우트 가드: {} → {}", req.path(), location);
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((header::LOCATION, location))
                .finish();
            let (req, _) = req.into_parts();
            let res = ServiceResponse::new(req, response).map_into_right_body();
            return Box::pin(async move { Ok(res) });
        }

        let service = self.service.clone();
        Box::pin(async move {
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
