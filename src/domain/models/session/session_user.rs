use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::domain::models::session::SessionClaims;
use crate::errors::AppError;

/// 세션이 없을 때 보호된 API가 돌려주는 문구
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

/// 세션 토큰에서 복원된 사용자 정보
///
/// 세션 미들웨어가 유효한 토큰을 찾으면 요청 extensions에 넣어 둡니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub is_verified: bool,
    pub is_accepting_messages: bool,
}

impl From<SessionClaims> for SessionUser {
    fn from(claims: SessionClaims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            is_verified: claims.is_verified,
            is_accepting_messages: claims.is_accepting_messages,
        }
    }
}

/// 세션 필수 추출자
///
/// 세션이 없으면 401 `{success:false, message:"Not authenticated"}`로 응답합니다.
impl FromRequest for SessionUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<SessionUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(NOT_AUTHENTICATED.to_string()))),
        }
    }
}

/// 선택적 세션 추출자
#[derive(Debug, Clone)]
pub struct OptionalSession(pub Option<SessionUser>);

impl FromRequest for OptionalSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let user = req.extensions().get::<SessionUser>().cloned();
        ready(Ok(OptionalSession(user)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn sample() -> SessionUser {
        SessionUser {
            id: "665f1c2ab0c1d2e3f4a5b6c7".to_string(),
            username: "alice".to_string(),
            is_verified: true,
            is_accepting_messages: true,
        }
    }

    #[actix_web::test]
    async fn test_extracts_user_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut().insert(sample());

        let user = SessionUser::extract(&req).await.unwrap();
        assert_eq!(user.username, "alice");
    }

    #[actix_web::test]
    async fn test_missing_session_is_unauthenticated() {
        let req = TestRequest::default().to_http_request();

        let result = SessionUser::extract(&req).await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));

        let optional = OptionalSession::extract(&req).await.unwrap();
        assert!(optional.0.is_none());
    }
}
