//! # Authentication HTTP Handlers
//!
//! 자격 증명 로그인, 로그아웃, 현재 세션 조회 엔드포인트입니다.
//!
//! 로그인에 성공하면 세션 토큰을 응답 본문과 `session-token` 쿠키
//! (HttpOnly, SameSite=Lax, Path=/) 양쪽으로 내려줍니다. 브라우저는 쿠키를,
//! 그 외 클라이언트는 `Authorization: Bearer` 헤더를 사용합니다.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    config::SessionConfig,
    core::AppState,
    domain::dto::{
        auth::{SessionResponse, SignInRequest, SignInResponse},
        common::ApiResponse,
    },
    domain::models::session::OptionalSession,
    errors::{AppError, CredentialsError},
};

fn session_cookie(token: String, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build(SessionConfig::cookie_name(), token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(SessionConfig::secure_cookie())
        .max_age(Duration::seconds(max_age_seconds))
        .finish()
}

fn removal_cookie() -> Cookie<'static> {
    let mut cookie = Cookie::build(SessionConfig::cookie_name(), "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish();
    cookie.make_removal();
    cookie
}

#[post("/sign-in")]
pub async fn sign_in(
    state: web::Data<AppState>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = state.credentials
        .authorize(&payload.identifier, &payload.password)
        .await
        .map_err(|e| {
            if let CredentialsError::Backend(inner) = &e {
                log::error!("로그인 처리 실패 - {}: {}", payload.identifier, inner);
            } else {
                log::warn!("로그인 실패 - {}: {}", payload.identifier, e);
            }
            AppError::from(e)
        })?;

    let token = state.tokens.issue(&user)?;
    let session_user = state.tokens.session_user(&token)?;
    let expires_in = state.tokens.max_age_seconds();

    log::info!("로그인 성공 - 사용자: {}", user.username);

    Ok(HttpResponse::Ok()
        .cookie(session_cookie(token.clone(), expires_in))
        .json(SignInResponse {
            success: true,
            message: "Signed in successfully".to_string(),
            user: session_user,
            token,
            expires_in,
        }))
}

#[post("/sign-out")]
pub async fn sign_out() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(removal_cookie())
        .json(ApiResponse::ok("Signed out successfully"))
}

#[get("/session")]
pub async fn session(session: OptionalSession) -> HttpResponse {
    HttpResponse::Ok().json(SessionResponse { user: session.0 })
}

#[cfg(test)]
mod tests {
    use actix_web::{http::header, test};
    use serde_json::{json, Value};
    use crate::core::testing::TestState;

    #[actix_web::test]
    async fn test_sign_in_with_email_or_username() {
        let test_state = TestState::new();
        test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = init_test_app!(test_state.state).await;

        for identifier in ["alice@example.com", "alice"] {
            let req = test::TestRequest::post()
                .uri("/api/auth/sign-in")
                .set_json(json!({ "identifier": identifier, "password": "hunter22" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200);

            let cookie = resp.response().cookies().find(|c| c.name() == "session-token").unwrap();
            assert!(cookie.http_only().unwrap_or(false));
            assert_eq!(cookie.path(), Some("/"));

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], true);
            assert_eq!(body["user"]["username"], "alice");
            assert_eq!(body["user"]["isVerified"], true);
            assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
        }
    }

    #[actix_web::test]
    async fn test_sign_in_failures_look_identical() {
        let test_state = TestState::new();
        test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let (bob, _) = test_state.verified_user("bob", "bob@example.com", "hunter22").await;
        test_state.store.update_raw(&bob.username, |u| u.is_verified = false);
        let app = init_test_app!(test_state.state).await;

        let attempts = [
            ("alice", "wrong-password"),
            ("bob", "hunter22"),
            ("nobody", "hunter22"),
        ];

        for (identifier, password) in attempts {
            let req = test::TestRequest::post()
                .uri("/api/auth/sign-in")
                .set_json(json!({ "identifier": identifier, "password": password }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 401, "{}", identifier);
            assert!(resp.response().cookies().next().is_none());

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "success": false, "message": "Invalid credentials" }));
        }
    }

    #[actix_web::test]
    async fn test_sign_in_with_corrupt_hash_hides_details() {
        let test_state = TestState::new();
        test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        test_state.store.update_raw("alice", |u| u.password_hash = "not-a-bcrypt-hash".to_string());
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(json!({ "identifier": "alice", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "Internal server error" }));
    }

    #[actix_web::test]
    async fn test_sign_in_rejects_empty_fields() {
        let test_state = TestState::new();
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(json!({ "identifier": "", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_session_endpoint() {
        let test_state = TestState::new();
        let (_, token) = test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({}));

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["user"]["username"], "alice");
        assert_eq!(body["user"]["isAcceptingMessages"], true);
    }

    #[actix_web::test]
    async fn test_sign_out_clears_cookie() {
        let test_state = TestState::new();
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post().uri("/api/auth/sign-out").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let cookie = resp.response().cookies().find(|c| c.name() == "session-token").unwrap();
        assert_eq!(cookie.value(), "");
    }
}
