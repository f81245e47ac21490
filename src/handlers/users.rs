//! # Registration HTTP Handlers
//!
//! 회원 가입, 이메일 인증 코드 확인, 사용자명 중복 확인 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/sign-up` | 가입 및 인증 코드 발송 | 201 / 400 / 500 |
//! | `POST` | `/api/verify-code` | 인증 코드 확인 | 200 / 400 / 404 |
//! | `GET` | `/api/check-username-unique` | 사용자명 사용 가능 여부 | 200 / 400 |

use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppState,
    domain::dto::{
        common::ApiResponse,
        users::{SignUpRequest, UsernameQuery, VerifyCodeRequest},
    },
    errors::AppError,
    services::users::USERNAME_TAKEN,
};

#[post("/sign-up")]
pub async fn sign_up(
    state: web::Data<AppState>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    state.users.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "User registered successfully. Please verify your account.",
    )))
}

#[post("/verify-code")]
pub async fn verify_code(
    state: web::Data<AppState>,
    payload: web::Json<VerifyCodeRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    state.users.verify_code(&payload.username, &payload.code).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Account verified successfully")))
}

#[get("/check-username-unique")]
pub async fn check_username_unique(
    state: web::Data<AppState>,
    query: web::Query<UsernameQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let response = if state.users.is_username_unique(&query.username).await? {
        ApiResponse::ok("Username is unique")
    } else {
        ApiResponse::fail(USERNAME_TAKEN)
    };

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::test;
    use mongodb::bson::DateTime;
    use serde_json::{json, Value};
    use crate::core::testing::TestState;
    use crate::services::email::testing::RecordingEmailSender;

    #[actix_web::test]
    async fn test_sign_up_verify_then_sign_in() {
        let test_state = TestState::new();
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "alice", "email": "alice@example.com", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User registered successfully. Please verify your account.");

        // 인증 전에는 로그인 불가
        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(json!({ "identifier": "alice", "password": "hunter22" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 401);

        let code = test_state.mail.last_code().unwrap();
        let req = test::TestRequest::post()
            .uri("/api/verify-code")
            .set_json(json!({ "username": "alice", "code": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "message": "Account verified successfully" }));

        let req = test::TestRequest::post()
            .uri("/api/auth/sign-in")
            .set_json(json!({ "identifier": "alice@example.com", "password": "hunter22" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
    }

    #[actix_web::test]
    async fn test_sign_up_validation() {
        let test_state = TestState::new();
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "a!", "email": "nope", "password": "123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(test_state.store.len(), 0);
    }

    #[actix_web::test]
    async fn test_sign_up_conflicts_with_verified_user() {
        let test_state = TestState::new();
        test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "alice", "email": "new@example.com", "password": "hunter22" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "success": false, "message": "Username is already taken" }));

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "alice2", "email": "alice@example.com", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "User already exists with this email");
    }

    #[actix_web::test]
    async fn test_sign_up_email_failure_is_500() {
        let test_state = TestState::with_mail(RecordingEmailSender::failing());
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "alice", "email": "alice@example.com", "password": "hunter22" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Failed to send verification email");
    }

    #[actix_web::test]
    async fn test_verify_code_errors() {
        let test_state = TestState::new();
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::post()
            .uri("/api/verify-code")
            .set_json(json!({ "username": "ghost", "code": "123456" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);

        let req = test::TestRequest::post()
            .uri("/api/sign-up")
            .set_json(json!({ "username": "alice", "email": "alice@example.com", "password": "hunter22" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);
        let code = test_state.mail.last_code().unwrap();
        let wrong = if code == "111111" { "222222" } else { "111111" };

        let req = test::TestRequest::post()
            .uri("/api/verify-code")
            .set_json(json!({ "username": "alice", "code": wrong }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Incorrect verification code");

        test_state.store.update_raw("alice", |u| {
            u.verify_code_expiry = DateTime::from_millis(DateTime::now().timestamp_millis() - 1_000);
        });
        let req = test::TestRequest::post()
            .uri("/api/verify-code")
            .set_json(json!({ "username": "alice", "code": code }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Verification code has expired. Please sign up again to get a new code.");
    }

    #[actix_web::test]
    async fn test_check_username_unique() {
        let test_state = TestState::new();
        test_state.verified_user("alice", "alice@example.com", "hunter22").await;
        let app = init_test_app!(test_state.state).await;

        let req = test::TestRequest::get().uri("/api/check-username-unique?username=alice").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": false, "message": "Username is already taken" }));

        let req = test::TestRequest::get().uri("/api/check-username-unique?username=bob_1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "success": true, "message": "Username is unique" }));

        let req = test::TestRequest::get().uri("/api/check-username-unique?username=b%21").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
