//! 라우트 구성
//!
//! 모든 API는 `/api` 아래에 있고, 인증 관련 엔드포인트는 `/api/auth`에 모여 있습니다.
//! JSON 본문/쿼리 파싱 실패도 다른 에러와 같은 `{success:false, message}` 400 응답이 됩니다.

use actix_web::{error, web, HttpRequest};
use serde_json::json;
use crate::errors::AppError;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler));

    cfg.service(health_check);

    cfg.service(
        web::scope("/api")
            .configure(configure_auth_routes)
            .configure(configure_user_routes)
            .configure(configure_message_routes),
    );
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::sign_in)
            .service(handlers::auth::sign_out)
            .service(handlers::auth::session),
    );
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::sign_up)
        .service(handlers::users::verify_code)
        .service(handlers::users::check_username_unique)
        .service(handlers::accept_messages::get_accept_messages)
        .service(handlers::accept_messages::update_accept_messages);
}

fn configure_message_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::messages::send_message)
        .service(handlers::messages::get_messages)
        .service(handlers::messages::delete_message);
}

fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid request body: {}", err)).into()
}

fn query_error_handler(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::ValidationError(format!("Invalid query string: {}", err)).into()
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "mystery_message",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
