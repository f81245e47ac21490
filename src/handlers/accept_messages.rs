//! # Accept-Messages HTTP Handlers
//!
//! 세션 사용자의 익명 메시지 수신 여부를 조회/변경합니다.
//! 두 엔드포인트 모두 세션이 없으면 401 `Not authenticated`를 돌려줍니다.
//!
//! 조회 값은 토큰에 실린 값이 아니라 데이터베이스의 최신 값입니다.
//! 토큰의 `isAcceptingMessages`는 로그인 시점의 스냅샷일 뿐입니다.

use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AppState,
    domain::dto::users::{AcceptMessagesRequest, AcceptMessagesStatusResponse, AcceptMessagesUpdateResponse, UserResponse},
    domain::models::session::SessionUser,
    errors::AppError,
};

#[post("/accept-messages")]
pub async fn update_accept_messages(
    user: SessionUser,
    state: web::Data<AppState>,
    payload: web::Json<AcceptMessagesRequest>,
) -> Result<HttpResponse, AppError> {
    let updated = state.users
        .set_accepting_messages(&user.id, payload.accept_messages)
        .await?;

    log::info!("메시지 수신 설정 변경 - 사용자: {}, 수신: {}", user.username, updated.is_accepting_messages);

    Ok(HttpResponse::Ok().json(AcceptMessagesUpdateResponse {
        success: true,
        message: "Message acceptance status updated successfully".to_string(),
        updated_user: UserResponse::from(updated),
    }))
}

#[get("/accept-messages")]
pub async fn get_accept_messages(
    user: SessionUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let is_accepting_messages = state.users.is_accepting_messages(&user.id).await?;

    Ok(HttpResponse::Ok().json(AcceptMessagesStatusResponse {
        success: true,
        is_accepting_messages,
    }))
}
