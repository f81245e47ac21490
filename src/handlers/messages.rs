//! # Message HTTP Handlers
//!
//! 공개 페이지에서의 익명 메시지 전송과, 받은 메시지 조회/삭제입니다.

use actix_web::{delete, get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppState,
    domain::dto::{
        common::ApiResponse,
        messages::{MessageResponse, MessagesResponse, SendMessageRequest},
    },
    domain::models::session::SessionUser,
    errors::AppError,
};

#[post("/send-message")]
pub async fn send_message(
    state: web::Data<AppState>,
    payload: web::Json<SendMessageRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    state.messages.send(&payload.username, &payload.content).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok("Message sent successfully")))
}

#[get("/get-messages")]
pub async fn get_messages(
    user: SessionUser,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let messages = state.messages.list(&user.id).await?;

    Ok(HttpResponse::Ok().json(MessagesResponse {
        success: true,
        messages: messages.into_iter().map(MessageResponse::from).collect(),
    }))
}

#[delete("/delete-message/{message_id}")]
pub async fn delete_message(
    user: SessionUser,
    state: web::Data<AppState>,
    message_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.messages.delete(&user.id, &message_id).await?;

    log::info!("메시지 삭제 - 사용자: {}, 메시지: {}", user.username, message_id);

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Message deleted")))
}
