//! 익명 메시지 전송, 조회, 삭제
//!
//! 메시지는 수신자의 사용자 문서에 내장되므로 모든 연산은 한 문서에만 작용합니다.

use std::sync::Arc;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::messages::Message,
    errors::{AppError, AppResult},
    repositories::users::UserStore,
    services::users::USER_NOT_FOUND,
    utils::validate_required_string,
};

pub const NOT_ACCEPTING_MESSAGES: &str = "User is not accepting messages";
pub const MESSAGE_NOT_FOUND: &str = "Message not found or already deleted";
pub const DELETE_MESSAGE_FAILED: &str = "Error deleting message";

pub struct MessageService {
    user_store: Arc<dyn UserStore>,
}

impl MessageService {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }

    /// `username`에게 익명 메시지를 보냅니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 수신자 이름이 비어 있음
    /// * `AppError::NotFound` - 수신자 없음
    /// * `AppError::AuthorizationError` - 수신자가 메시지를 받지 않는 중
    pub async fn send(&self, username: &str, content: &str) -> AppResult<Message> {
        let username = validate_required_string(username, "Username")?;
        let recipient = self.user_store
            .find_by_username(&username)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        if !recipient.is_accepting_messages {
            return Err(AppError::AuthorizationError(NOT_ACCEPTING_MESSAGES.to_string()));
        }

        let id = recipient.id_string().ok_or_else(|| {
            AppError::InternalError("Stored user has no id".to_string())
        })?;
        let message = Message::new(content.to_string());

        if !self.user_store.push_message(&id, message.clone()).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(message)
    }

    /// 세션 사용자의 메시지를 최신순으로 반환합니다.
    pub async fn list(&self, user_id: &str) -> AppResult<Vec<Message>> {
        let user = self.user_store
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(user.messages_newest_first())
    }

    /// 세션 사용자의 메시지 한 건을 삭제합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 메시지 ID 형식 오류
    /// * `AppError::NotFound` - 해당 메시지가 없음
    /// * `AppError::ServerError` - 저장소 오류
    pub async fn delete(&self, user_id: &str, message_id: &str) -> AppResult<()> {
        if ObjectId::parse_str(message_id).is_err() {
            return Err(AppError::ValidationError(format!("Invalid message id: {}", message_id)));
        }

        match self.user_store.remove_message(user_id, message_id).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(AppError::NotFound(MESSAGE_NOT_FOUND.to_string())),
            Err(e) => {
                log::error!("Failed to delete message {} of {}: {}", message_id, user_id, e);
                Err(AppError::ServerError(DELETE_MESSAGE_FAILED.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::DateTime;
    use crate::domain::entities::users::User;
    use crate::repositories::users::memory_store::MemoryUserStore;

    async fn setup() -> (Arc<MemoryUserStore>, MessageService, String) {
        let store = Arc::new(MemoryUserStore::new());
        let mut user = User::new_unverified(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
            "123456".to_string(),
            DateTime::now(),
        );
        user.is_verified = true;
        let user = store.create(user).await.unwrap();
        let id = user.id_string().unwrap();
        (store.clone(), MessageService::new(store), id)
    }

    #[actix_web::test]
    async fn test_send_and_list_newest_first() {
        let (store, service, id) = setup().await;

        service.send("alice", "first anonymous note").await.unwrap();
        service.send("alice", "second anonymous note").await.unwrap();
        store.update_raw("alice", |u| {
            u.messages[0].created_at = DateTime::from_millis(1_000);
            u.messages[1].created_at = DateTime::from_millis(2_000);
        });

        let messages = service.list(&id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "second anonymous note");
    }

    #[actix_web::test]
    async fn test_send_to_unknown_user() {
        let (_, service, _) = setup().await;
        let result = service.send("ghost", "hello there friend").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let result = service.send("   ", "hello there friend").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));

        service.send("  alice ", "padded recipient name").await.unwrap();
    }

    #[actix_web::test]
    async fn test_send_refused_when_not_accepting() {
        let (store, service, _) = setup().await;
        store.update_raw("alice", |u| u.is_accepting_messages = false);

        let result = service.send("alice", "hello there friend").await;
        assert!(matches!(result, Err(AppError::AuthorizationError(msg)) if msg == NOT_ACCEPTING_MESSAGES));
        assert!(store.snapshot("alice").unwrap().messages.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_message() {
        let (_, service, id) = setup().await;
        let message = service.send("alice", "hello there friend").await.unwrap();

        service.delete(&id, &message.id_string()).await.unwrap();
        assert!(service.list(&id).await.unwrap().is_empty());

        let again = service.delete(&id, &message.id_string()).await;
        assert!(matches!(again, Err(AppError::NotFound(msg)) if msg == MESSAGE_NOT_FOUND));
    }

    #[actix_web::test]
    async fn test_delete_malformed_id() {
        let (_, service, id) = setup().await;
        let result = service.delete(&id, "nope").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
