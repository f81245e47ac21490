//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션에 대한 [`UserStore`] 구현입니다.
//!
//! ## 특징
//!
//! - **지연 연결**: 모든 연산은 [`DbConnector::database`]로 시작하므로, 첫 요청에서
//!   연결이 수립되고 이후에는 같은 연결을 재사용합니다.
//! - **데이터 무결성**: email, username 유니크 인덱스. 중복 키 에러는 `ConflictError`로 변환
//! - **문서 단위 갱신**: `$set`, `$push`, `$pull`로 필요한 필드만 변경

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime},
    error::{ErrorKind, WriteFailure},
    options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use crate::{
    db::DbConnector,
    domain::entities::{messages::Message, users::User},
    errors::{AppError, AppResult, ErrorContext},
    repositories::users::UserStore,
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `username` (unique)
/// - `created_at` (desc)
pub struct UserRepository {
    /// 지연 연결기 (애플리케이션 상태에서 공유)
    connector: Arc<DbConnector>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(connector: Arc<DbConnector>) -> Self {
        Self { connector }
    }

    /// 연결을 보장한 뒤 `users` 컬렉션 핸들을 반환합니다.
    async fn collection(&self) -> AppResult<Collection<User>> {
        let database = self.connector.database().await?;
        Ok(database.get_database().collection::<User>(Self::COLLECTION))
    }

    async fn find_one(&self, filter: mongodb::bson::Document) -> AppResult<Option<User>> {
        self.collection()
            .await?
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다. 이미 있는 인덱스는 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let collection = self.collection().await?;

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        collection
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("Invalid id: {}", id)))
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        self.find_one(doc! { "_id": object_id }).await
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "username": username }).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "email": email }).await
    }

    async fn find_by_email_or_username(&self, identifier: &str) -> AppResult<Option<User>> {
        self.find_one(doc! {
            "$or": [
                { "email": identifier.to_lowercase() },
                { "username": identifier },
            ]
        })
        .await
    }

    async fn find_verified_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_one(doc! { "username": username, "is_verified": true }).await
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let result = self.collection()
            .await?
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("Username or email is already taken".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn reset_pending_registration(
        &self,
        id: &str,
        password_hash: &str,
        verify_code: &str,
        verify_code_expiry: DateTime,
    ) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection()
            .await?
            .update_one(
                doc! { "_id": object_id, "is_verified": false },
                doc! { "$set": {
                    "password_hash": password_hash,
                    "verify_code": verify_code,
                    "verify_code_expiry": verify_code_expiry,
                    "updated_at": DateTime::now(),
                }},
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn mark_verified(&self, id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(id)?;

        let result = self.collection()
            .await?
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "is_verified": true, "updated_at": DateTime::now() } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn set_accepting_messages(&self, id: &str, accepting: bool) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .await?
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "is_accepting_messages": accepting, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn push_message(&self, user_id: &str, message: Message) -> AppResult<bool> {
        let object_id = parse_object_id(user_id)?;
        let message_doc = mongodb::bson::to_document(&message)
            .context("Failed to encode message")?;

        let result = self.collection()
            .await?
            .update_one(
                doc! { "_id": object_id },
                doc! { "$push": { "messages": message_doc } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }

    async fn remove_message(&self, user_id: &str, message_id: &str) -> AppResult<bool> {
        let object_id = parse_object_id(user_id)?;
        let message_object_id = parse_object_id(message_id)?;

        let result = self.collection()
            .await?
            .update_one(
                doc! { "_id": object_id },
                doc! { "$pull": { "messages": { "_id": message_object_id } } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.modified_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id() {
        assert!(parse_object_id("665f1c2ab0c1d2e3f4a5b6c7").is_ok());
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_invalid_id_rejected_before_connecting() {
        let connector = Arc::new(DbConnector::new("mongodb://127.0.0.1:1", "mystery_message_test"));
        let repo = UserRepository::new(connector.clone());

        let result = repo.find_by_id("zzz").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert!(!connector.is_connected());
    }
}
