//! 사용자 저장소 trait
//!
//! 모든 연산은 사용자 문서 하나에만 작용하며, 문서 단위 원자성만 가정합니다.

use async_trait::async_trait;
use mongodb::bson::DateTime;
use crate::domain::entities::messages::Message;
use crate::domain::entities::users::User;
use crate::errors::AppResult;

/// 사용자 문서 저장소
///
/// ID는 모두 ObjectId의 16진수 문자열 표현입니다. 형식이 잘못된 ID는
/// `AppError::ValidationError`가 됩니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// ID로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 사용자명으로 사용자 조회
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자 조회
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 이메일 또는 사용자명이 `identifier`와 같은 사용자 조회 (로그인용)
    async fn find_by_email_or_username(&self, identifier: &str) -> AppResult<Option<User>>;

    /// 인증을 마친 사용자 중 사용자명이 같은 사용자 조회
    async fn find_verified_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자 저장. 이메일/사용자명이 겹치면 `ConflictError`.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 인증 전 사용자의 비밀번호와 인증 코드를 새로 발급한 값으로 교체
    async fn reset_pending_registration(
        &self,
        id: &str,
        password_hash: &str,
        verify_code: &str,
        verify_code_expiry: DateTime,
    ) -> AppResult<bool>;

    /// 이메일 인증 완료 처리
    async fn mark_verified(&self, id: &str) -> AppResult<bool>;

    /// 메시지 수신 여부를 바꾸고 변경된 사용자를 반환. 사용자가 없으면 `None`.
    async fn set_accepting_messages(&self, id: &str, accepting: bool) -> AppResult<Option<User>>;

    /// 사용자 문서에 메시지 추가. 사용자가 없으면 `false`.
    async fn push_message(&self, user_id: &str, message: Message) -> AppResult<bool>;

    /// 사용자 문서에서 메시지 제거. 지운 메시지가 없으면 `false`.
    async fn remove_message(&self, user_id: &str, message_id: &str) -> AppResult<bool>;
}
