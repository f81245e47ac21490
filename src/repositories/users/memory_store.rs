//! 테스트용 인메모리 사용자 저장소
//!
//! MongoDB 없이 서비스와 핸들러를 검증하기 위한 [`UserStore`] 구현입니다.
//! 유니크 제약(email, username)을 동일하게 흉내 내고, `set_failing`으로
//! 모든 연산이 `DatabaseError`를 반환하도록 만들 수 있습니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};
use crate::{
    domain::entities::{messages::Message, users::User},
    errors::{AppError, AppResult},
    repositories::users::UserStore,
};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    failing: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 연산이 `DatabaseError`로 실패하도록 설정
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// 저장된 사용자 수
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 저장된 사용자를 직접 꺼내 봅니다.
    pub fn snapshot(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.username == username).cloned()
    }

    /// 사용자 문서를 직접 수정합니다 (만료 시간 조작 등).
    pub fn update_raw<F: FnOnce(&mut User)>(&self, username: &str, f: F) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter_mut().find(|u| u.username == username) {
            f(user);
        }
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::DatabaseError("connection refused".to_string()))
        } else {
            Ok(())
        }
    }

    fn parse_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id).map_err(|_| AppError::ValidationError(format!("Invalid id: {}", id)))
    }

    fn find_where<P: Fn(&User) -> bool>(&self, predicate: P) -> AppResult<Option<User>> {
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| predicate(u)).cloned())
    }

    fn modify<F: FnOnce(&mut User) -> bool>(&self, id: &str, f: F) -> AppResult<Option<bool>> {
        self.check()?;
        let object_id = Self::parse_id(id)?;
        let mut users = self.users.lock().unwrap();
        Ok(users
            .iter_mut()
            .find(|u| u.id == Some(object_id))
            .map(|user| {
                let changed = f(user);
                if changed {
                    user.updated_at = DateTime::now();
                }
                changed
            }))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = Self::parse_id(id)?;
        self.find_where(|u| u.id == Some(object_id))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_where(|u| u.username == username)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.find_where(|u| u.email == email)
    }

    async fn find_by_email_or_username(&self, identifier: &str) -> AppResult<Option<User>> {
        let email = identifier.to_lowercase();
        self.find_where(|u| u.email == email || u.username == identifier)
    }

    async fn find_verified_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.find_where(|u| u.is_verified && u.username == username)
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        self.check()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email || u.username == user.username) {
            return Err(AppError::ConflictError("Username or email is already taken".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn reset_pending_registration(
        &self,
        id: &str,
        password_hash: &str,
        verify_code: &str,
        verify_code_expiry: DateTime,
    ) -> AppResult<bool> {
        let result = self.modify(id, |user| {
            if user.is_verified {
                return false;
            }
            user.password_hash = password_hash.to_string();
            user.verify_code = verify_code.to_string();
            user.verify_code_expiry = verify_code_expiry;
            true
        })?;
        Ok(result.unwrap_or(false))
    }

    async fn mark_verified(&self, id: &str) -> AppResult<bool> {
        let result = self.modify(id, |user| {
            user.is_verified = true;
            true
        })?;
        Ok(result.is_some())
    }

    async fn set_accepting_messages(&self, id: &str, accepting: bool) -> AppResult<Option<User>> {
        let object_id = Self::parse_id(id)?;
        let updated = self.modify(id, |user| {
            user.is_accepting_messages = accepting;
            true
        })?;
        match updated {
            Some(_) => self.find_where(|u| u.id == Some(object_id)),
            None => Ok(None),
        }
    }

    async fn push_message(&self, user_id: &str, message: Message) -> AppResult<bool> {
        let result = self.modify(user_id, |user| {
            user.messages.push(message);
            true
        })?;
        Ok(result.is_some())
    }

    async fn remove_message(&self, user_id: &str, message_id: &str) -> AppResult<bool> {
        let message_object_id = Self::parse_id(message_id)?;
        let result = self.modify(user_id, |user| {
            let before = user.messages.len();
            user.messages.retain(|m| m.id != message_object_id);
            user.messages.len() != before
        })?;
        Ok(result.unwrap_or(false))
    }
}
