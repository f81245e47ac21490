//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::entities::messages::Message;

/// 인증 코드 유효 시간 (1시간)
pub const VERIFY_CODE_TTL_MILLIS: i64 = 60 * 60 * 1000;

fn default_accepting_messages() -> bool {
    true
}

/// 사용자 엔티티
///
/// 이메일 인증을 마친 사용자(`is_verified`)만 로그인할 수 있고,
/// `is_accepting_messages`가 켜져 있을 때만 익명 메시지를 받습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 공개 페이지 주소에 사용)
    pub username: String,
    /// 이메일 (unique, 소문자로 정규화되어 저장)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 이메일 인증 코드 (숫자 6자리)
    pub verify_code: String,
    /// 인증 코드 만료 시간
    pub verify_code_expiry: DateTime,
    /// 이메일 인증 여부
    pub is_verified: bool,
    /// 익명 메시지 수신 여부
    #[serde(default = "default_accepting_messages")]
    pub is_accepting_messages: bool,
    /// 받은 메시지 목록
    #[serde(default)]
    pub messages: Vec<Message>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 인증 전 상태의 새 사용자 생성
    ///
    /// 메시지 수신은 기본으로 켜져 있고, 받은 메시지는 비어 있습니다.
    pub fn new_unverified(
        username: String,
        email: String,
        password_hash: String,
        verify_code: String,
        verify_code_expiry: DateTime,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            password_hash,
            verify_code,
            verify_code_expiry,
            is_verified: false,
            is_accepting_messages: true,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 지금으로부터 인증 코드 유효 시간이 지난 시각
    pub fn verify_code_expiry_from(now: DateTime) -> DateTime {
        DateTime::from_millis(now.timestamp_millis() + VERIFY_CODE_TTL_MILLIS)
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 제출된 인증 코드가 저장된 코드와 같은지 확인
    pub fn verify_code_matches(&self, code: &str) -> bool {
        !self.verify_code.is_empty() && self.verify_code == code.trim()
    }

    /// 인증 코드가 `now` 기준으로 만료되었는지 확인
    pub fn is_verify_code_expired(&self, now: DateTime) -> bool {
        self.verify_code_expiry <= now
    }

    /// 받은 메시지를 최신순으로 반환
    pub fn messages_newest_first(&self) -> Vec<Message> {
        let mut messages = self.messages.clone();
        messages.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        messages
    }
}
