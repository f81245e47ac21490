//! 익명 메시지 엔티티

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 메시지 본문의 최소 길이 (문자 수)
pub const MESSAGE_MIN_LENGTH: u64 = 10;
/// 메시지 본문의 최대 길이 (문자 수)
pub const MESSAGE_MAX_LENGTH: u64 = 300;

/// 익명 메시지
///
/// 수신자의 `messages` 배열에 내장되며, 보낸 사람 정보는 저장하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 메시지 본문 (10-300자)
    pub content: String,
    /// 수신 시간
    pub created_at: DateTime,
}

impl Message {
    /// 새 메시지 생성 (ID와 수신 시간은 자동 할당)
    pub fn new(content: String) -> Self {
        Self {
            id: ObjectId::new(),
            content,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}
