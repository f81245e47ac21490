//! 공개 사용자 정보 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 클라이언트에 노출해도 되는 사용자 정보
///
/// `password_hash`, `verify_code`, 받은 메시지는 포함하지 않습니다.
///
/// ```json
/// {
///   "_id": "665f1c...",
///   "username": "alice",
///   "email": "alice@example.com",
///   "isVerified": true,
///   "isAcceptingMessages": false,
///   "createdAt": "2024-06-04T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
    pub is_verified: bool,
    pub is_accepting_messages: bool,
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let created_at = user.created_at.try_to_rfc3339_string().unwrap_or_default();

        Self {
            id: user.id_string().unwrap_or_default(),
            username: user.username,
            email: user.email,
            is_verified: user.is_verified,
            is_accepting_messages: user.is_accepting_messages,
            created_at,
        }
    }
}
