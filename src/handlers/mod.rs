//! HTTP 핸들러 모듈
//!
//! | 메서드 | 경로 | 세션 | 핸들러 |
//! |--------|------|------|--------|
//! | `POST` | `/api/auth/sign-in` | - | [`auth::sign_in`] |
//! | `POST` | `/api/auth/sign-out` | - | [`auth::sign_out`] |
//! | `GET` | `/api/auth/session` | 선택 | [`auth::session`] |
//! | `POST` | `/api/sign-up` | - | [`users::sign_up`] |
//! | `POST` | `/api/verify-code` | - | [`users::verify_code`] |
//! | `GET` | `/api/check-username-unique` | - | [`users::check_username_unique`] |
//! | `GET` | `/api/accept-messages` | 필수 | [`accept_messages::get_accept_messages`] |
//! | `POST` | `/api/accept-messages` | 필수 | [`accept_messages::update_accept_messages`] |
//! | `POST` | `/api/send-message` | - | [`messages::send_message`] |
//! | `GET` | `/api/get-messages` | 필수 | [`messages::get_messages`] |
//! | `DELETE` | `/api/delete-message/{message_id}` | 필수 | [`messages::delete_message`] |
//!
//! 모든 응답은 `{ "success": bool, "message": string }` 봉투를 기본으로 합니다.

pub mod auth;
pub mod users;
pub mod accept_messages;
pub mod messages;
