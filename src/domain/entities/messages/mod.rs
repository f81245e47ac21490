//! Messages Entity Module
//!
//! 사용자 문서 안에 내장(embedded)되어 저장되는 익명 메시지 엔티티입니다.

pub mod message;

pub use message::{Message, MESSAGE_MAX_LENGTH, MESSAGE_MIN_LENGTH};
