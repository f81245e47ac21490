//! 익명 메시지 서비스 모듈

pub mod message_service;

pub use message_service::*;
