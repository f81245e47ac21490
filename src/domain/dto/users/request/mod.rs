//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON/쿼리 데이터를 구조화된 타입으로 변환하고
//! `validator`로 검증합니다. 검증 실패는 핸들러에서 400 응답으로 바뀝니다.

pub mod sign_up_request;
pub mod verify_code_request;
pub mod username_query;
pub mod accept_messages_request;

pub use sign_up_request::SignUpRequest;
pub use verify_code_request::VerifyCodeRequest;
pub use username_query::UsernameQuery;
pub use accept_messages_request::AcceptMessagesRequest;
