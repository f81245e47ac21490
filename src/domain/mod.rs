//! # Domain Layer
//!
//! Mystery Message의 도메인 타입들을 모아 둔 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← MongoDB에 저장되는 문서 (User, 내장 Message)
//! ├── dto/        ← HTTP 요청/응답 본문과 검증 규칙
//! └── models/     ← 요청 처리 중에만 쓰이는 모델 (세션 클레임, 세션 사용자)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
