//! 공통 유틸리티 함수 모듈
//!
//! 요청 데이터 정리와 검증 메시지 수집 등 여러 계층에서 함께 쓰는 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리 유틸리티
//! - [`validation`] - `validator` 기반 커스텀 검증 함수와 에러 메시지 수집

pub mod string_utils;
pub mod validation;

pub use string_utils::*;
pub use validation::*;
