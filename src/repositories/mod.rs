//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserStore`](users::UserStore) trait에만 의존하고,
//! 실제 구현은 MongoDB 기반의 [`UserRepository`](users::UserRepository)입니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let repo = UserRepository::new(connector.clone());
//! let user = repo.find_by_email_or_username("alice").await?;
//! ```

pub mod users;
