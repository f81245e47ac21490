//! 사용자 데이터 액세스 모듈
//!
//! - [`user_store`] - 서비스 계층이 의존하는 저장소 trait
//! - [`user_repo`] - MongoDB `users` 컬렉션 구현

pub mod user_store;
pub mod user_repo;
#[cfg(test)]
pub mod memory_store;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
