//! # Repositories
//!
//! 저장소 접근 계층입니다. 서비스는 구체 타입이 아닌 trait 객체
//! (`Arc<dyn RecipeStore>`, `Arc<dyn UserStore>`)에 의존합니다.
//!
//! - `recipes`: MongoDB `recipes` 컬렉션
//! - `users`: MongoDB `users` 컬렉션 (username unique 인덱스)
//! - `sessions`: 캐시 저장소에 보관하는 쿠키 세션

pub mod recipes;
pub mod sessions;
pub mod users;

#[cfg(test)]
pub mod memory;
