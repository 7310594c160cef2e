//! 캐싱 계층 모듈
//!
//! Redis를 백엔드로 하는 캐시 지원과 JSON 기반 객체 직렬화를 제공합니다.
//!
//! # 주요 기능
//!
//! - [`CacheStore`] trait: 서비스가 의존하는 캐시 추상화
//! - [`RedisClient`]: `ConnectionManager` 기반 Redis 구현체
//! - 명령 단위 타임아웃, 미스와 장애의 명확한 구분
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::{CacheStore, RedisClient};
//!
//! let cache: Arc<dyn CacheStore> = Arc::new(RedisClient::new().await?);
//! cache.set_json("recipes", &recipes, ttl).await?;
//! let cached: Option<Vec<RecipeResponse>> = cache.get_json("recipes").await?;
//! cache.del("recipes").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! REDIS_TIMEOUT_MILLIS=1000
//! ```

pub mod cache_store;
pub mod redis;
#[cfg(test)]
pub mod memory;

pub use cache_store::CacheStore;
pub use self::redis::RedisClient;
