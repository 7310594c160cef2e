//! 캐시 저장소 추상화
//!
//! 서비스 계층은 Redis 클라이언트 대신 [`CacheStore`] trait 객체에 의존합니다.
//! 구현체는 문자열 값만 다루고, JSON 직렬화는 `dyn CacheStore`의
//! 보조 메서드가 담당합니다.
//!
//! 캐시 미스(`Ok(None)`)와 캐시 장애(`Err(AppError::RedisError)`)는
//! 항상 구분됩니다. 호출자가 장애를 미스로 취급하려면 명시적으로 처리해야 합니다.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::errors::{AppError, AppResult};

/// TTL을 지원하는 키-값 캐시
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// 키의 값을 조회합니다. 키가 없으면 `Ok(None)`.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// 값을 저장하고 `ttl` 후 만료되도록 합니다.
    async fn set_ex(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()>;

    /// 키를 삭제합니다. 키가 없어도 성공입니다.
    async fn del(&self, key: &str) -> AppResult<()>;
}

impl dyn CacheStore {
    /// JSON으로 저장된 값을 역직렬화하여 조회합니다.
    ///
    /// 저장된 값이 현재 타입으로 해석되지 않으면 해당 키를 지우고
    /// 미스로 처리합니다. 캐시 장애는 그대로 에러로 반환됩니다.
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let Some(raw) = self.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                log::warn!("⚠️ 손상된 캐시 항목 제거: {} ({})", key, e);
                self.del(key).await?;
                Ok(None)
            }
        }
    }

    /// 값을 JSON으로 직렬화하여 TTL과 함께 저장합니다.
    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::InternalError(format!("캐시 직렬화 실패: {}", e)))?;
        self.set_ex(key, &json, ttl).await
    }
}
