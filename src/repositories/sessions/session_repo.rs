//! # 세션 리포지토리
//!
//! 쿠키 인증 방식의 서버 측 세션 저장소입니다.
//! 캐시 저장소(Redis)에 `session:<sha256(token) hex>` 키로 저장하며,
//! 만료는 키 TTL이 담당합니다. 폐기 목록은 두지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::caching::CacheStore;
use crate::domain::models::auth::SessionRecord;
use crate::errors::AppResult;

pub struct SessionRepository {
    cache: Arc<dyn CacheStore>,
}

impl SessionRepository {
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }

    /// 세션 토큰의 저장 키. 원본 토큰은 저장하지 않습니다.
    pub fn key_for(token: &str) -> String {
        format!("session:{:x}", Sha256::digest(token.as_bytes()))
    }

    pub async fn save(&self, token: &str, record: &SessionRecord, ttl: Duration) -> AppResult<()> {
        self.cache.set_json(&Self::key_for(token), record, ttl).await
    }

    pub async fn find(&self, token: &str) -> AppResult<Option<SessionRecord>> {
        self.cache.get_json(&Self::key_for(token)).await
    }

    pub async fn delete(&self, token: &str) -> AppResult<()> {
        self.cache.del(&Self::key_for(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::memory::MemoryCache;

    #[test]
    fn test_key_is_digest_of_token() {
        let key = SessionRepository::key_for("3f2a9c7e-token");

        assert!(key.starts_with("session:"));
        assert_eq!(key.len(), "session:".len() + 64);
        assert!(!key.contains("3f2a9c7e-token"));
        assert_eq!(key, SessionRepository::key_for("3f2a9c7e-token"));
    }

    #[actix_web::test]
    async fn test_save_find_delete() {
        let memory = Arc::new(MemoryCache::new());
        let repo = SessionRepository::new(memory.clone());
        let record = SessionRecord {
            username: "alice".to_string(),
            expires_at: 1_700_000_600,
        };

        repo.save("token", &record, Duration::from_secs(600)).await.unwrap();
        assert_eq!(
            memory.ttl_of(&SessionRepository::key_for("token")),
            Some(Duration::from_secs(600))
        );
        assert_eq!(repo.find("token").await.unwrap(), Some(record));
        assert_eq!(repo.find("other").await.unwrap(), None);

        repo.delete("token").await.unwrap();
        assert_eq!(repo.find("token").await.unwrap(), None);
    }
}
