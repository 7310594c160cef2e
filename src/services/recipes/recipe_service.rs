//! # 레시피 캐시-어사이드 서비스
//!
//! 문서 저장소(MongoDB)와 캐시(Redis) 사이의 읽기/쓰기를 조율합니다.
//! 캐시는 저장소 값의 일회성 사본이며, 애플리케이션이 직접 채우고 무효화합니다.
//!
//! ## 캐시 키
//!
//! | 키 | 값 |
//! |----|----|
//! | `recipe:<id>` | 단일 레시피 JSON |
//! | `recipes` | 전체 목록 JSON |
//!
//! ## 실패 처리
//!
//! - 캐시 **조회** 실패는 미스로 취급하지 않고 500으로 보고합니다.
//! - 저장소 조회 후 캐시 **재적재** 실패는 경고 로그만 남기고 저장소 값을 반환합니다.
//! - 저장소 커밋 후 캐시 쓰기가 실패하면 해당 키 삭제로 대체하고, 삭제마저
//!   실패하면 error 로그를 남깁니다. 이미 커밋된 요청은 성공으로 응답하며
//!   남은 불일치는 TTL이 지나면 사라집니다.
//!
//! ```text
//!   get(id) ──► cache GET recipe:<id> ──hit──► 반환
//!                    │miss
//!                    ▼
//!               store find_one ──none──► 404
//!                    │
//!                    ▼
//!               cache SETEX recipe:<id> (실패 시 warn) ──► 반환
//! ```

use std::sync::Arc;
use std::time::Duration;

use mongodb::bson::oid::ObjectId;

use crate::caching::CacheStore;
use crate::domain::dto::recipes::{RecipeRequest, RecipeResponse};
use crate::domain::entities::recipes::Recipe;
use crate::errors::{AppError, AppResult};
use crate::repositories::recipes::RecipeStore;

pub const LIST_KEY: &str = "recipes";

/// 단일 레시피 캐시 키. `id`는 소문자 hex(`ObjectId::to_hex`)여야 합니다.
pub fn recipe_key(id: &str) -> String {
    format!("recipe:{}", id)
}

pub struct RecipeService {
    store: Arc<dyn RecipeStore>,
    cache: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl RecipeService {
    pub fn new(store: Arc<dyn RecipeStore>, cache: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, cache, ttl }
    }

    /// 단일 레시피 조회
    ///
    /// * `ValidationError` - `id`가 ObjectId 형식이 아닌 경우 (저장소 접근 전)
    /// * `NotFound` - 저장소에 없는 경우
    pub async fn get(&self, id: &str) -> AppResult<RecipeResponse> {
        let object_id = parse_id(id)?;
        let key = recipe_key(&object_id.to_hex());

        if let Some(cached) = self.cache.get_json::<RecipeResponse>(&key).await? {
            log::debug!("캐시 히트: {}", key);
            return Ok(cached);
        }

        log::debug!("캐시 미스: {}", key);
        let recipe = self
            .store
            .find_by_id(&object_id)
            .await?
            .ok_or_else(|| not_found(id))?;
        let response = RecipeResponse::from(recipe);

        self.repopulate(&key, &response).await;
        Ok(response)
    }

    /// 전체 목록 조회. 컬렉션이 비어 있으면 빈 목록.
    pub async fn list(&self) -> AppResult<Vec<RecipeResponse>> {
        if let Some(cached) = self.cache.get_json::<Vec<RecipeResponse>>(LIST_KEY).await? {
            log::debug!("캐시 히트: {}", LIST_KEY);
            return Ok(cached);
        }

        log::debug!("캐시 미스: {}", LIST_KEY);
        let recipes: Vec<RecipeResponse> = self
            .store
            .find_all()
            .await?
            .into_iter()
            .map(RecipeResponse::from)
            .collect();

        self.repopulate(LIST_KEY, &recipes).await;
        Ok(recipes)
    }

    /// 새 레시피 생성
    ///
    /// 식별자와 게시 시각을 할당해 저장한 뒤 목록 캐시를 무효화하고
    /// 새 레시피를 캐시에 기록합니다.
    pub async fn create(&self, request: RecipeRequest) -> AppResult<RecipeResponse> {
        let recipe = Recipe::new(request.into_changes());
        self.store.insert(&recipe).await?;

        let response = RecipeResponse::from(recipe);
        log::info!("📝 레시피 생성: {} ({})", response.id, response.name);

        self.invalidate(LIST_KEY).await;
        self.write_through(&recipe_key(&response.id), &response).await;
        Ok(response)
    }

    /// 기존 레시피 수정 (upsert 없음)
    ///
    /// 반환값과 캐시 값은 수정 후 저장소 문서이므로 원래 `publishedAt`을 유지합니다.
    pub async fn update(&self, id: &str, request: RecipeRequest) -> AppResult<RecipeResponse> {
        let object_id = parse_id(id)?;
        let changes = request.into_changes();

        let updated = self
            .store
            .update(&object_id, &changes)
            .await?
            .ok_or_else(|| not_found(id))?;
        let response = RecipeResponse::from(updated);
        log::info!("✏️ 레시피 수정: {}", id);

        self.invalidate(LIST_KEY).await;
        self.write_through(&recipe_key(&response.id), &response).await;
        Ok(response)
    }

    /// 레시피 삭제. 단일/목록 캐시 항목을 모두 무효화합니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_id(id)?;

        if !self.store.delete(&object_id).await? {
            return Err(not_found(id));
        }
        log::info!("🗑️ 레시피 삭제: {}", id);

        self.invalidate(&recipe_key(&object_id.to_hex())).await;
        self.invalidate(LIST_KEY).await;
        Ok(())
    }

    /// 태그 검색. 캐시를 거치지 않고 저장소만 조회합니다.
    ///
    /// * `ValidationError` - 태그가 없거나 비어 있는 경우
    /// * `NotFound` - 일치하는 레시피가 없는 경우
    pub async fn search(&self, tag: Option<&str>) -> AppResult<Vec<RecipeResponse>> {
        let tag = tag
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .ok_or_else(|| AppError::ValidationError("tag query parameter is required".to_string()))?;

        let recipes = self.store.find_by_tag(tag).await?;
        if recipes.is_empty() {
            return Err(AppError::NotFound(format!("{} not found", tag)));
        }

        Ok(recipes.into_iter().map(RecipeResponse::from).collect())
    }

    /// 읽기 경로의 캐시 재적재. 실패해도 요청은 저장소 값으로 성공합니다.
    async fn repopulate<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set_json(key, value, self.ttl).await {
            log::warn!("⚠️ 캐시 재적재 실패 {}: {}", key, e);
        }
    }

    /// 쓰기 경로의 캐시 갱신. 실패 시 오래된 값이 남지 않도록 키를 지웁니다.
    async fn write_through<T: serde::Serialize + ?Sized>(&self, key: &str, value: &T) {
        if let Err(e) = self.cache.set_json(key, value, self.ttl).await {
            log::warn!("⚠️ 캐시 기록 실패 {}: {}, 무효화로 대체", key, e);
            self.invalidate(key).await;
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(e) = self.cache.del(key).await {
            log::error!("❌ 캐시 무효화 실패 {}: {} (TTL 만료 전까지 오래된 값 유지)", key, e);
        }
    }
}

fn parse_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError(format!("'{}' is not a valid id", id)))
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("recipe {} not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::memory::MemoryCache;
    use crate::repositories::memory::MemoryRecipeStore;

    const TTL: Duration = Duration::from_secs(12 * 60 * 60);

    struct Fixture {
        service: RecipeService,
        store: Arc<MemoryRecipeStore>,
        cache: Arc<MemoryCache>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryRecipeStore::new());
        let cache = Arc::new(MemoryCache::new());
        let service = RecipeService::new(store.clone(), cache.clone(), TTL);
        Fixture {
            service,
            store,
            cache,
        }
    }

    fn request(name: &str, tags: &[&str]) -> RecipeRequest {
        RecipeRequest {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec!["water".to_string()],
            instructions: vec!["boil".to_string()],
        }
    }

    #[actix_web::test]
    async fn test_create_writes_through_and_invalidates_list() {
        let f = fixture();
        f.service.list().await.unwrap();
        assert!(f.cache.contains(LIST_KEY));

        let created = f.service.create(request("Soup", &["starter"])).await.unwrap();

        assert!(!f.cache.contains(LIST_KEY));
        assert_eq!(f.cache.ttl_of(&recipe_key(&created.id)), Some(TTL));
        assert_eq!(f.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_serves_from_cache_after_first_read() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.cache.del(&recipe_key(&created.id)).await.unwrap();

        let first = f.service.get(&created.id).await.unwrap();
        assert_eq!(first, created);
        assert!(f.cache.contains(&recipe_key(&created.id)));

        // 저장소 장애 중에도 캐시 히트는 성공
        f.store.set_failing(true);
        assert_eq!(f.service.get(&created.id).await.unwrap(), created);
    }

    #[actix_web::test]
    async fn test_get_invalid_id_never_touches_stores() {
        let f = fixture();
        f.store.set_failing(true);
        f.cache.set_failing(true);

        let err = f.service.get("not-an-id").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(msg) if msg.contains("not a valid id")));
    }

    #[actix_web::test]
    async fn test_get_missing_recipe_is_not_found() {
        let f = fixture();
        let id = ObjectId::new().to_hex();

        let err = f.service.get(&id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(!f.cache.contains(&recipe_key(&id)));
    }

    #[actix_web::test]
    async fn test_cache_read_failure_is_an_error_not_a_miss() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.cache.set_failing(true);

        assert!(matches!(f.service.get(&created.id).await, Err(AppError::RedisError(_))));
        assert!(matches!(f.service.list().await, Err(AppError::RedisError(_))));
    }

    #[actix_web::test]
    async fn test_repopulate_failure_still_returns_store_value() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.cache.del(&recipe_key(&created.id)).await.unwrap();
        f.cache.set_failing_writes(true);

        assert_eq!(f.service.get(&created.id).await.unwrap(), created);
        assert_eq!(f.service.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_failed_write_through_falls_back_to_invalidation() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.service.get(&created.id).await.unwrap();
        f.cache.set_failing_writes(true);

        let updated = f.service.update(&created.id, request("Stew", &[])).await.unwrap();

        assert_eq!(updated.name, "Stew");
        assert!(!f.cache.contains(&recipe_key(&created.id)));

        f.cache.set_failing_writes(false);
        assert_eq!(f.service.get(&created.id).await.unwrap().name, "Stew");
    }

    #[actix_web::test]
    async fn test_mixed_case_ids_share_one_cache_entry() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        let upper = created.id.to_uppercase();

        // 대문자 id로 조회해도 같은 캐시 항목을 사용
        assert_eq!(f.service.get(&upper).await.unwrap(), created);
        assert!(!f.cache.contains(&recipe_key(&upper)));

        f.service.update(&upper, request("Stew", &[])).await.unwrap();
        assert_eq!(f.service.get(&created.id).await.unwrap().name, "Stew");

        f.service.delete(&upper).await.unwrap();
        assert!(!f.cache.contains(&recipe_key(&created.id)));
        let err = f.service.get(&created.id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_write_succeeds_when_cache_is_down() {
        let f = fixture();
        f.cache.set_failing(true);

        let created = f.service.create(request("Soup", &[])).await.unwrap();

        assert_eq!(f.store.len(), 1);
        assert_eq!(created.name, "Soup");
    }

    #[actix_web::test]
    async fn test_update_keeps_published_at_and_refreshes_list() {
        let f = fixture();
        let created = f.service.create(request("Soup", &["starter"])).await.unwrap();
        assert_eq!(f.service.list().await.unwrap()[0].name, "Soup");

        let updated = f.service.update(&created.id, request("Stew", &["main"])).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.published_at, created.published_at);
        let cached: RecipeResponse = serde_json::from_str(&f.cache.raw(&recipe_key(&created.id)).unwrap()).unwrap();
        assert_eq!(cached.name, "Stew");

        let names: Vec<String> = f.service.list().await.unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Stew".to_string()]);
    }

    #[actix_web::test]
    async fn test_update_missing_recipe_does_not_upsert() {
        let f = fixture();
        let id = ObjectId::new().to_hex();

        let err = f.service.update(&id, request("Ghost", &[])).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(f.store.len(), 0);
        assert!(!f.cache.contains(&recipe_key(&id)));
    }

    #[actix_web::test]
    async fn test_delete_invalidates_both_entries() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.service.list().await.unwrap();

        f.service.delete(&created.id).await.unwrap();

        assert!(!f.cache.contains(&recipe_key(&created.id)));
        assert!(!f.cache.contains(LIST_KEY));
        assert!(matches!(f.service.get(&created.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(f.service.delete(&created.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_search_by_tag() {
        let f = fixture();
        f.service.create(request("Soup", &["starter", "vegan"])).await.unwrap();
        f.service.create(request("Steak", &["main"])).await.unwrap();

        let vegan = f.service.search(Some("vegan")).await.unwrap();
        assert_eq!(vegan.len(), 1);
        assert_eq!(vegan[0].name, "Soup");

        let err = f.service.search(Some("dessert")).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "dessert not found"));

        assert!(matches!(f.service.search(None).await, Err(AppError::ValidationError(_))));
        assert!(matches!(f.service.search(Some("  ")).await, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_search_bypasses_cache() {
        let f = fixture();
        f.service.create(request("Soup", &["starter"])).await.unwrap();
        f.cache.set_failing(true);

        assert_eq!(f.service.search(Some("starter")).await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_empty_list_is_ok() {
        let f = fixture();
        assert!(f.service.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_corrupt_cache_entry_is_refetched() {
        let f = fixture();
        let created = f.service.create(request("Soup", &[])).await.unwrap();
        f.cache
            .set_ex(&recipe_key(&created.id), "{not json", TTL)
            .await
            .unwrap();

        assert_eq!(f.service.get(&created.id).await.unwrap(), created);
    }
}
