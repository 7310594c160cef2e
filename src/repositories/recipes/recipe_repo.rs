//! # 레시피 리포지토리 구현
//!
//! `recipes` 컬렉션에 대한 데이터 액세스 계층입니다.
//! 캐싱은 이 계층이 아니라 `RecipeService`가 담당합니다.
//!
//! ## 특징
//!
//! - **trait 경계**: 서비스는 [`RecipeStore`]에만 의존하므로 테스트에서
//!   메모리 구현으로 교체할 수 있습니다.
//! - **제한 시간**: 모든 연산은 `MONGO_TIMEOUT_SECONDS` 안에 끝나야 합니다.
//! - **upsert 금지**: 수정은 이미 존재하는 문서에만 적용됩니다.

use std::time::Duration;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::{FindOneAndUpdateOptions, ReturnDocument};
use mongodb::Collection;

use crate::config::DatabaseConfig;
use crate::db::{with_deadline, Database};
use crate::domain::entities::recipes::{Recipe, RecipeChanges};
use crate::errors::AppResult;

/// 레시피 문서 저장소
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// 모든 레시피를 조회합니다. 컬렉션이 비어 있으면 빈 벡터를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<Recipe>>;

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Recipe>>;

    /// `tags` 배열에 주어진 태그를 포함하는 레시피를 조회합니다.
    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Recipe>>;

    async fn insert(&self, recipe: &Recipe) -> AppResult<()>;

    /// 변경 가능한 필드를 갱신하고 갱신 후 문서를 반환합니다.
    /// 문서가 없으면 `Ok(None)`이며 새 문서를 만들지 않습니다.
    async fn update(&self, id: &ObjectId, changes: &RecipeChanges) -> AppResult<Option<Recipe>>;

    /// 문서를 삭제했으면 `true`, 대상이 없었으면 `false`
    async fn delete(&self, id: &ObjectId) -> AppResult<bool>;
}

/// MongoDB 기반 레시피 리포지토리
///
/// ```rust,ignore
/// let repo = RecipeRepository::new(&database);
/// let recipes = repo.find_by_tag("vegan").await?;
/// ```
pub struct RecipeRepository {
    collection: Collection<Recipe>,
    timeout: Duration,
}

impl RecipeRepository {
    pub const COLLECTION: &'static str = "recipes";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection(Self::COLLECTION),
            timeout: DatabaseConfig::timeout(),
        }
    }
}

#[async_trait]
impl RecipeStore for RecipeRepository {
    async fn find_all(&self) -> AppResult<Vec<Recipe>> {
        with_deadline(self.timeout, "recipes.find", async {
            let recipes: Vec<Recipe> = self.collection.find(doc! {}).await?.try_collect().await?;
            Ok::<_, mongodb::error::Error>(recipes)
        })
        .await
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Recipe>> {
        with_deadline(self.timeout, "recipes.find_one", async {
            self.collection.find_one(doc! { "_id": *id }).await
        })
        .await
    }

    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Recipe>> {
        with_deadline(self.timeout, "recipes.find_by_tag", async {
            let recipes: Vec<Recipe> = self
                .collection
                .find(doc! { "tags": tag })
                .await?
                .try_collect()
                .await?;
            Ok::<_, mongodb::error::Error>(recipes)
        })
        .await
    }

    async fn insert(&self, recipe: &Recipe) -> AppResult<()> {
        with_deadline(self.timeout, "recipes.insert_one", async {
            self.collection.insert_one(recipe).await
        })
        .await?;

        log::debug!("레시피 저장 완료: {}", recipe.id);
        Ok(())
    }

    async fn update(&self, id: &ObjectId, changes: &RecipeChanges) -> AppResult<Option<Recipe>> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .upsert(false)
            .build();

        with_deadline(self.timeout, "recipes.find_one_and_update", async {
            self.collection
                .find_one_and_update(doc! { "_id": *id }, doc! { "$set": changes.to_set_document() })
                .with_options(options)
                .await
        })
        .await
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        let result = with_deadline(self.timeout, "recipes.delete_one", async {
            self.collection.delete_one(doc! { "_id": *id }).await
        })
        .await?;

        Ok(result.deleted_count > 0)
    }
}
