//! 테스트용 인메모리 저장소
//!
//! MongoDB 없이 서비스와 HTTP 계층을 검증하기 위한 구현입니다.
//! `MemoryUserStore`는 unique 인덱스처럼 중복 사용자명을 거부합니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::recipes::RecipeStore;
use super::users::UserStore;
use crate::domain::entities::recipes::{Recipe, RecipeChanges};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

#[derive(Default)]
pub struct MemoryRecipeStore {
    recipes: Mutex<Vec<Recipe>>,
    failing: AtomicBool,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.recipes.lock().unwrap().len()
    }

    fn check(&self) -> AppResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(AppError::DatabaseError("server selection timeout".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn find_all(&self) -> AppResult<Vec<Recipe>> {
        self.check()?;
        Ok(self.recipes.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &ObjectId) -> AppResult<Option<Recipe>> {
        self.check()?;
        Ok(self.recipes.lock().unwrap().iter().find(|r| &r.id == id).cloned())
    }

    async fn find_by_tag(&self, tag: &str) -> AppResult<Vec<Recipe>> {
        self.check()?;
        Ok(self
            .recipes
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.tags.iter().any(|t| t == tag))
            .cloned()
            .collect())
    }

    async fn insert(&self, recipe: &Recipe) -> AppResult<()> {
        self.check()?;
        self.recipes.lock().unwrap().push(recipe.clone());
        Ok(())
    }

    async fn update(&self, id: &ObjectId, changes: &RecipeChanges) -> AppResult<Option<Recipe>> {
        self.check()?;
        let mut recipes = self.recipes.lock().unwrap();
        Ok(recipes.iter_mut().find(|r| &r.id == id).map(|recipe| {
            apply_changes(recipe, changes);
            recipe.clone()
        }))
    }

    async fn delete(&self, id: &ObjectId) -> AppResult<bool> {
        self.check()?;
        let mut recipes = self.recipes.lock().unwrap();
        let before = recipes.len();
        recipes.retain(|r| &r.id != id);
        Ok(recipes.len() < before)
    }
}

/// `$set`과 같이 변경 가능한 필드만 덮어씁니다. `_id`, `publishedAt`은 유지됩니다.
fn apply_changes(recipe: &mut Recipe, changes: &RecipeChanges) {
    recipe.name = changes.name.clone();
    recipe.tags = changes.tags.clone();
    recipe.ingredients = changes.ingredients.clone();
    recipe.instructions = changes.instructions.clone();
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(username).cloned())
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.contains_key(&user.username) {
            return Err(AppError::ConflictError("user already exists".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(name: &str, tags: &[&str]) -> RecipeChanges {
        RecipeChanges {
            name: name.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ingredients: vec![],
            instructions: vec![],
        }
    }

    #[actix_web::test]
    async fn test_update_keeps_identity_and_timestamp() {
        let store = MemoryRecipeStore::new();
        let recipe = Recipe::new(changes("Soup", &["starter"]));
        store.insert(&recipe).await.unwrap();

        let updated = store.update(&recipe.id, &changes("Stew", &["main"])).await.unwrap().unwrap();

        assert_eq!(updated.name, "Stew");
        assert_eq!(updated.id, recipe.id);
        assert_eq!(updated.published_at, recipe.published_at);
        assert_eq!(store.find_by_tag("main").await.unwrap().len(), 1);
        assert!(store.find_by_tag("starter").await.unwrap().is_empty());
    }
}
