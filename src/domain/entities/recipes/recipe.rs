//! Recipe Entity Implementation
//!
//! 문서 저장소(MongoDB `recipes` 컬렉션)에 저장되는 레시피 엔티티입니다.
//! 식별자와 게시 시각은 생성 시 한 번 할당되며 이후 변경되지 않습니다.

use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

/// 레시피 문서
///
/// ```json
/// {
///   "_id": ObjectId("65f0c0ffee0000000000beef"),
///   "name": "Oregano Marinated Chicken",
///   "tags": ["main", "chicken"],
///   "ingredients": ["4 chicken thighs", "1 tsp oregano"],
///   "instructions": ["Marinate", "Grill"],
///   "publishedAt": ISODate("2024-03-12T09:00:00Z")
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime,
}

impl Recipe {
    /// 새 식별자와 현재 시각을 할당하여 레시피를 생성합니다.
    pub fn new(changes: RecipeChanges) -> Self {
        Self {
            id: ObjectId::new(),
            name: changes.name,
            tags: changes.tags,
            ingredients: changes.ingredients,
            instructions: changes.instructions,
            published_at: DateTime::now(),
        }
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// 레시피에서 수정 가능한 필드 묶음
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeChanges {
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl RecipeChanges {
    /// `$set` 연산자에 넣을 문서
    pub fn to_set_document(&self) -> Document {
        doc! {
            "name": &self.name,
            "tags": &self.tags,
            "ingredients": &self.ingredients,
            "instructions": &self.instructions,
        }
    }
}
