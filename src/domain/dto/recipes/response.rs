use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::recipes::Recipe;

/// 레시피 응답 DTO
///
/// HTTP 응답 본문이자 캐시에 저장되는 JSON 표현입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        let published_at =
            DateTime::from_timestamp_millis(recipe.published_at.timestamp_millis()).unwrap_or_default();

        Self {
            id: recipe.id_string(),
            name: recipe.name,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            published_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::recipes::RecipeChanges;

    #[test]
    fn test_response_wire_format() {
        let recipe = Recipe::new(RecipeChanges {
            name: "Soup".to_string(),
            tags: vec!["starter".to_string()],
            ingredients: vec![],
            instructions: vec![],
        });
        let id = recipe.id_string();

        let json = serde_json::to_value(RecipeResponse::from(recipe)).unwrap();

        assert_eq!(json["id"], id);
        assert_eq!(json["id"].as_str().unwrap().len(), 24);
        assert!(json["publishedAt"].is_string());
        assert!(json.get("_id").is_none());
    }
}
