//! 레시피 요청 DTO
//!
//! 생성(`POST`)과 수정(`PUT`)은 같은 본문 형식을 사용합니다.
//! 식별자와 게시 시각은 서버가 할당하므로 본문에 있어도 무시됩니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::entities::recipes::RecipeChanges;
use crate::utils::string_utils::{deserialize_optional_string, is_valid_string, trim_string};

/// 레시피 생성/수정 요청
///
/// ```json
/// {
///   "name": "Oregano Marinated Chicken",
///   "tags": ["main", "chicken"],
///   "ingredients": ["4 chicken thighs"],
///   "instructions": ["Marinate", "Grill"]
/// }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecipeRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

impl RecipeRequest {
    /// 검증된 요청을 엔티티 변경 내용으로 변환합니다.
    pub fn into_changes(self) -> RecipeChanges {
        RecipeChanges {
            name: trim_string(&self.name),
            tags: self.tags,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

fn validate_not_blank(name: &str) -> Result<(), ValidationError> {
    if !is_valid_string(name) {
        return Err(ValidationError::new("blank_name").with_message("name must not be blank".into()));
    }
    Ok(())
}

/// `GET /recipes/search?tag=` 쿼리 파라미터
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub tag: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_lists_default_to_empty() {
        let request: RecipeRequest = serde_json::from_str(r#"{"name": "Toast"}"#).unwrap();

        assert!(request.validate().is_ok());
        assert!(request.tags.is_empty());
        assert!(request.instructions.is_empty());
    }

    #[test]
    fn test_blank_name_rejected() {
        let request: RecipeRequest = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_client_supplied_identity_is_ignored() {
        let request: RecipeRequest = serde_json::from_str(
            r#"{"id": "abc", "publishedAt": "2020-01-01T00:00:00Z", "name": " Soup ", "tags": ["starter"]}"#,
        )
        .unwrap();

        let changes = request.into_changes();
        assert_eq!(changes.name, "Soup");
        assert_eq!(changes.tags, vec!["starter".to_string()]);
    }

    #[test]
    fn test_search_query_blank_tag_is_none() {
        let query: SearchQuery = serde_json::from_str(r#"{"tag": "  "}"#).unwrap();
        assert_eq!(query.tag, None);

        let query: SearchQuery = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(query.tag, None);

        let query: SearchQuery = serde_json::from_str(r#"{"tag": " main "}"#).unwrap();
        assert_eq!(query.tag.as_deref(), Some("main"));
    }
}
