//! # 문자열 유틸리티
//!
//! 요청 값 정리와 관련된 공통 유틸리티 함수들입니다.

use serde::Deserialize;

/// 선택적 문자열 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을,
/// 그 외에는 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(clean_optional_string(Some("  main  ".to_string())), Some("main".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 앞뒤 공백을 제거한 문자열을 반환합니다.
pub fn trim_string(value: &str) -> String {
    value.trim().to_string()
}

/// 빈 문자열이 아니고 공백만으로 구성되지 않았는지 확인합니다.
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// `Authorization` 헤더 값에서 토큰 부분만 추출합니다.
///
/// `Bearer ` 접두사는 있어도 되고 없어도 됩니다 (대소문자 무시).
///
/// ```rust,ignore
/// assert_eq!(strip_bearer_prefix("Bearer abc.def.ghi"), "abc.def.ghi");
/// assert_eq!(strip_bearer_prefix("abc.def.ghi"), "abc.def.ghi");
/// ```
pub fn strip_bearer_prefix(header_value: &str) -> &str {
    let trimmed = header_value.trim();
    match trimmed.get(..7) {
        Some(prefix) if prefix.eq_ignore_ascii_case("bearer ") => trimmed[7..].trim_start(),
        _ => trimmed,
    }
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환하고,
/// 유효한 문자열은 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// 필드 자체가 없는 경우를 위해 `#[serde(default)]`와 함께 사용합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct SearchQuery {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     tag: Option<String>,
/// }
///
/// // ?tag=%20main%20 → Some("main")
/// // ?tag=           → None
/// // (tag 없음)      → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("main".to_string())), Some("main".to_string()));
        assert_eq!(clean_optional_string(Some("  dessert  ".to_string())), Some("dessert".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("\t\n".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_is_valid_string() {
        assert!(is_valid_string("Soup"));
        assert!(is_valid_string("  Soup  "));
        assert!(!is_valid_string(""));
        assert!(!is_valid_string("   "));
    }

    #[test]
    fn test_strip_bearer_prefix() {
        assert_eq!(strip_bearer_prefix("Bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(strip_bearer_prefix("bearer abc.def.ghi"), "abc.def.ghi");
        assert_eq!(strip_bearer_prefix("  abc.def.ghi "), "abc.def.ghi");
        assert_eq!(strip_bearer_prefix("Bearer"), "Bearer");
        assert_eq!(strip_bearer_prefix(""), "");
    }

    #[test]
    fn test_deserialize_optional_string_from_query() {
        #[derive(Deserialize)]
        struct Query {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            tag: Option<String>,
        }

        let query: Query = serde_json::from_str(r#"{"tag": "  vegan  "}"#).unwrap();
        assert_eq!(query.tag, Some("vegan".to_string()));

        let query: Query = serde_json::from_str(r#"{"tag": ""}"#).unwrap();
        assert_eq!(query.tag, None);

        let query: Query = serde_json::from_str(r#"{"tag": null}"#).unwrap();
        assert_eq!(query.tag, None);

        let query: Query = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(query.tag, None);

        let query: Query = serde_json::from_str(r#"{"tag": "  매운맛 "}"#).unwrap();
        assert_eq!(query.tag, Some("매운맛".to_string()));
    }
}
