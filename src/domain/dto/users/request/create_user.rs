//! # 사용자 등록 요청 DTO
//!
//! `POST /adduser` 요청 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! ### 사용자명 (`username`)
//! - 길이: 3-32자
//! - 허용 문자: ASCII 영문, 숫자, 언더스코어(_)
//! - 유일성은 저장소의 unique 인덱스로 보장 (서비스 계층에서 처리)
//!
//! ### 비밀번호 (`password`)
//! - 비어 있지 않을 것
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use validator::Validate;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! #[post("/adduser")]
//! async fn add_user(payload: web::Json<CreateUserRequest>) -> Result<HttpResponse, AppError> {
//!     let request = payload.into_inner();
//!     request.validate()?;
//!     // ...
//! }
//! ```

use serde::Deserialize;
use validator::{Validate, ValidationError};

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// { "username": "alice", "password": "secret" }
/// ```
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 32, message = "username must be 3-32 characters"))]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[validate(length(min = 1, message = "password must not be empty"))]
    pub password: String,
}

/// 사용자명 문자 제약 검증
///
/// 알파벳(대소문자), 숫자, 언더스코어만 허용합니다.
/// 유니코드 문자는 허용하지 않습니다.
///
/// ```rust,ignore
/// assert!(validate_username("john_doe123").is_ok());
/// assert!(validate_username("user-name").is_err());
/// assert!(validate_username("사용자").is_err());
/// ```
fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::new("invalid_username")
            .with_message("username may only contain letters, digits and underscores".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(request("alice", "secret").validate().is_ok());
        assert!(request("john_doe_2024", "x").validate().is_ok());
    }

    #[test]
    fn test_username_length_bounds() {
        assert!(request("ab", "secret").validate().is_err());
        assert!(request(&"a".repeat(32), "secret").validate().is_ok());
        assert!(request(&"a".repeat(33), "secret").validate().is_err());
    }

    #[test]
    fn test_username_rejects_symbols_and_unicode() {
        assert!(request("user-name", "secret").validate().is_err());
        assert!(request("user name", "secret").validate().is_err());
        assert!(request("사용자이름", "secret").validate().is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        let errors = request("alice", "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
