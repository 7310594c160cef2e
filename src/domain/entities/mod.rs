//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 핵심 엔티티들을 정의합니다.
//!
//! ## 구성
//!
//! ```text
//! entities/
//! ├── recipes/   ← Recipe (recipes 컬렉션), RecipeChanges
//! └── users/     ← User (users 컬렉션)
//! ```
//!
//! ## 매핑 규칙
//!
//! - `_id`는 `ObjectId`이며 API 경계에서 24자리 hex 문자열로 노출됩니다.
//! - 시각 필드는 BSON `DateTime`으로 저장합니다.
//! - 엔티티는 HTTP 응답으로 직접 직렬화하지 않고 DTO로 변환합니다.
//!
//! ```rust,ignore
//! use crate::domain::entities::recipes::{Recipe, RecipeChanges};
//!
//! let recipe = Recipe::new(changes);
//! collection.insert_one(&recipe).await?;
//! ```

pub mod recipes;
pub mod users;
