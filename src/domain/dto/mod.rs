//! # Data Transfer Objects
//!
//! HTTP 경계에서 주고받는 요청/응답 구조체입니다.
//! 엔티티는 저장소 형식(BSON)을, DTO는 API 형식(JSON)을 담당합니다.
//!
//! ```text
//! dto/
//! ├── recipes/  ← RecipeRequest, SearchQuery, RecipeResponse
//! ├── users/    ← CreateUserRequest, LoginRequest
//! └── tokens/   ← TokenResponse, MessageResponse
//! ```

pub mod recipes;
pub mod tokens;
pub mod users;

pub use recipes::*;
pub use tokens::*;
pub use users::*;
