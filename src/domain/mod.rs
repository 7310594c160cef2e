//! # Domain Layer Module
//!
//! 레시피 API의 데이터 구조를 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서와 매핑되는 Recipe, User
//! ├── dto       - HTTP 요청/응답 본문
//! └── models    - 인증 컨텍스트, JWT 클레임, 세션 레코드
//!      │
//!      ▼
//! Services (RecipeService, UserService, AuthService)
//!      │
//!      ▼
//! Repositories / Caching
//! ```
//!
//! 도메인 타입은 저장소나 HTTP 프레임워크 상태를 소유하지 않으며,
//! 상위 계층에서 명시적으로 변환됩니다.

pub mod dto;
pub mod entities;
pub mod models;
