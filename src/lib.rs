//! 레시피 API 백엔드
//!
//! MongoDB를 원본 저장소로, Redis를 cache-aside 캐시로 사용하는
//! 레시피 REST API입니다. 쓰기 요청은 JWT 또는 쿠키 세션으로 보호됩니다.
//!
//! # Features
//!
//! - **레시피 관리**: 목록, 단건 조회, 태그 검색, 생성, 수정, 삭제
//! - **Cache-aside**: 조회 시 캐시 우선, 쓰기 시 write-through 및 무효화
//! - **사용자 관리**: bcrypt 해시 기반 계정 등록과 로그인
//! - **인증 방식 선택**: `AUTH_SCHEME=jwt` (HS256/RS256) 또는 `AUTH_SCHEME=cookie`
//! - **MongoDB**: 레시피와 사용자 영구 저장
//! - **Redis**: 레시피 캐시 및 세션 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /recipes, /v1/recipes, /login ...
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ AuthMiddleware  │ ← 쓰기 요청 인증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← cache-aside, 인증 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← RecipeStore / UserStore / SessionRepository
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use recipes_api::core::AppState;
//! use recipes_api::routes::configure_all_routes;
//!
//! let state = AppState::new(recipe_service, user_service, auth_service, keys);
//! App::new()
//!     .configure(move |cfg| state.register(cfg))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
