//! # Configuration Module
//!
//! 레시피 API의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 타입이 있는 접근자로 중앙집중식 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, MongoDB, Redis, 로깅, 환경 관련 설정
//! - [`auth_config`] - 인증 방식, JWT, 세션 쿠키 관련 설정
//!
//! ## 환경 변수 로딩
//!
//! `main`에서 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일을
//! 먼저 읽어 들인 뒤, 각 접근자가 호출될 때 `std::env`에서 값을 조회합니다.
//!
//! ```bash
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="recipes"
//! export REDIS_URL="redis://localhost:6379"
//! export CACHE_TTL_SECONDS="43200"
//! export AUTH_SCHEME="jwt"
//! export JWT_SECRET="your-super-secret-key"
//! export BCRYPT_COST="12"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
