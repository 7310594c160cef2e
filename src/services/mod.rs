//! # Services
//!
//! 비즈니스 로직 계층입니다. 모든 서비스는 `main`에서 한 번 생성되어
//! `web::Data`로 핸들러에 주입됩니다.
//!
//! - `recipes`: 캐시-어사이드 레시피 접근
//! - `users`: 사용자 등록/자격 증명 확인
//! - `auth`: 서명 키, 토큰, 세션, 요청 인증

pub mod auth;
pub mod recipes;
pub mod users;
