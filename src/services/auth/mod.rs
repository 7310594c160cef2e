//! 인증 관련 서비스
//!
//! - `key_service`: 서명 키 관리 (HS256/RS256, JWKS)
//! - `token_service`: JWT 발급/검증
//! - `session_service`: 쿠키 세션 발급/검증
//! - `auth_service`: 설정된 방식으로 위 서비스를 조합

pub mod auth_service;
pub mod key_service;
pub mod session_service;
pub mod token_service;

pub use auth_service::{AuthService, Credential};
pub use key_service::SigningKeys;
pub use session_service::{IssuedSession, SessionService};
pub use token_service::TokenService;
