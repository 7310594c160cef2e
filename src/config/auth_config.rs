//! # Authentication Configuration Module
//!
//! 인증 방식, JWT 서명 키, 세션 쿠키 등 인증 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **JWT (기본값)**: `Authorization` 헤더의 서명된 토큰
//! 2. **Cookie Session**: Redis에 저장된 불투명 세션 토큰을 담은 쿠키
//!
//! 두 방식은 상호 배타적이며 프로세스 시작 시 `AUTH_SCHEME`으로 선택합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export AUTH_SCHEME="jwt"                 # jwt | cookie
//! export JWT_ALGORITHM="HS256"             # HS256 | RS256
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_PRIVATE_KEY_PATH="./secrets/jwt_private_key.pem"
//! export JWT_PUBLIC_KEY_PATH="./secrets/jwt_public_key.pem"
//! export JWT_EXPIRATION_MINUTES="10"
//! export JWT_REFRESH_EXPIRATION_MINUTES="5"
//! export SESSION_TTL_MINUTES="10"
//! export SESSION_COOKIE_NAME="recipes_session"
//! ```

use std::env;

use chrono::Duration;

use super::data_config::env_in_range;

/// 토큰/세션 유효 기간 상한 (7일)
const MAX_LIFETIME_MINUTES: i64 = 7 * 24 * 60;

/// 요청 인증 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// Bearer 토큰 (서명된 클레임)
    Jwt,
    /// 서버 측 세션 + 쿠키
    Cookie,
}

impl AuthScheme {
    /// 문자열에서 AuthScheme을 생성합니다. 대소문자를 구분하지 않습니다.
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "jwt" | "bearer" | "token" => Ok(AuthScheme::Jwt),
            "cookie" | "session" => Ok(AuthScheme::Cookie),
            _ => Err(format!("Unsupported auth scheme: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthScheme::Jwt => "jwt",
            AuthScheme::Cookie => "cookie",
        }
    }
}

/// JWT 서명 알고리즘
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JwtAlgorithm {
    /// 대칭키 HMAC-SHA256
    HS256,
    /// RSA 공개키/개인키 (JWKS 공개)
    RS256,
}

impl JwtAlgorithm {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.trim().to_uppercase().as_str() {
            "HS256" => Ok(JwtAlgorithm::HS256),
            "RS256" => Ok(JwtAlgorithm::RS256),
            _ => Err(format!("Unsupported JWT algorithm: {}", s)),
        }
    }
}

/// 인증 방식 선택
pub struct AuthConfig;

impl AuthConfig {
    /// `AUTH_SCHEME` 값. 알 수 없는 값이면 경고 후 JWT를 사용합니다.
    pub fn scheme() -> AuthScheme {
        let raw = env::var("AUTH_SCHEME").unwrap_or_else(|_| "jwt".to_string());
        AuthScheme::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("{}, JWT 방식으로 대체합니다", e);
            AuthScheme::Jwt
        })
    }
}

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 서명 알고리즘 (`JWT_ALGORITHM`, 기본값 HS256)
    pub fn algorithm() -> JwtAlgorithm {
        let raw = env::var("JWT_ALGORITHM").unwrap_or_else(|_| "HS256".to_string());
        JwtAlgorithm::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("{}, HS256으로 대체합니다", e);
            JwtAlgorithm::HS256
        })
    }

    /// HS256 서명 비밀키.
    ///
    /// 설정되지 않았으면 `None`을 반환하며, 이 경우 프로세스 시작 시
    /// 임의의 키가 생성되어 재시작 후에는 기존 토큰이 모두 무효가 됩니다.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET").ok().filter(|secret| !secret.is_empty())
    }

    /// RS256 개인키 경로 (PKCS#1 PEM)
    pub fn private_key_path() -> String {
        env::var("JWT_PRIVATE_KEY_PATH")
            .unwrap_or_else(|_| "./secrets/jwt_private_key.pem".to_string())
    }

    /// RS256 공개키 경로 (PKCS#8 PEM)
    pub fn public_key_path() -> String {
        env::var("JWT_PUBLIC_KEY_PATH")
            .unwrap_or_else(|_| "./secrets/jwt_public_key.pem".to_string())
    }

    /// 로그인 시 발급하는 토큰의 유효 기간 (기본값 10분)
    pub fn expiration() -> Duration {
        Duration::minutes(env_in_range("JWT_EXPIRATION_MINUTES", 10, 1..=MAX_LIFETIME_MINUTES))
    }

    /// 갱신 시 발급하는 토큰의 유효 기간 (기본값 5분)
    pub fn refresh_expiration() -> Duration {
        Duration::minutes(env_in_range("JWT_REFRESH_EXPIRATION_MINUTES", 5, 1..=MAX_LIFETIME_MINUTES))
    }
}

/// 쿠키 세션 설정
pub struct SessionConfig;

impl SessionConfig {
    /// 세션 유효 기간 (`SESSION_TTL_MINUTES`, 기본값 10분)
    pub fn ttl() -> Duration {
        Duration::minutes(env_in_range("SESSION_TTL_MINUTES", 10, 1..=MAX_LIFETIME_MINUTES))
    }

    /// 세션 쿠키 이름
    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "recipes_session".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_scheme_from_string() {
        assert_eq!(AuthScheme::from_str("jwt").unwrap(), AuthScheme::Jwt);
        assert_eq!(AuthScheme::from_str("COOKIE").unwrap(), AuthScheme::Cookie);
        assert_eq!(AuthScheme::from_str(" session ").unwrap(), AuthScheme::Cookie);
        assert!(AuthScheme::from_str("basic").is_err());
    }

    #[test]
    fn test_auth_scheme_roundtrip() {
        for scheme in [AuthScheme::Jwt, AuthScheme::Cookie] {
            assert_eq!(AuthScheme::from_str(scheme.as_str()).unwrap(), scheme);
        }
    }

    #[test]
    fn test_jwt_algorithm_from_string() {
        assert_eq!(JwtAlgorithm::from_str("hs256").unwrap(), JwtAlgorithm::HS256);
        assert_eq!(JwtAlgorithm::from_str("RS256").unwrap(), JwtAlgorithm::RS256);
        assert!(JwtAlgorithm::from_str("ES256").is_err());
    }

    #[test]
    fn test_short_lived_defaults() {
        if env::var("JWT_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::expiration(), Duration::minutes(10));
        }
        if env::var("JWT_REFRESH_EXPIRATION_MINUTES").is_err() {
            assert_eq!(JwtConfig::refresh_expiration(), Duration::minutes(5));
        }
        if env::var("SESSION_TTL_MINUTES").is_err() {
            assert_eq!(SessionConfig::ttl(), Duration::minutes(10));
        }
    }
}
