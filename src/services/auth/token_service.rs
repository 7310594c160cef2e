//! JWT 토큰 발급 및 검증 서비스
//!
//! 클레임은 사용자명과 발급/만료 시각만 담습니다. 서명 키는
//! [`SigningKeys`]가 소유하며 생성 시 주입됩니다.
//!
//! ## 토큰 수명
//!
//! | 용도 | 기본 수명 | 설정 |
//! |------|-----------|------|
//! | 로그인 | 10분 | `JWT_EXPIRATION_MINUTES` |
//! | 갱신 | 5분 | `JWT_REFRESH_EXPIRATION_MINUTES` |
//! | 로그아웃 | 이미 만료됨 | - |
//!
//! 검증은 leeway 없이 수행하므로 로그아웃 토큰은 즉시 거부됩니다.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Validation};

use super::key_service::SigningKeys;
use crate::config::JwtConfig;
use crate::domain::models::token::{Claims, IssuedToken};
use crate::errors::{AppError, AppResult};
use crate::utils::string_utils::strip_bearer_prefix;

pub struct TokenService {
    keys: Arc<SigningKeys>,
    expiration: Duration,
    refresh_expiration: Duration,
}

impl TokenService {
    pub fn new(keys: Arc<SigningKeys>, expiration: Duration, refresh_expiration: Duration) -> Self {
        Self {
            keys,
            expiration,
            refresh_expiration,
        }
    }

    /// `JWT_EXPIRATION_MINUTES`/`JWT_REFRESH_EXPIRATION_MINUTES` 설정으로 생성합니다.
    pub fn from_config(keys: Arc<SigningKeys>) -> Self {
        Self::new(keys, JwtConfig::expiration(), JwtConfig::refresh_expiration())
    }

    /// 로그인 토큰 발급
    pub fn issue(&self, username: &str) -> AppResult<IssuedToken> {
        self.sign(username, self.expiration)
    }

    /// 갱신 토큰 발급
    pub fn refresh(&self, username: &str) -> AppResult<IssuedToken> {
        self.sign(username, self.refresh_expiration)
    }

    /// 이미 만료된 토큰 발급 (로그아웃)
    ///
    /// 서버에 폐기 목록이 없으므로 클라이언트가 기존 토큰을
    /// 이 토큰으로 교체하는 방식으로 로그아웃합니다.
    pub fn expire(&self, username: &str) -> AppResult<IssuedToken> {
        self.sign(username, Duration::seconds(-1))
    }

    fn sign(&self, username: &str, lifetime: Duration) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + lifetime;

        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.keys.header(), &claims, self.keys.encoding_key())
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// `Authorization` 헤더 값(또는 토큰 자체)을 검증하고 클레임을 반환합니다.
    ///
    /// `Bearer ` 접두사는 있어도 되고 없어도 됩니다.
    pub fn verify(&self, raw: &str) -> AppResult<Claims> {
        let token = strip_bearer_prefix(raw);
        if token.is_empty() {
            return Err(AppError::AuthenticationError("missing token".to_string()));
        }

        let mut validation = Validation::new(self.keys.algorithm());
        validation.leeway = 0;

        decode::<Claims>(token, self.keys.decoding_key(), &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {}", e);
                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        AppError::AuthenticationError("token has expired".to_string())
                    }
                    _ => AppError::AuthenticationError("invalid token".to_string()),
                }
            })
    }
}
