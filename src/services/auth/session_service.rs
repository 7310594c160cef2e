//! 쿠키 세션 서비스
//!
//! 로그인 시 UUID v4 세션 토큰을 만들어 쿠키로 내려주고, 서버에는
//! [`SessionRepository`]를 통해 다이제스트 키로 세션 레코드를 저장합니다.

use std::sync::Arc;

use actix_web::cookie::{time, Cookie, SameSite};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use crate::caching::CacheStore;
use crate::config::SessionConfig;
use crate::domain::models::auth::{AuthenticatedUser, SessionRecord};
use crate::errors::{AppError, AppResult};
use crate::repositories::sessions::SessionRepository;

/// 발급된 세션 토큰과 만료 시각
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

pub struct SessionService {
    sessions: SessionRepository,
    ttl: Duration,
    cookie_name: String,
}

impl SessionService {
    pub fn new(cache: Arc<dyn CacheStore>, ttl: Duration, cookie_name: impl Into<String>) -> Self {
        Self {
            sessions: SessionRepository::new(cache),
            ttl,
            cookie_name: cookie_name.into(),
        }
    }

    pub fn from_config(cache: Arc<dyn CacheStore>) -> Self {
        Self::new(cache, SessionConfig::ttl(), SessionConfig::cookie_name())
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }

    /// 새 세션을 만들고 저장합니다.
    pub async fn create(&self, username: &str) -> AppResult<IssuedSession> {
        let token = Uuid::new_v4().to_string();
        self.store(token, username).await
    }

    /// 기존 세션 토큰의 유효 기간을 다시 설정합니다.
    pub async fn refresh(&self, token: &str, username: &str) -> AppResult<IssuedSession> {
        self.store(token.to_string(), username).await
    }

    async fn store(&self, token: String, username: &str) -> AppResult<IssuedSession> {
        let expires_at = Utc::now() + self.ttl;
        let record = SessionRecord {
            username: username.to_string(),
            expires_at: expires_at.timestamp(),
        };

        let ttl = self
            .ttl
            .to_std()
            .map_err(|e| AppError::InternalError(format!("잘못된 세션 TTL: {}", e)))?;
        self.sessions.save(&token, &record, ttl).await?;

        Ok(IssuedSession { token, expires_at })
    }

    /// 세션 토큰을 검증합니다. 없거나 만료된 세션은 403 "not logged in".
    pub async fn validate(&self, token: &str) -> AppResult<AuthenticatedUser> {
        let not_logged_in = || AppError::AuthorizationError("not logged in".to_string());

        let record = self.sessions.find(token).await?.ok_or_else(not_logged_in)?;
        let expires_at = DateTime::from_timestamp(record.expires_at, 0).ok_or_else(not_logged_in)?;

        // 키 TTL이 만료를 담당하지만, TTL 반올림으로 남은 레코드는 여기서 거부
        if expires_at <= Utc::now() {
            return Err(not_logged_in());
        }

        Ok(AuthenticatedUser {
            username: record.username,
            expires_at,
        })
    }

    pub async fn destroy(&self, token: &str) -> AppResult<()> {
        self.sessions.delete(token).await
    }

    /// 세션 쿠키 (`HttpOnly`, `Max-Age` = 세션 TTL)
    pub fn cookie(&self, session: &IssuedSession) -> Cookie<'static> {
        Cookie::build(self.cookie_name.clone(), session.token.clone())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .max_age(time::Duration::seconds(self.ttl.num_seconds()))
            .finish()
    }

    /// 브라우저에서 세션 쿠키를 지우기 위한 쿠키
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build(self.cookie_name.clone(), "")
            .path("/")
            .http_only(true)
            .finish();
        cookie.make_removal();
        cookie
    }
}
