//! 인증 서비스
//!
//! `AUTH_SCHEME`으로 선택된 방식(JWT 또는 쿠키 세션)에 따라
//! 자격 증명을 발급하고 요청을 인증합니다. 두 방식은 상호 배타적입니다.
//!
//! | 상황 | JWT | Cookie |
//! |------|-----|--------|
//! | 자격 증명 위치 | `Authorization` 헤더 | 세션 쿠키 |
//! | 자격 증명 없음 | 401 | 403 "not logged in" |
//! | 로그아웃 | 만료된 토큰 반환 | 세션 삭제 + 쿠키 제거 |

use actix_web::http::header;
use actix_web::HttpRequest;

use super::session_service::{IssuedSession, SessionService};
use super::token_service::TokenService;
use crate::config::AuthScheme;
use crate::domain::models::auth::AuthenticatedUser;
use crate::domain::models::token::IssuedToken;
use crate::errors::{AppError, AppResult};

/// 발급된 자격 증명
#[derive(Debug, Clone)]
pub enum Credential {
    Token(IssuedToken),
    Session(IssuedSession),
    /// 쿠키 세션 로그아웃 결과 (제거 쿠키를 내려야 함)
    Revoked,
}

pub struct AuthService {
    scheme: AuthScheme,
    tokens: TokenService,
    sessions: SessionService,
}

impl AuthService {
    pub fn new(scheme: AuthScheme, tokens: TokenService, sessions: SessionService) -> Self {
        log::info!("🔐 인증 방식: {}", scheme.as_str());
        Self {
            scheme,
            tokens,
            sessions,
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    pub fn sessions(&self) -> &SessionService {
        &self.sessions
    }

    /// 로그인에 성공한 사용자에게 자격 증명을 발급합니다.
    pub async fn login(&self, username: &str) -> AppResult<Credential> {
        match self.scheme {
            AuthScheme::Jwt => Ok(Credential::Token(self.tokens.issue(username)?)),
            AuthScheme::Cookie => Ok(Credential::Session(self.sessions.create(username).await?)),
        }
    }

    /// 인증된 요청의 자격 증명을 갱신합니다.
    pub async fn refresh(&self, req: &HttpRequest, user: &AuthenticatedUser) -> AppResult<Credential> {
        match self.scheme {
            AuthScheme::Jwt => Ok(Credential::Token(self.tokens.refresh(&user.username)?)),
            AuthScheme::Cookie => {
                let token = self.session_token(req)?;
                let session = self.sessions.refresh(&token, &user.username).await?;
                Ok(Credential::Session(session))
            }
        }
    }

    /// 로그아웃. JWT는 이미 만료된 토큰을, 쿠키는 세션 삭제 결과를 반환합니다.
    pub async fn logout(&self, req: &HttpRequest, user: &AuthenticatedUser) -> AppResult<Credential> {
        match self.scheme {
            AuthScheme::Jwt => Ok(Credential::Token(self.tokens.expire(&user.username)?)),
            AuthScheme::Cookie => {
                let token = self.session_token(req)?;
                self.sessions.destroy(&token).await?;
                Ok(Credential::Revoked)
            }
        }
    }

    /// 요청의 자격 증명을 검증합니다.
    pub async fn authenticate(&self, req: &HttpRequest) -> AppResult<AuthenticatedUser> {
        match self.scheme {
            AuthScheme::Jwt => {
                let header_value = req
                    .headers()
                    .get(header::AUTHORIZATION)
                    .and_then(|value| value.to_str().ok())
                    .ok_or_else(|| {
                        AppError::AuthenticationError("missing authorization token".to_string())
                    })?;

                let claims = self.tokens.verify(header_value)?;
                Ok(AuthenticatedUser {
                    expires_at: claims.expires_at(),
                    username: claims.username,
                })
            }
            AuthScheme::Cookie => {
                let token = self.session_token(req)?;
                self.sessions.validate(&token).await
            }
        }
    }

    fn session_token(&self, req: &HttpRequest) -> AppResult<String> {
        req.cookie(self.sessions.cookie_name())
            .map(|cookie| cookie.value().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::AuthorizationError("not logged in".to_string()))
    }
}
