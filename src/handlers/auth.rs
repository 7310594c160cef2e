//! Authentication HTTP Handlers
//!
//! 사용자 등록, 로그인, 자격 증명 갱신, 로그아웃 엔드포인트입니다.
//! 응답 형태는 `AUTH_SCHEME`에 따라 달라집니다.
//!
//! | Endpoint | JWT | Cookie |
//! |----------|-----|--------|
//! | `POST /adduser` | `"<username>"` | `"<username>"` |
//! | `POST /login` | `{"token", "expires"}` | 세션 쿠키 + `{"message"}` |
//! | `POST /refresh` | `{"token", "expires"}` | 세션 쿠키 + `{"message"}` |
//! | `POST /logout` | 만료된 `{"token", "expires"}` | 제거 쿠키 + `{"message"}` |
use actix_web::{post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::domain::dto::tokens::{MessageResponse, TokenResponse};
use crate::domain::dto::users::{CreateUserRequest, LoginRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::services::auth::{AuthService, Credential};
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// # Endpoint
/// `POST /adduser`
///
/// # Errors
/// * 400 - 형식 오류 또는 이미 존재하는 사용자명 (`"user already exists"`)
#[post("/adduser")]
pub async fn add_user(
    payload: web::Json<CreateUserRequest>,
    users: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let username = users.register(request).await?;
    Ok(HttpResponse::Ok().json(username))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
///
/// # Errors
/// * 401 - `"incorrect user or password"`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    users: web::Data<UserService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let user = users.verify_credentials(request).await?;
    let credential = auth.login(&user.username).await?;

    log::info!("🔓 로그인 성공: {}", user.username);
    Ok(credential_response(&auth, credential, "user signed in"))
}

/// 자격 증명 갱신 핸들러
///
/// `AuthMiddleware::required()`로 감싸서 등록합니다.
///
/// # Endpoint
/// `POST /refresh`
pub async fn refresh(
    req: HttpRequest,
    user: AuthenticatedUser,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let credential = auth.refresh(&req, &user).await?;

    log::debug!("자격 증명 갱신: {}", user.username);
    Ok(credential_response(&auth, credential, "session refreshed"))
}

/// 로그아웃 핸들러
///
/// `AuthMiddleware::required()`로 감싸서 등록합니다.
///
/// # Endpoint
/// `POST /logout`
pub async fn logout(
    req: HttpRequest,
    user: AuthenticatedUser,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    let credential = auth.logout(&req, &user).await?;

    log::info!("🔒 로그아웃: {}", user.username);
    Ok(credential_response(&auth, credential, "signed out"))
}

fn credential_response(auth: &AuthService, credential: Credential, message: &str) -> HttpResponse {
    match credential {
        Credential::Token(issued) => HttpResponse::Ok().json(TokenResponse {
            token: issued.token,
            expires: issued.expires_at,
        }),
        Credential::Session(session) => HttpResponse::Ok()
            .cookie(auth.sessions().cookie(&session))
            .json(MessageResponse::new(message)),
        Credential::Revoked => HttpResponse::Ok()
            .cookie(auth.sessions().removal_cookie())
            .json(MessageResponse::new(message)),
    }
}
