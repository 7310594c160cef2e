//! 공개키 배포 핸들러
use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::services::auth::SigningKeys;

/// RS256 공개키 JWKS
///
/// # Endpoint
/// `GET /.well-known/jwks.json`
///
/// HS256으로 설정된 경우 공개할 키가 없으므로 404.
#[get("/.well-known/jwks.json")]
pub async fn jwks(keys: web::Data<SigningKeys>) -> Result<HttpResponse, AppError> {
    let jwks = keys
        .jwks()
        .ok_or_else(|| AppError::NotFound("no public signing key is configured".to_string()))?;

    Ok(HttpResponse::Ok()
        .insert_header(("Cache-Control", "public, max-age=3600"))
        .json(jwks))
}
