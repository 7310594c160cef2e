use std::future::{ready, Ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// 인증 미들웨어가 검증을 마친 뒤 요청 extensions에 넣는 사용자 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 로그인 이름
    pub username: String,

    /// 자격 증명(토큰 또는 세션)의 만료 시각
    pub expires_at: DateTime<Utc>,
}

/// ActixWeb FromRequest trait 구현
///
/// 인증 미들웨어가 적용되지 않은 경로에서 사용하면 401을 반환합니다.
impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "authentication required".to_string(),
            ))),
        }
    }
}
