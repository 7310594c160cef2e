//! # 인증 미들웨어
//!
//! 보호된 경로에 붙여 요청을 핸들러에 전달하기 전에 자격 증명을 검증합니다.
//! 검증에 성공하면 [`AuthenticatedUser`]를 요청 extensions에 넣고,
//! 실패하면 핸들러를 호출하지 않고 에러 응답을 반환합니다.
//!
//! 실제 검증은 `web::Data<AuthService>`가 담당하므로 미들웨어는
//! 인증 방식(JWT/쿠키)을 알지 못합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! // 모든 메서드에 인증 필요
//! web::resource("/refresh")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::post().to(refresh));
//!
//! // POST/PUT/DELETE에만 인증 필요, GET은 공개
//! web::scope("/recipes")
//!     .wrap(AuthMiddleware::write_only())
//!     .service(list_recipes)
//!     .service(create_recipe);
//! ```
//!
//! [`AuthenticatedUser`]: crate::domain::models::auth::AuthenticatedUser

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::domain::models::auth::AuthMode;
use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware {
    mode: AuthMode,
}

impl AuthMiddleware {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode }
    }

    pub fn required() -> Self {
        Self::new(AuthMode::Required)
    }

    pub fn write_only() -> Self {
        Self::new(AuthMode::WriteOnly)
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            mode: self.mode,
        }))
    }
}
