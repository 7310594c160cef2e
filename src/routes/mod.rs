//! API 라우트 설정 모듈
//!
//! 엔드포인트를 기능별로 그룹화하고 인증 미들웨어를 연결합니다.
//!
//! # Routes
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/health` | - |
//! | GET | `/.well-known/jwks.json` | - |
//! | POST | `/adduser`, `/login` | - |
//! | POST | `/refresh`, `/logout` | 필수 |
//! | GET | `/recipes`, `/recipes/search`, `/recipes/{id}` | - |
//! | POST/PUT/DELETE | `/recipes`, `/recipes/{id}` | 필수 |
//!
//! 레시피 라우트는 `/recipes`와 버전 경로 `/v1/recipes` 양쪽에 등록됩니다.
//!
//! # Auth Middleware Usage
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/recipes")
//!         .wrap(AuthMiddleware::write_only())  // 조회는 공개, 변경은 인증 필요
//!         .service(handlers::recipes::list_recipes)
//!         .service(handlers::recipes::create_recipe)
//! );
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 레시피 라우트가 등록되는 경로
pub const RECIPE_PREFIXES: [&str; 2] = ["/recipes", "/v1/recipes"];

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // JSON 본문 파싱 실패도 공통 에러 형식으로 응답
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(err.to_string()).into()
    }));

    cfg.service(health_check);
    cfg.service(handlers::keys::jwks);

    configure_auth_routes(cfg);
    configure_recipe_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::add_user)
        .service(handlers::auth::login)
        .service(
            web::resource("/refresh")
                .wrap(AuthMiddleware::required())
                .route(web::post().to(handlers::auth::refresh)),
        )
        .service(
            web::resource("/logout")
                .wrap(AuthMiddleware::required())
                .route(web::post().to(handlers::auth::logout)),
        );
}

fn configure_recipe_routes(cfg: &mut web::ServiceConfig) {
    for prefix in RECIPE_PREFIXES {
        cfg.service(
            web::scope(prefix)
                .wrap(AuthMiddleware::write_only())
                .service(handlers::recipes::list_recipes)
                .service(handlers::recipes::create_recipe)
                // /search는 /{id}보다 먼저
                .service(handlers::recipes::search_recipes)
                .service(handlers::recipes::get_recipe)
                .service(handlers::recipes::update_recipe)
                .service(handlers::recipes::delete_recipe),
        );
    }
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "recipes_api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
        }
    }))
}
