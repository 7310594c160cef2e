//! # 애플리케이션 상태 레지스트리
//!
//! 프로세스 시작 시 한 번 만들어진 서비스들을 보관하고,
//! actix-web 앱 데이터(`web::Data`)로 등록합니다.
//! 전역 싱글톤이나 지연 초기화 없이 모든 의존성은 명시적으로 주입됩니다.
//!
//! ```rust,ignore
//! let state = AppState::new(recipe_service, user_service, auth_service, keys);
//!
//! HttpServer::new(move || {
//!     let state = state.clone();
//!     App::new()
//!         .configure(move |cfg| state.register(cfg))
//!         .configure(configure_all_routes)
//! })
//! ```

use std::sync::Arc;

use actix_web::web;

use crate::services::auth::{AuthService, SigningKeys};
use crate::services::recipes::RecipeService;
use crate::services::users::UserService;

/// 핸들러와 미들웨어가 공유하는 서비스 묶음
///
/// `web::Data`는 내부적으로 `Arc`이므로 워커마다 복제해도 같은 인스턴스를 가리킵니다.
#[derive(Clone)]
pub struct AppState {
    pub recipes: web::Data<RecipeService>,
    pub users: web::Data<UserService>,
    pub auth: web::Data<AuthService>,
    pub keys: web::Data<SigningKeys>,
}

impl AppState {
    pub fn new(
        recipes: RecipeService,
        users: UserService,
        auth: AuthService,
        keys: Arc<SigningKeys>,
    ) -> Self {
        Self {
            recipes: web::Data::new(recipes),
            users: web::Data::new(users),
            auth: web::Data::new(auth),
            keys: web::Data::from(keys),
        }
    }

    /// 모든 서비스를 앱 데이터로 등록합니다.
    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.recipes.clone())
            .app_data(self.users.clone())
            .app_data(self.auth.clone())
            .app_data(self.keys.clone());
    }
}
