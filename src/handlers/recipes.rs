//! Recipe HTTP Handlers
//!
//! 레시피 CRUD 및 태그 검색 엔드포인트입니다. 조회는 공개,
//! 생성/수정/삭제는 인증이 필요합니다 (`AuthMiddleware::write_only()`).
//!
//! `/search`는 `/{id}`보다 먼저 등록해야 `search`가 id로 해석되지 않습니다.
use actix_web::{delete, get, post, put, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::recipes::{RecipeRequest, SearchQuery};
use crate::domain::dto::tokens::MessageResponse;
use crate::errors::AppError;
use crate::services::recipes::RecipeService;

/// 전체 레시피 목록
///
/// # Endpoint
/// `GET /recipes`
#[get("")]
pub async fn list_recipes(recipes: web::Data<RecipeService>) -> Result<HttpResponse, AppError> {
    let list = recipes.list().await?;
    Ok(HttpResponse::Ok().json(list))
}

/// 태그로 레시피 검색
///
/// # Endpoint
/// `GET /recipes/search?tag={tag}`
///
/// # Errors
/// * 400 - 태그 누락
/// * 404 - 일치하는 레시피 없음
#[get("/search")]
pub async fn search_recipes(
    query: web::Query<SearchQuery>,
    recipes: web::Data<RecipeService>,
) -> Result<HttpResponse, AppError> {
    let found = recipes.search(query.tag.as_deref()).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// 단일 레시피 조회
///
/// # Endpoint
/// `GET /recipes/{id}`
#[get("/{id}")]
pub async fn get_recipe(
    path: web::Path<String>,
    recipes: web::Data<RecipeService>,
) -> Result<HttpResponse, AppError> {
    let recipe = recipes.get(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(recipe))
}

/// 레시피 생성
///
/// # Endpoint
/// `POST /recipes`
#[post("")]
pub async fn create_recipe(
    payload: web::Json<RecipeRequest>,
    recipes: web::Data<RecipeService>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let created = recipes.create(request).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// 레시피 수정
///
/// # Endpoint
/// `PUT /recipes/{id}`
#[put("/{id}")]
pub async fn update_recipe(
    path: web::Path<String>,
    payload: web::Json<RecipeRequest>,
    recipes: web::Data<RecipeService>,
) -> Result<HttpResponse, AppError> {
    let request = payload.into_inner();
    request.validate()?;

    let updated = recipes.update(&path.into_inner(), request).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// 레시피 삭제
///
/// # Endpoint
/// `DELETE /recipes/{id}`
#[delete("/{id}")]
pub async fn delete_recipe(
    path: web::Path<String>,
    recipes: web::Data<RecipeService>,
) -> Result<HttpResponse, AppError> {
    recipes.delete(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("recipe has been deleted")))
}
