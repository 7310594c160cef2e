//! 레시피 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{RecipeRequest, SearchQuery};
pub use response::RecipeResponse;
