//! HTTP 핸들러
//!
//! 요청 본문 바인딩과 응답 형태만 담당하고, 처리 로직은 서비스에 위임합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.

pub mod auth;
pub mod keys;
pub mod recipes;
