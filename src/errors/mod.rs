//! 에러 타입과 HTTP 응답 매핑

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
