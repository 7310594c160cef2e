//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 형식 규칙을 검증합니다.
//!
//! ## 에러 핸들링
//!
//! 검증 실패 시 `validator::ValidationErrors`가 발생하며,
//! `AppError::ValidationError`로 변환되어 HTTP 400 응답이 됩니다.

pub mod auth_request;
pub mod create_user;

pub use auth_request::LoginRequest;
pub use create_user::CreateUserRequest;
