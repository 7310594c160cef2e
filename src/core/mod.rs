//! # Core Module
//!
//! 애플리케이션 조립에 필요한 공통 구성 요소입니다.
//!
//! - [`registry`]: 서비스 인스턴스를 보관하고 `web::Data`로 등록하는 [`AppState`]

pub mod registry;

pub use registry::AppState;
