//! 사용자 등록 및 로그인 DTO

pub mod request;

pub use request::*;
