//! # Domain Models
//!
//! 저장소 문서도 HTTP 본문도 아닌, 요청 처리 중에 사용되는 값 객체입니다.
//!
//! - `auth`: 인증된 사용자, 인증 모드, 세션 레코드
//! - `token`: JWT 클레임과 발급 결과

pub mod auth;
pub mod token;
