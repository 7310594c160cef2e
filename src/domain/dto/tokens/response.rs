use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 로그인/갱신/로그아웃 시 반환하는 토큰 응답
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9...", "expires": "2024-03-12T09:10:00Z" }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub expires: DateTime<Utc>,
}

/// 단순 메시지 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
