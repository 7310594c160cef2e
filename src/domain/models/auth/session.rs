//! 쿠키 세션 레코드
//!
//! 캐시 저장소에 `session:<sha256(token)>` 키로 저장되는 값입니다.
//! 원본 세션 토큰은 쿠키에만 존재하고 서버에는 다이제스트만 남습니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub username: String,
    /// 만료 시각 (Unix timestamp)
    pub expires_at: i64,
}
