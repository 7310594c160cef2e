//! User Entity Implementation
//!
//! 레시피 API에 로그인할 수 있는 사용자 계정입니다.
//! 원본 비밀번호는 저장하지 않고 bcrypt 해시만 보관합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 로그인 이름 (컬렉션 전체에서 유일)
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime,
}

impl User {
    pub fn new_local(username: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            created_at: DateTime::now(),
        }
    }
}
