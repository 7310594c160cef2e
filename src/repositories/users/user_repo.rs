//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//!
//! ## 특징
//!
//! - **유니크 제약**: `username` 필드의 unique 인덱스로 중복 등록을 차단
//! - **경쟁 조건 처리**: 존재 확인과 삽입 사이에 끼어든 동시 등록은
//!   중복 키 오류(11000)로 감지되어 `ConflictError`로 보고됩니다.
//! - **캐싱 없음**: 사용자 조회는 로그인 시에만 발생하므로 캐시하지 않습니다.

use std::time::Duration;

use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::config::DatabaseConfig;
use crate::db::{with_deadline, Database};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};

const DUPLICATE_KEY: i32 = 11000;

/// 사용자 계정 저장소
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명으로 사용자 조회
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 사용자명의 사용자가 없는 경우
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// 새 사용자를 저장하고 할당된 `_id`를 채워 반환합니다.
    ///
    /// 사용자명이 이미 존재하면 `AppError::ConflictError`
    async fn insert(&self, user: User) -> AppResult<User>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(&database);
/// repo.create_indexes().await?;
///
/// if repo.find_by_username("alice").await?.is_none() {
///     repo.insert(User::new_local("alice".into(), hash)).await?;
/// }
/// ```
pub struct UserRepository {
    collection: Collection<User>,
    timeout: Duration,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection(Self::COLLECTION),
            timeout: DatabaseConfig::timeout(),
        }
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 이미 존재하는 동일 인덱스는 MongoDB가 무시하므로
    /// 서버 시작 시마다 호출해도 안전합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("username_unique".to_string())
                    .build(),
            )
            .build();

        with_deadline(self.timeout, "users.create_index", async {
            self.collection.create_index(username_index).await
        })
        .await?;

        log::info!("✅ users 컬렉션 인덱스 확인 완료");
        Ok(())
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        with_deadline(self.timeout, "users.find_one", async {
            self.collection.find_one(doc! { "username": username }).await
        })
        .await
    }

    async fn insert(&self, mut user: User) -> AppResult<User> {
        let result = with_deadline(self.timeout, "users.insert_one", async {
            self.collection.insert_one(&user).await.map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ConflictError("user already exists".to_string())
                } else {
                    AppError::from(e)
                }
            })
        })
        .await?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }
}
