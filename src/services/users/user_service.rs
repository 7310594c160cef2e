//! 사용자 등록 및 자격 증명 확인 서비스
//!
//! 비밀번호는 bcrypt 해시로만 저장합니다. 해시 비용은 실행 환경에 따라
//! 달라지며(`PasswordConfig::bcrypt_cost`), 해싱과 검증은 CPU를 오래 쓰므로
//! actix 블로킹 스레드 풀에서 실행합니다.

use std::sync::Arc;

use actix_web::web;

use crate::domain::dto::users::{CreateUserRequest, LoginRequest};
use crate::domain::entities::users::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;

const BAD_CREDENTIALS: &str = "incorrect user or password";

pub struct UserService {
    users: Arc<dyn UserStore>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, bcrypt_cost: u32) -> Self {
        Self { users, bcrypt_cost }
    }

    /// 새 사용자를 등록하고 사용자명을 반환합니다.
    ///
    /// 이미 존재하는 사용자명이면 `ConflictError("user already exists")`.
    /// 존재 확인과 삽입 사이의 동시 등록은 저장소의 unique 제약이 잡아냅니다.
    pub async fn register(&self, request: CreateUserRequest) -> AppResult<String> {
        if self.users.find_by_username(&request.username).await?.is_some() {
            log::info!("중복 사용자 등록 시도: {}", request.username);
            return Err(AppError::ConflictError("user already exists".to_string()));
        }

        let start_time = std::time::Instant::now();
        let cost = self.bcrypt_cost;
        let password = request.password;
        let password_hash = web::block(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::InternalError(format!("해싱 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = self
            .users
            .insert(User::new_local(request.username, password_hash))
            .await?;

        log::info!("✅ 사용자 등록 완료: {}", user.username);
        Ok(user.username)
    }

    /// 사용자명과 비밀번호를 확인합니다.
    ///
    /// 사용자가 없거나 비밀번호가 틀린 경우 모두 같은 메시지로 거부합니다.
    pub async fn verify_credentials(&self, request: LoginRequest) -> AppResult<User> {
        let user = self
            .users
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(BAD_CREDENTIALS.to_string()))?;

        let password = request.password;
        let password_hash = user.password_hash.clone();
        let is_valid = web::block(move || bcrypt::verify(password, &password_hash))
            .await
            .map_err(|e| AppError::InternalError(format!("검증 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;

        if !is_valid {
            log::info!("로그인 실패: {}", user.username);
            return Err(AppError::AuthenticationError(BAD_CREDENTIALS.to_string()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryUserStore;

    fn service() -> (UserService, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        (UserService::new(store.clone(), 4), store)
    }

    fn register_request(username: &str, password: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(username: &str, password: &str) -> LoginRequest {
        LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_stores_hash_not_password() {
        let (users, store) = service();

        let username = users.register(register_request("alice", "secret")).await.unwrap();
        assert_eq!(username, "alice");

        let stored = store.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret");
        assert!(bcrypt::verify("secret", &stored.password_hash).unwrap());
        assert!(stored.id.is_some());
    }

    #[actix_web::test]
    async fn test_register_twice_conflicts() {
        let (users, _) = service();
        users.register(register_request("alice", "secret")).await.unwrap();

        let err = users.register(register_request("alice", "other")).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(msg) if msg == "user already exists"));
    }

    #[actix_web::test]
    async fn test_login_success_and_failures_share_message() {
        let (users, _) = service();
        users.register(register_request("alice", "secret")).await.unwrap();

        let user = users.verify_credentials(login_request("alice", "secret")).await.unwrap();
        assert_eq!(user.username, "alice");

        let wrong_password = users
            .verify_credentials(login_request("alice", "wrong"))
            .await
            .unwrap_err();
        let unknown_user = users
            .verify_credentials(login_request("bob", "secret"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
        assert!(matches!(wrong_password, AppError::AuthenticationError(msg) if msg == BAD_CREDENTIALS));
    }
}
