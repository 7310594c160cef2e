//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 캐시, 서버, 로깅 및 환경 관련 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 파싱에 실패하면 기본값을 사용합니다.

use std::env;
use std::fmt::Display;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

/// 환경 변수를 읽어 파싱하고, 없거나 잘못된 값이면 기본값을 반환합니다.
pub(crate) fn env_or<T: FromStr>(key: &str, default: T) -> T {
    parse_or(env::var(key).ok().as_deref(), default)
}

/// [`env_or`]와 같지만 `range` 밖의 값은 경고 후 기본값으로 대체합니다.
pub(crate) fn env_in_range<T>(key: &str, default: T, range: RangeInclusive<T>) -> T
where
    T: FromStr + PartialOrd + Display + Copy,
{
    parse_in_range(key, env::var(key).ok().as_deref(), default, range)
}

fn parse_in_range<T>(key: &str, raw: Option<&str>, default: T, range: RangeInclusive<T>) -> T
where
    T: FromStr + PartialOrd + Display + Copy,
{
    let value = parse_or(raw, default);
    if range.contains(&value) {
        value
    } else {
        log::warn!(
            "{}={}는 허용 범위({}..={})를 벗어나 기본값 {} 사용",
            key,
            value,
            range.start(),
            range.end(),
            default
        );
        default
    }
}

fn parse_or<T: FromStr>(raw: Option<&str>, default: T) -> T {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.parse().unwrap_or_else(|_| {
            log::warn!("설정값 '{}' 파싱 실패, 기본값 사용", value);
            default
        }),
        _ => default,
    }
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    ///
    /// - Development/Test: 4
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost() -> u32 {
        match env_or::<u32>("BCRYPT_COST", 0) {
            cost @ 4..=15 => cost,
            _ => Self::bcrypt_cost_for_env(&Environment::current()),
        }
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 워커 스레드 수 (`WORKERS`, 기본값 4, 1-256)
    pub fn workers() -> usize {
        env_in_range("WORKERS", 4, 1..=256)
    }

    /// CORS 허용 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`에 쉼표로 구분하여 지정합니다.
    pub fn cors_allowed_origins() -> Vec<String> {
        Self::split_origins(
            &env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string()),
        )
    }

    fn split_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// 연결 URI (`MONGODB_URI`)
    pub fn uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 데이터베이스 이름 (`DATABASE_NAME`)
    pub fn name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "recipes".to_string())
    }

    /// 개별 쿼리의 최대 대기 시간 (`MONGO_TIMEOUT_SECONDS`, 기본값 5초)
    pub fn timeout() -> Duration {
        Duration::from_secs(env_or("MONGO_TIMEOUT_SECONDS", 5))
    }
}

/// Redis 캐시 설정
pub struct CacheConfig;

impl CacheConfig {
    /// 연결 URL (`REDIS_URL`)
    pub fn url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 레시피 캐시 항목의 TTL (`CACHE_TTL_SECONDS`, 기본값 12시간)
    pub fn ttl() -> Duration {
        Duration::from_secs(env_or("CACHE_TTL_SECONDS", 12 * 60 * 60))
    }

    /// 개별 명령의 최대 대기 시간 (`REDIS_TIMEOUT_MILLIS`, 기본값 1초)
    pub fn timeout() -> Duration {
        Duration::from_millis(env_or("REDIS_TIMEOUT_MILLIS", 1000))
    }
}

/// 로깅 설정
pub struct LogConfig;

impl LogConfig {
    /// env_logger 기본 필터
    ///
    /// `RUST_LOG`가 있으면 env_logger가 그대로 사용하고,
    /// 없으면 `LOG_LEVEL`(DEBUG/INFO/그 외)에 따라 필터를 결정합니다.
    pub fn default_filter() -> String {
        Self::filter_for(env::var("LOG_LEVEL").ok().as_deref())
    }

    fn filter_for(log_level: Option<&str>) -> String {
        match log_level.map(|level| level.trim().to_uppercase()) {
            Some(level) if level == "DEBUG" => "debug".to_string(),
            Some(level) if level == "INFO" => "info,actix_web=info".to_string(),
            Some(_) => "error".to_string(),
            None => "info,actix_web=info".to_string(),
        }
    }
}
