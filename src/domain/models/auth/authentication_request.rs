use actix_web::http::Method;

/// 인증 모드를 정의하는 열거형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// 모든 요청에 인증이 필요함
    Required,
    /// 상태를 변경하는 요청(POST, PUT, PATCH, DELETE)에만 인증이 필요함
    WriteOnly,
}

impl AuthMode {
    /// 주어진 HTTP 메서드에 인증 검사를 적용해야 하는지 확인
    pub fn applies_to(&self, method: &Method) -> bool {
        match self {
            AuthMode::Required => true,
            AuthMode::WriteOnly => !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_applies_to_every_method() {
        assert!(AuthMode::Required.applies_to(&Method::GET));
        assert!(AuthMode::Required.applies_to(&Method::POST));
    }

    #[test]
    fn test_write_only_skips_safe_methods() {
        assert!(!AuthMode::WriteOnly.applies_to(&Method::GET));
        assert!(!AuthMode::WriteOnly.applies_to(&Method::HEAD));
        assert!(!AuthMode::WriteOnly.applies_to(&Method::OPTIONS));
        assert!(AuthMode::WriteOnly.applies_to(&Method::POST));
        assert!(AuthMode::WriteOnly.applies_to(&Method::PUT));
        assert!(AuthMode::WriteOnly.applies_to(&Method::DELETE));
    }
}
