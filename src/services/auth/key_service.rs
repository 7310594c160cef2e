//! JWT 서명 키 관리
//!
//! 서명 키는 프로세스 시작 시 한 번 생성되어 [`TokenService`]에 주입됩니다.
//! 로그인이나 토큰 갱신 시 키를 다시 만들지 않으므로, 이미 발급된 토큰은
//! 만료 시각까지 계속 검증됩니다.
//!
//! ## 지원 알고리즘
//!
//! - **HS256** (기본값): `JWT_SECRET`을 대칭 키로 사용합니다. 설정되지 않으면
//!   32바이트 난수 키를 생성하며, 이 경우 재시작 후에는 기존 토큰이 무효가 됩니다.
//! - **RS256**: PEM 파일에서 RSA 키 쌍을 읽고, 파일이 없으면 2048비트 키를
//!   생성해 저장합니다. 공개키는 JWKS 문서로 노출됩니다.
//!
//! [`TokenService`]: super::token_service::TokenService

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::rand_core::{OsRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::config::{JwtAlgorithm, JwtConfig};
use crate::errors::{AppError, AppResult, ErrorContext};

const KEY_ID: &str = "recipes-api-key-1";

/// 토큰 서명/검증 키 묶음
pub struct SigningKeys {
    algorithm: Algorithm,
    encoding: EncodingKey,
    decoding: DecodingKey,
    jwks: Option<serde_json::Value>,
}

impl SigningKeys {
    /// 환경 설정에 따라 서명 키를 준비합니다.
    pub fn from_config() -> AppResult<Self> {
        match JwtConfig::algorithm() {
            JwtAlgorithm::HS256 => match JwtConfig::secret() {
                Some(secret) => Ok(Self::hs256(secret.as_bytes())),
                None => {
                    log::warn!("⚠️ JWT_SECRET 미설정, 임시 서명 키를 생성합니다 (재시작 시 기존 토큰 무효)");
                    Ok(Self::random_hs256())
                }
            },
            JwtAlgorithm::RS256 => {
                Self::rs256_from_files(&JwtConfig::private_key_path(), &JwtConfig::public_key_path())
            }
        }
    }

    pub fn hs256(secret: &[u8]) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            jwks: None,
        }
    }

    pub fn random_hs256() -> Self {
        let mut secret = [0u8; 32];
        OsRng.fill_bytes(&mut secret);
        Self::hs256(&secret)
    }

    /// RSA 개인키로 RS256 키 묶음을 만듭니다.
    pub fn rs256(private_key: &RsaPrivateKey) -> AppResult<Self> {
        let public_key = private_key.to_public_key();

        let private_key_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .context("RSA 개인키 PEM 변환 실패")?;
        let encoding = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .context("RS256 서명 키 생성 실패")?;

        let n = general_purpose::URL_SAFE_NO_PAD.encode(public_key.n().to_bytes_be());
        let e = general_purpose::URL_SAFE_NO_PAD.encode(public_key.e().to_bytes_be());
        let decoding = DecodingKey::from_rsa_components(&n, &e).context("RS256 검증 키 생성 실패")?;

        let jwks = serde_json::json!({
            "keys": [{
                "kty": "RSA",
                "use": "sig",
                "kid": KEY_ID,
                "alg": "RS256",
                "n": n,
                "e": e,
            }]
        });

        Ok(Self {
            algorithm: Algorithm::RS256,
            encoding,
            decoding,
            jwks: Some(jwks),
        })
    }

    fn rs256_from_files(private_key_path: &str, public_key_path: &str) -> AppResult<Self> {
        if !Path::new(private_key_path).exists() || !Path::new(public_key_path).exists() {
            log::info!("🔑 JWT RSA 키가 없어 새로 생성합니다");
            Self::generate_rsa_keys(private_key_path, public_key_path)?;
        } else {
            log::info!("🔑 기존 JWT RSA 키 로드: {}", private_key_path);
        }

        let private_key_pem = fs::read_to_string(private_key_path)
            .with_context(|| format!("개인키 파일 읽기 실패 '{}'", private_key_path))?;
        let public_key_pem = fs::read_to_string(public_key_path)
            .with_context(|| format!("공개키 파일 읽기 실패 '{}'", public_key_path))?;

        let private_key =
            RsaPrivateKey::from_pkcs1_pem(&private_key_pem).context("개인키 PEM 파싱 실패")?;
        let public_key =
            RsaPublicKey::from_public_key_pem(&public_key_pem).context("공개키 PEM 파싱 실패")?;

        if private_key.to_public_key() != public_key {
            return Err(AppError::InternalError(format!(
                "'{}'와 '{}'는 같은 키 쌍이 아닙니다",
                private_key_path, public_key_path
            )));
        }

        Self::rs256(&private_key)
    }

    fn generate_rsa_keys(private_key_path: &str, public_key_path: &str) -> AppResult<()> {
        for path in [private_key_path, public_key_path] {
            if let Some(parent) = Path::new(path).parent() {
                fs::create_dir_all(parent).context("키 디렉토리 생성 실패")?;
            }
        }

        let private_key = RsaPrivateKey::new(&mut OsRng, 2048).context("RSA 키 생성 실패")?;
        let public_key = private_key.to_public_key();

        // 개인키는 PKCS#1, 공개키는 SPKI(PKCS#8) 형식
        let private_key_pem = private_key
            .to_pkcs1_pem(LineEnding::LF)
            .context("RSA 개인키 PEM 변환 실패")?;
        fs::write(private_key_path, private_key_pem.as_bytes()).context("개인키 저장 실패")?;

        let public_key_pem = public_key
            .to_public_key_pem(LineEnding::LF)
            .context("RSA 공개키 PEM 변환 실패")?;
        fs::write(public_key_path, public_key_pem.as_bytes()).context("공개키 저장 실패")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(private_key_path, fs::Permissions::from_mode(0o600))
                .context("개인키 권한 설정 실패")?;
        }

        log::info!("📁 개인키 저장: {}", private_key_path);
        log::info!("📁 공개키 저장: {}", public_key_path);
        Ok(())
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// 서명에 사용할 JWT 헤더. RS256이면 `kid`를 포함합니다.
    pub fn header(&self) -> Header {
        let mut header = Header::new(self.algorithm);
        if self.jwks.is_some() {
            header.kid = Some(KEY_ID.to_string());
        }
        header
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }

    /// 공개키 JWKS 문서. 대칭 키(HS256)는 공개하지 않으므로 `None`.
    pub fn jwks(&self) -> Option<&serde_json::Value> {
        self.jwks.as_ref()
    }
}
