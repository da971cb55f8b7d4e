use chrono::{Duration, Utc};
use core_config::{ConfigError, FromEnv, env_parse_or, env_required};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{UserError, UserResult};

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 86_400;

const MIN_SECRET_LEN: usize = 32;

/// Issues the session token returned by a successful login.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, user_id: &str, email: &str) -> UserResult<String>;
}

/// JWT claims carried by session tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// Signing settings for [`JwtTokenIssuer`]
#[derive(Clone)]
pub struct JwtConfig {
    /// At least 32 characters
    pub secret: String,
    pub expiration_secs: i64,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("expiration_secs", &self.expiration_secs)
            .finish()
    }
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                key: "JWT_SECRET".to_string(),
                details: format!(
                    "must be at least {MIN_SECRET_LEN} characters (got {}). Generate one with: openssl rand -base64 32",
                    secret.len()
                ),
            });
        }
        Ok(Self {
            secret,
            expiration_secs: DEFAULT_TOKEN_TTL_SECS,
        })
    }
}

impl FromEnv for JwtConfig {
    /// - JWT_SECRET: required
    /// - JWT_EXPIRATION_SECS: defaults to 86400
    fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::new(env_required("JWT_SECRET")?)?;
        config.expiration_secs = env_parse_or("JWT_EXPIRATION_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        Ok(config)
    }
}

/// HS256 JWT issuer
#[derive(Clone)]
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            ttl: Duration::seconds(config.expiration_secs),
        }
    }

    /// Check the signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> UserResult<TokenClaims> {
        decode::<TokenClaims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
        .map_err(|e| UserError::Token(e.to_string()))
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: &str, email: &str) -> UserResult<String> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| UserError::Token(e.to_string()))
    }
}
