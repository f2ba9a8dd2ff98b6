//! Authentication configuration: JWT signing and OTP lifecycle

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens (HS256)
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry: 1800, // 30 minutes
            issuer: String::from("voiceinvoice"),
        }
    }
}

impl JwtConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret = std::env::var("SECRET_KEY")
            .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string());
        let access_token_expiry = std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<i64>()
            .map(|minutes| minutes * 60)
            .unwrap_or(1800);

        Self {
            secret,
            access_token_expiry,
            issuer: String::from("voiceinvoice"),
        }
    }

    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }
}

/// OTP lifecycle configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes until an issued code expires
    pub expiry_minutes: i64,

    /// Maximum verification attempts before a code is discarded
    pub max_attempts: i32,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: 5,
            max_attempts: 3,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let expiry_minutes = std::env::var("OTP_EXPIRY_MINUTES")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .unwrap_or(5);
        let max_attempts = std::env::var("OTP_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse()
            .unwrap_or(3);

        Self {
            expiry_minutes,
            max_attempts,
        }
    }
}
