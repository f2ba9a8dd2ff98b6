//! Configuration for the OTP service

use crate::domain::entities::otp_code::{DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};
use vi_shared::config::OtpConfig;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Number of minutes before an issued code expires
    pub expiry_minutes: i64,
    /// Maximum number of verification attempts allowed
    pub max_attempts: i32,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRATION_MINUTES,
            max_attempts: MAX_ATTEMPTS,
        }
    }
}

impl From<OtpConfig> for OtpServiceConfig {
    fn from(config: OtpConfig) -> Self {
        Self {
            expiry_minutes: config.expiry_minutes,
            max_attempts: config.max_attempts,
        }
    }
}
