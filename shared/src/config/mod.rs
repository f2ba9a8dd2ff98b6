//! Configuration module with business-specific sub-modules
//!
//! Configuration is organized into logical areas:
//! - `server` - HTTP server binding
//! - `database` - Database connection and pool configuration
//! - `email` - SMTP transport and sender identity
//! - `auth` - JWT signing and OTP lifecycle parameters

pub mod auth;
pub mod database;
pub mod email;
pub mod server;

use serde::{Deserialize, Serialize};

pub use auth::{JwtConfig, OtpConfig};
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// SMTP email configuration
    pub email: EmailConfig,

    /// JWT configuration
    pub jwt: JwtConfig,

    /// OTP lifecycle configuration
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
            jwt: JwtConfig::from_env(),
            otp: OtpConfig::from_env(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            email: EmailConfig::default(),
            jwt: JwtConfig::default(),
            otp: OtpConfig::default(),
        }
    }
}
