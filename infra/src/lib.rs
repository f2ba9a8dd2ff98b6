//! # Infrastructure Layer
//!
//! Concrete implementations for the persistence and delivery seams the core
//! crate defines as traits:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: SMTP delivery for verification codes via lettre

pub mod database;
pub mod email;

pub use database::{DatabasePool, MySqlOtpCodeRepository, MySqlUserRepository};
pub use email::SmtpMailer;

use thiserror::Error;

/// Errors raised by infrastructure components before they cross into the
/// domain layer
#[derive(Debug, Error)]
pub enum InfrastructureError {
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration is invalid or incomplete
    #[error("Configuration error: {0}")]
    Config(String),
}
