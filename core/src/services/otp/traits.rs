//! Trait for email delivery integration

use async_trait::async_trait;

use crate::domain::entities::otp_code::OtpPurpose;
use crate::errors::DomainResult;

/// Trait for delivering one-time codes by email
///
/// The SMTP implementation lives in the infra crate; tests substitute an
/// in-memory mock.
#[async_trait]
pub trait OtpMailer: Send + Sync {
    /// Send a one-time code to the given address
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> DomainResult<()>;
}
