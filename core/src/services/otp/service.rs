//! Main OTP lifecycle service implementation

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::otp_code::{OtpCode, OtpPurpose};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::OtpCodeRepository;
use vi_shared::utils::is_valid_email;

use super::config::OtpServiceConfig;
use super::traits::OtpMailer;

/// Service managing the full lifecycle of one-time codes
///
/// Codes are short-lived records keyed by (email, purpose). At most one
/// unused record exists per pair: issuance replaces any prior unused code.
/// There is no scheduler; expired records are swept inline on issuance,
/// while verification reports an expired record as such before deleting it.
pub struct OtpService<R, M>
where
    R: OtpCodeRepository,
    M: OtpMailer,
{
    /// Repository for code persistence
    repository: Arc<R>,
    /// Mailer for code delivery
    mailer: Arc<M>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<R, M> OtpService<R, M>
where
    R: OtpCodeRepository,
    M: OtpMailer,
{
    /// Create a new OTP service
    pub fn new(repository: Arc<R>, mailer: Arc<M>, config: OtpServiceConfig) -> Self {
        Self {
            repository,
            mailer,
            config,
        }
    }

    /// Issue a new code for an (email, purpose) pair and deliver it by email
    ///
    /// Any prior unused code for the pair is discarded first, so the pair
    /// never holds more than one live code. Delivery failures are logged and
    /// swallowed: the issued code stays valid and the caller sees success.
    ///
    /// The code is deliberately not returned; it travels only via email.
    pub async fn issue(&self, email: &str, purpose: OtpPurpose) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        self.sweep_expired().await?;

        let replaced = self.repository.delete_unused(email, purpose).await?;
        if replaced > 0 {
            debug!(email, %purpose, replaced, "Replaced previous unused OTP");
        }

        let otp = OtpCode {
            max_attempts: self.config.max_attempts,
            ..OtpCode::with_expiration(email.to_string(), purpose, self.config.expiry_minutes)
        };
        let otp = self.repository.create(otp).await?;

        info!(email, %purpose, "OTP issued");

        if let Err(e) = self.mailer.send_otp(email, &otp.code, purpose).await {
            // Reported as success anyway: delivery is best-effort in this
            // system and the code remains redeemable.
            warn!(email, %purpose, error = %e, "OTP email delivery failed");
        }

        Ok(())
    }

    /// Verify a submitted code for an (email, purpose) pair
    ///
    /// The check sequence, with early exits:
    /// 1. no unused record -> `OtpNotFound`
    /// 2. record expired -> record deleted, `OtpExpired`
    /// 3. attempts exhausted -> record deleted, `TooManyAttempts`
    /// 4. attempt counter incremented and persisted
    /// 5. code mismatch -> `InvalidOtpCode` (record deleted once the counter
    ///    reaches the ceiling, so the next attempt sees `OtpNotFound`)
    /// 6. match -> record consumed, success
    pub async fn verify(&self, email: &str, code: &str, purpose: OtpPurpose) -> DomainResult<()> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        let mut otp = self
            .repository
            .find_unused(email, purpose)
            .await?
            .ok_or(AuthError::OtpNotFound)?;

        if otp.is_expired() {
            self.repository.delete(otp.id).await?;
            debug!(email, %purpose, "Rejected expired OTP");
            return Err(AuthError::OtpExpired.into());
        }

        if otp.attempts_exhausted() {
            self.repository.delete(otp.id).await?;
            debug!(email, %purpose, "Rejected OTP with exhausted attempts");
            return Err(AuthError::TooManyAttempts.into());
        }

        otp.attempts += 1;

        if otp.code != code {
            if otp.attempts_exhausted() {
                self.repository.delete(otp.id).await?;
                debug!(email, %purpose, "OTP discarded after final failed attempt");
            } else {
                self.repository.update(otp.clone()).await?;
                debug!(
                    email,
                    %purpose,
                    remaining = otp.remaining_attempts(),
                    "OTP attempt failed"
                );
            }
            return Err(AuthError::InvalidOtpCode.into());
        }

        // Consume on success; a verified code can never be replayed.
        self.repository.delete(otp.id).await?;
        info!(email, %purpose, "OTP verified");

        Ok(())
    }

    async fn sweep_expired(&self) -> DomainResult<()> {
        let removed = self.repository.delete_expired().await?;
        if removed > 0 {
            debug!(removed, "Swept expired OTP records");
        }
        Ok(())
    }
}
