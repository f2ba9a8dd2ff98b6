//! OTP code repository trait defining the interface for code persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::otp_code::{OtpCode, OtpPurpose};
use crate::errors::DomainError;

/// Repository trait for OtpCode persistence operations
///
/// Every operation touches at most one record (or a filtered bulk delete),
/// so single-record atomicity from the backing store is all the OTP
/// lifecycle needs. Implementations must uphold the invariant that at most
/// one unused record exists per (email, purpose) after `create` is called
/// following `delete_unused`.
#[async_trait]
pub trait OtpCodeRepository: Send + Sync {
    /// Find the unused code for an (email, purpose) pair, if any
    async fn find_unused(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OtpCode>, DomainError>;

    /// Store a newly issued code
    async fn create(&self, otp: OtpCode) -> Result<OtpCode, DomainError>;

    /// Persist mutated fields (attempt counter) of an existing code
    async fn update(&self, otp: OtpCode) -> Result<OtpCode, DomainError>;

    /// Delete a code by id
    ///
    /// # Returns
    /// * `Ok(true)` - Record was deleted
    /// * `Ok(false)` - No record with that id
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Delete all unused codes for an (email, purpose) pair
    ///
    /// # Returns
    /// The number of records removed
    async fn delete_unused(&self, email: &str, purpose: OtpPurpose) -> Result<u64, DomainError>;

    /// Delete all codes past their expiry, regardless of owner
    ///
    /// # Returns
    /// The number of records removed
    async fn delete_expired(&self) -> Result<u64, DomainError>;
}
