//! Mock implementation of OtpCodeRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::otp_code::{OtpCode, OtpPurpose};
use crate::errors::DomainError;

use super::repository::OtpCodeRepository;

/// Mock OTP code repository for testing
pub struct MockOtpCodeRepository {
    codes: Arc<RwLock<HashMap<Uuid, OtpCode>>>,
}

impl MockOtpCodeRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored codes, for test assertions
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }

    /// Count unused codes for an (email, purpose) pair, for test assertions
    pub async fn count_unused(&self, email: &str, purpose: OtpPurpose) -> usize {
        let codes = self.codes.read().await;
        codes
            .values()
            .filter(|c| c.email == email && c.purpose == purpose && !c.is_used)
            .count()
    }
}

impl Default for MockOtpCodeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpCodeRepository for MockOtpCodeRepository {
    async fn find_unused(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OtpCode>, DomainError> {
        let codes = self.codes.read().await;
        Ok(codes
            .values()
            .find(|c| c.email == email && c.purpose == purpose && !c.is_used)
            .cloned())
    }

    async fn create(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let mut codes = self.codes.write().await;
        codes.insert(otp.id, otp.clone());
        Ok(otp)
    }

    async fn update(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let mut codes = self.codes.write().await;

        if !codes.contains_key(&otp.id) {
            return Err(DomainError::NotFound {
                resource: "OtpCode".to_string(),
            });
        }

        codes.insert(otp.id, otp.clone());
        Ok(otp)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut codes = self.codes.write().await;
        Ok(codes.remove(&id).is_some())
    }

    async fn delete_unused(&self, email: &str, purpose: OtpPurpose) -> Result<u64, DomainError> {
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, c| !(c.email == email && c.purpose == purpose && !c.is_used));
        Ok((before - codes.len()) as u64)
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let now = Utc::now();
        let mut codes = self.codes.write().await;
        let before = codes.len();
        codes.retain(|_, c| c.expires_at >= now);
        Ok((before - codes.len()) as u64)
    }
}
