//! MySQL implementation of the OtpCodeRepository trait.
//!
//! Expired rows are removed by the service's inline sweep rather than a
//! scheduled job, so every mutation here is a plain single-statement query.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use tracing::debug;
use uuid::Uuid;

use vi_core::domain::entities::otp_code::{OtpCode, OtpPurpose};
use vi_core::errors::DomainError;
use vi_core::repositories::OtpCodeRepository;

/// MySQL implementation of OtpCodeRepository
pub struct MySqlOtpCodeRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpCodeRepository {
    /// Create a new MySQL OTP code repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an OtpCode entity
    fn row_to_otp(row: &sqlx::mysql::MySqlRow) -> Result<OtpCode, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        let purpose: String = row.try_get("purpose").map_err(|e| DomainError::Database {
            message: format!("Failed to get purpose: {}", e),
        })?;

        Ok(OtpCode {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            purpose: purpose.parse::<OtpPurpose>().map_err(|e| DomainError::Database {
                message: format!("Invalid purpose: {}", e),
            })?,
            code: row.try_get("code").map_err(|e| DomainError::Database {
                message: format!("Failed to get code: {}", e),
            })?,
            attempts: row.try_get("attempts").map_err(|e| DomainError::Database {
                message: format!("Failed to get attempts: {}", e),
            })?,
            max_attempts: row
                .try_get("max_attempts")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get max_attempts: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_used: row.try_get("is_used").map_err(|e| DomainError::Database {
                message: format!("Failed to get is_used: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl OtpCodeRepository for MySqlOtpCodeRepository {
    async fn find_unused(
        &self,
        email: &str,
        purpose: OtpPurpose,
    ) -> Result<Option<OtpCode>, DomainError> {
        let query = r#"
            SELECT id, email, purpose, code, attempts, max_attempts,
                   created_at, expires_at, is_used
            FROM otp_codes
            WHERE email = ? AND purpose = ? AND is_used = FALSE
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_otp(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let query = r#"
            INSERT INTO otp_codes (
                id, email, purpose, code, attempts, max_attempts,
                created_at, expires_at, is_used
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(otp.id.to_string())
            .bind(&otp.email)
            .bind(otp.purpose.as_str())
            .bind(&otp.code)
            .bind(otp.attempts)
            .bind(otp.max_attempts)
            .bind(otp.created_at)
            .bind(otp.expires_at)
            .bind(otp.is_used)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to store OTP code: {}", e),
            })?;

        Ok(otp)
    }

    async fn update(&self, otp: OtpCode) -> Result<OtpCode, DomainError> {
        let query = r#"
            UPDATE otp_codes SET
                attempts = ?,
                is_used = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(otp.attempts)
            .bind(otp.is_used)
            .bind(otp.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update OTP code: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("OTP code {}", otp.id),
            });
        }

        Ok(otp)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete OTP code: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_unused(&self, email: &str, purpose: OtpPurpose) -> Result<u64, DomainError> {
        let query = r#"
            DELETE FROM otp_codes
            WHERE email = ? AND purpose = ? AND is_used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .bind(purpose.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete unused OTP codes: {}", e),
            })?;

        Ok(result.rows_affected())
    }

    async fn delete_expired(&self) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE expires_at < NOW()")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete expired OTP codes: {}", e),
            })?;

        let removed = result.rows_affected();
        if removed > 0 {
            debug!(removed, "Swept expired OTP codes");
        }

        Ok(removed)
    }
}
