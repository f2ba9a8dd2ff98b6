//! Password hashing helpers built on bcrypt

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::{DomainError, DomainResult};

/// Hash a plaintext password with a per-hash random salt
pub fn hash_password(password: &str) -> DomainResult<String> {
    hash(password, DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// Check a plaintext password against a stored bcrypt hash
pub fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    verify(password, password_hash).map_err(|e| DomainError::Internal {
        message: format!("Failed to verify password: {}", e),
    })
}
