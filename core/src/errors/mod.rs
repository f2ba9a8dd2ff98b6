//! Domain-specific error types and error handling.

use thiserror::Error;

/// Authentication and OTP lifecycle errors
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("No valid OTP found")]
    OtpNotFound,

    #[error("OTP expired")]
    OtpExpired,

    #[error("Too many attempts")]
    TooManyAttempts,

    #[error("Invalid OTP code")]
    InvalidOtpCode,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidCredentials,

    #[error("Token generation failed")]
    TokenGenerationFailed,

    #[error("Invalid or expired token")]
    InvalidToken,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Email delivery error: {message}")]
    Email { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to authentication-specific errors
    #[error(transparent)]
    Auth(#[from] AuthError),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_messages() {
        assert_eq!(AuthError::OtpNotFound.to_string(), "No valid OTP found");
        assert_eq!(AuthError::TooManyAttempts.to_string(), "Too many attempts");
        assert_eq!(AuthError::InvalidOtpCode.to_string(), "Invalid OTP code");
    }

    #[test]
    fn test_transparent_conversion() {
        let err: DomainError = AuthError::UserAlreadyExists.into();
        assert_eq!(err.to_string(), "User already exists");

        let err: DomainError = AuthError::OtpExpired.into();
        assert_eq!(err.to_string(), "OTP expired");
    }
}
