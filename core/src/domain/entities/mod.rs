//! Domain entities representing core business objects.

pub mod otp_code;
pub mod user;

// Re-export commonly used types
pub use otp_code::{OtpCode, OtpPurpose, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES, MAX_ATTEMPTS};
pub use user::User;
