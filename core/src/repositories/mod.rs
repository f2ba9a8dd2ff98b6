//! Repository interfaces for data persistence.
//!
//! Each repository module bundles the trait with an in-memory mock used by
//! service tests; concrete database implementations live in the infra crate.

pub mod otp;
pub mod user;

// Re-export commonly used types
pub use otp::{MockOtpCodeRepository, OtpCodeRepository};
pub use user::{MockUserRepository, UserRepository};
