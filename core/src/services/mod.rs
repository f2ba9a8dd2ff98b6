//! Business services containing domain logic and use cases.

pub mod account;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use account::AccountService;
pub use otp::{OtpMailer, OtpService, OtpServiceConfig};
pub use token::{Claims, TokenService};
