//! OTP lifecycle service: issuance, delivery, and verification.

pub mod config;
pub mod service;
pub mod traits;


pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::OtpMailer;
