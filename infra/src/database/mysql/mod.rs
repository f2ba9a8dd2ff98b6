//! MySQL repository implementations

pub mod otp_repository_impl;
pub mod user_repository_impl;

pub use otp_repository_impl::MySqlOtpCodeRepository;
pub use user_repository_impl::MySqlUserRepository;
