pub mod mock;
pub mod repository;

pub use mock::MockOtpCodeRepository;
pub use repository::OtpCodeRepository;
