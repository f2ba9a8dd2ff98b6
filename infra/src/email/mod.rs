//! Email delivery module
//!
//! SMTP delivery of verification codes via lettre, with a demo mode that
//! skips the network when no SMTP credentials are configured.

pub mod smtp;
pub mod template;

pub use smtp::SmtpMailer;
