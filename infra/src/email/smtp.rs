//! SMTP mailer implementing the core `OtpMailer` trait.
//!
//! Uses lettre's blocking SMTP transport on the tokio blocking pool. When no
//! SMTP credentials are configured the mailer runs in demo mode: the send is
//! skipped, the code is logged, and the operation succeeds.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::{header, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::{debug, info, warn};

use vi_core::domain::entities::otp_code::OtpPurpose;
use vi_core::errors::{DomainError, DomainResult};
use vi_core::services::OtpMailer;
use vi_shared::config::EmailConfig;

use super::template;

const SMTP_TIMEOUT_SECS: u64 = 30;

/// SMTP-backed mailer for verification code delivery
pub struct SmtpMailer {
    config: EmailConfig,
    /// Code lifetime quoted in the email copy; must match the issuing service
    expiry_minutes: i64,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from email configuration
    pub fn new(config: EmailConfig, expiry_minutes: i64) -> Self {
        if !config.has_credentials() {
            warn!("SMTP credentials not configured, mailer running in demo mode");
        }
        Self {
            config,
            expiry_minutes,
        }
    }

    /// Whether real emails will be sent
    pub fn is_configured(&self) -> bool {
        self.config.has_credentials()
    }

    fn build_transport(&self) -> DomainResult<SmtpTransport> {
        // has_credentials() was checked by the caller
        let username = self.config.username.clone().unwrap_or_default();
        let password = self.config.password.clone().unwrap_or_default();

        let transport = SmtpTransport::starttls_relay(&self.config.smtp_server)
            .map_err(|e| DomainError::Email {
                message: format!("Failed to create SMTP transport: {}", e),
            })?
            .port(self.config.smtp_port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(Duration::from_secs(SMTP_TIMEOUT_SECS)))
            .build();

        Ok(transport)
    }

    fn build_message(&self, to: &str, code: &str, purpose: OtpPurpose) -> DomainResult<Message> {
        let from = self
            .config
            .from_mailbox()
            .parse()
            .map_err(|e| DomainError::Email {
                message: format!("Invalid from address: {}", e),
            })?;

        let to = to.parse().map_err(|e| DomainError::Email {
            message: format!("Invalid recipient address: {}", e),
        })?;

        let body = MultiPart::alternative()
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_PLAIN)
                    .body(template::otp_text_body(code, purpose, self.expiry_minutes)),
            )
            .singlepart(
                SinglePart::builder()
                    .header(header::ContentType::TEXT_HTML)
                    .body(template::otp_html_body(code, purpose, self.expiry_minutes)),
            );

        Message::builder()
            .from(from)
            .to(to)
            .subject(template::otp_subject(code))
            .multipart(body)
            .map_err(|e| DomainError::Email {
                message: format!("Failed to build message: {}", e),
            })
    }
}

#[async_trait]
impl OtpMailer for SmtpMailer {
    async fn send_otp(&self, to: &str, code: &str, purpose: OtpPurpose) -> DomainResult<()> {
        if !self.config.has_credentials() {
            info!(to, code, purpose = %purpose, "Demo mode: OTP email not sent");
            return Ok(());
        }

        debug!(to, purpose = %purpose, "Sending OTP email");

        let message = self.build_message(to, code, purpose)?;
        let transport = self.build_transport()?;

        // lettre's SmtpTransport is synchronous
        tokio::task::spawn_blocking(move || {
            transport.send(&message).map_err(|e| DomainError::Email {
                message: format!("Failed to send email: {}", e),
            })
        })
        .await
        .map_err(|e| DomainError::Email {
            message: format!("Email task join error: {}", e),
        })??;

        info!(to, purpose = %purpose, "OTP email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> EmailConfig {
        EmailConfig {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            username: None,
            password: None,
            from_email: "noreply@voiceinvoice.app".to_string(),
            from_name: "VoiceInvoice Team".to_string(),
        }
    }

    fn configured() -> EmailConfig {
        EmailConfig {
            username: Some("user@example.com".to_string()),
            password: Some("app-password".to_string()),
            ..demo_config()
        }
    }

    #[tokio::test]
    async fn test_demo_mode_send_succeeds_without_network() {
        let mailer = SmtpMailer::new(demo_config(), 5);
        assert!(!mailer.is_configured());

        let result = mailer.send_otp("a@b.com", "123456", OtpPurpose::Login).await;
        assert!(result.is_ok());
    }

    #[test]
    fn test_build_message() {
        let mailer = SmtpMailer::new(configured(), 5);
        let message = mailer.build_message("test@example.com", "123456", OtpPurpose::Signup);
        assert!(message.is_ok());
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let mailer = SmtpMailer::new(configured(), 5);
        let message = mailer.build_message("not an address", "123456", OtpPurpose::Login);
        assert!(matches!(message, Err(DomainError::Email { .. })));
    }
}
