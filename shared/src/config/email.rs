//! SMTP email configuration module

use serde::{Deserialize, Serialize};

/// SMTP transport and sender identity configuration
///
/// Credentials are optional: when either the username or the password is
/// missing the mailer degrades to demo mode and no email is sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_server: String,

    /// SMTP server port (STARTTLS)
    pub smtp_port: u16,

    /// SMTP username
    pub username: Option<String>,

    /// SMTP password
    pub password: Option<String>,

    /// Sender address
    pub from_email: String,

    /// Sender display name
    pub from_name: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_server: String::from("smtp.gmail.com"),
            smtp_port: 587,
            username: None,
            password: None,
            from_email: String::from("noreply@voiceinvoice.app"),
            from_name: String::from("VoiceInvoice Team"),
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let smtp_server =
            std::env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .unwrap_or(587);
        let username = std::env::var("SMTP_USERNAME").ok().filter(|s| !s.is_empty());
        let password = std::env::var("SMTP_PASSWORD").ok().filter(|s| !s.is_empty());
        let from_email = std::env::var("FROM_EMAIL")
            .ok()
            .or_else(|| username.clone())
            .unwrap_or_else(|| "noreply@voiceinvoice.app".to_string());
        let from_name =
            std::env::var("FROM_NAME").unwrap_or_else(|_| "VoiceInvoice Team".to_string());

        Self {
            smtp_server,
            smtp_port,
            username,
            password,
            from_email,
            from_name,
        }
    }

    /// Whether full SMTP credentials are available
    pub fn has_credentials(&self) -> bool {
        self.username.is_some() && self.password.is_some()
    }

    /// Formatted sender mailbox, e.g. `VoiceInvoice Team <noreply@...>`
    pub fn from_mailbox(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }
}
