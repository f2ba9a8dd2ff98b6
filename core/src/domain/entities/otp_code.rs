//! One-time password entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of verification attempts allowed
pub const MAX_ATTEMPTS: i32 = 3;

/// Length of the one-time code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for one-time codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Why an OTP was issued; scopes uniqueness per email
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    /// Verifying an email before signing in
    Login,
    /// Verifying an email during account creation
    Signup,
}

impl OtpPurpose {
    /// Stable string form used in persistence and email copy
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Login => "login",
            OtpPurpose::Signup => "signup",
        }
    }
}

impl std::fmt::Display for OtpPurpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OtpPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "login" => Ok(OtpPurpose::Login),
            "signup" => Ok(OtpPurpose::Signup),
            _ => Err(format!("Invalid OTP purpose: {}", s)),
        }
    }
}

/// One-time password entity for email-based verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    /// Unique identifier for the code record
    pub id: Uuid,

    /// Email address this code was sent to
    pub email: String,

    /// Why the code was issued
    pub purpose: OtpPurpose,

    /// The 6-digit code
    pub code: String,

    /// Number of verification attempts made
    pub attempts: i32,

    /// Attempt ceiling recorded with the code
    pub max_attempts: i32,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Whether the code has been successfully used
    pub is_used: bool,
}

impl OtpCode {
    /// Creates a new code with a cryptographically secure random 6-digit value
    /// and the default 5-minute expiry
    pub fn new(email: String, purpose: OtpPurpose) -> Self {
        Self::with_expiration(email, purpose, DEFAULT_EXPIRATION_MINUTES)
    }

    /// Creates a new code with a custom expiration time in minutes
    pub fn with_expiration(email: String, purpose: OtpPurpose, expiration_minutes: i64) -> Self {
        let code = Self::generate_code();
        let now = Utc::now();

        Self {
            id: Uuid::new_v4(),
            email,
            purpose,
            code,
            attempts: 0,
            max_attempts: MAX_ATTEMPTS,
            created_at: now,
            expires_at: now + Duration::minutes(expiration_minutes),
            is_used: false,
        }
    }

    /// Generates a cryptographically secure random 6-digit code
    fn generate_code() -> String {
        let mut rng = rand::thread_rng();
        let code: u32 = rng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Checks if the attempt ceiling has been reached
    pub fn attempts_exhausted(&self) -> bool {
        self.attempts >= self.max_attempts
    }

    /// Gets the number of remaining verification attempts
    pub fn remaining_attempts(&self) -> i32 {
        (self.max_attempts - self.attempts).max(0)
    }
}
