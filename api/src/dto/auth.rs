//! DTOs for the OTP endpoints

use serde::{Deserialize, Serialize};
use validator::Validate;

use vi_core::domain::entities::otp_code::OtpPurpose;

/// Request body for POST /api/auth/send-otp
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Recipient email address
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// What the code is for: "login" or "signup"
    pub purpose: OtpPurpose,
}

/// Request body for POST /api/auth/verify-otp
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    /// Email the code was issued to
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// The 6-digit code from the email
    #[validate(length(equal = 6, message = "OTP code must be 6 digits"))]
    pub otp_code: String,
    /// Purpose the code was issued for
    pub purpose: OtpPurpose,
}

/// Response body for both OTP endpoints
///
/// The code itself is never included; it only travels via email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
}

impl OtpResponse {
    pub fn new(message: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_otp_request_deserializes_purpose() {
        let req: SendOtpRequest =
            serde_json::from_str(r#"{"email": "a@b.com", "purpose": "signup"}"#).unwrap();
        assert_eq!(req.purpose, OtpPurpose::Signup);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_send_otp_request_rejects_unknown_purpose() {
        let result =
            serde_json::from_str::<SendOtpRequest>(r#"{"email": "a@b.com", "purpose": "reset"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_verify_otp_request_code_length() {
        let req = VerifyOtpRequest {
            email: "a@b.com".to_string(),
            otp_code: "12345".to_string(),
            purpose: OtpPurpose::Login,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_otp_response_never_carries_code() {
        let resp = OtpResponse::new("OTP sent successfully", "a@b.com");
        let json = serde_json::to_value(&resp).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("success"));
        assert!(obj.contains_key("message"));
        assert!(obj.contains_key("email"));
        assert!(!obj.contains_key("otp_code"));
    }
}
