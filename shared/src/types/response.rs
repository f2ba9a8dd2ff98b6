//! API response types and wrappers
//!
//! Every endpoint answers with a flat `{success, message, ...}` body; error
//! bodies carry only the two base fields.

use serde::{Deserialize, Serialize};

/// Minimal response body carrying an outcome flag and a human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome message
    pub message: String,
}

impl MessageResponse {
    /// Create a successful response
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_response() {
        let response = MessageResponse::success("done");
        assert!(response.success);
        assert_eq!(response.message, "done");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = MessageResponse::error("something failed");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"something failed"}"#);
    }
}
