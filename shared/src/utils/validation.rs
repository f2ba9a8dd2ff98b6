//! Common validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// RFC 5322 is overkill here; this matches the addresses the frontend can
/// actually submit (local@domain.tld, no quoting, no comments).
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Check whether a string is a plausible email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= 254 && EMAIL_REGEX.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("user.name+tag@example.co.uk"));
        assert!(is_valid_email("UPPER@EXAMPLE.ORG"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@missing-local.com"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user @example.com"));
    }

    #[test]
    fn test_rejects_overlong_addresses() {
        let long_local = "a".repeat(250);
        assert!(!is_valid_email(&format!("{}@b.com", long_local)));
    }
}
