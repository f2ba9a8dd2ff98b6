//! Translates `DomainError` values into HTTP responses.
//!
//! Every failure maps to a flat `{success: false, message}` body; there is
//! no structured error-code envelope.

use actix_web::HttpResponse;
use tracing::error;
use validator::ValidationErrors;

use vi_core::errors::{AuthError, DomainError};
use vi_shared::types::MessageResponse;

/// Convert a domain error into the appropriate HTTP response
pub fn domain_error_response(err: &DomainError) -> HttpResponse {
    let body = MessageResponse::error(err.to_string());

    match err {
        DomainError::Auth(auth) => match auth {
            AuthError::InvalidEmail
            | AuthError::OtpNotFound
            | AuthError::OtpExpired
            | AuthError::TooManyAttempts
            | AuthError::InvalidOtpCode => HttpResponse::BadRequest().json(body),
            AuthError::InvalidCredentials | AuthError::InvalidToken => {
                HttpResponse::Unauthorized().json(body)
            }
            AuthError::UserNotFound => HttpResponse::NotFound().json(body),
            AuthError::UserAlreadyExists => HttpResponse::Conflict().json(body),
            AuthError::TokenGenerationFailed => {
                error!(error = %auth, "Token generation failed");
                HttpResponse::InternalServerError().json(body)
            }
        },
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(body),
        DomainError::Database { .. } | DomainError::Email { .. } | DomainError::Internal { .. } => {
            error!(error = %err, "Request failed with internal error");
            HttpResponse::InternalServerError().json(MessageResponse::error(
                "An internal error occurred".to_string(),
            ))
        }
    }
}

/// Convert request DTO validation failures into a 400 response
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request data".to_string());

    HttpResponse::BadRequest().json(MessageResponse::error(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_otp_errors_map_to_400() {
        for err in [
            AuthError::OtpNotFound,
            AuthError::OtpExpired,
            AuthError::TooManyAttempts,
            AuthError::InvalidOtpCode,
        ] {
            let resp = domain_error_response(&DomainError::Auth(err));
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_bad_login_maps_to_401() {
        let resp = domain_error_response(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_missing_user_maps_to_404() {
        let resp = domain_error_response(&DomainError::Auth(AuthError::UserNotFound));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_registration_maps_to_409() {
        let resp = domain_error_response(&DomainError::Auth(AuthError::UserAlreadyExists));
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_token_generation_failure_maps_to_500() {
        let resp = domain_error_response(&DomainError::Auth(AuthError::TokenGenerationFailed));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_database_error_maps_to_500() {
        let resp = domain_error_response(&DomainError::Database {
            message: "connection refused".to_string(),
        });
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
