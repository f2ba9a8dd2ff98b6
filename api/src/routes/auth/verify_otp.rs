//! Handler for POST /api/auth/verify-otp

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{OtpResponse, VerifyOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;

/// Checks a submitted code against the pending one for (email, purpose).
///
/// A successful verification consumes the code; submitting it again
/// reports that no valid code exists.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "otp_code": "123456",
///     "purpose": "login"
/// }
/// ```
///
/// # Errors
/// - 400: no valid code, expired code, wrong code, or too many attempts
pub async fn verify_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    info!(email = %request.email, purpose = %request.purpose, "Processing verify-otp request");

    match state
        .otp_service
        .verify(&request.email, &request.otp_code, request.purpose)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(OtpResponse::new(
            "OTP verified successfully",
            request.email.clone(),
        )),
        Err(err) => domain_error_response(&err),
    }
}
