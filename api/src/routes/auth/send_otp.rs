//! Handler for POST /api/auth/send-otp

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{OtpResponse, SendOtpRequest};
use crate::handlers::{domain_error_response, validation_error_response};

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;

/// Issues a fresh verification code and emails it to the requester.
///
/// The code never appears in the response body; only a confirmation that
/// the email was dispatched.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "user@example.com",
///     "purpose": "login"
/// }
/// ```
///
/// # Response (200 OK)
///
/// ```json
/// {
///     "success": true,
///     "message": "OTP sent successfully to your email",
///     "email": "user@example.com"
/// }
/// ```
pub async fn send_otp<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    info!(email = %request.email, purpose = %request.purpose, "Processing send-otp request");

    match state.otp_service.issue(&request.email, request.purpose).await {
        Ok(()) => HttpResponse::Ok().json(OtpResponse::new(
            "OTP sent successfully to your email",
            request.email.clone(),
        )),
        Err(err) => domain_error_response(&err),
    }
}
