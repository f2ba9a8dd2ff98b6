//! Handler for POST /api/users/verify/{email}

use actix_web::{web, HttpResponse};
use tracing::info;

use crate::app::AppState;
use crate::handlers::domain_error_response;

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;
use vi_shared::types::MessageResponse;

/// Marks an account's email as verified.
///
/// Typically called by the frontend after a successful signup OTP check.
///
/// # Errors
/// - 404: no account with that email
pub async fn verify_email<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    let email = path.into_inner();

    info!(email = %email, "Processing email verification request");

    match state.account_service.verify_email(&email).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::success("User verified successfully")),
        Err(err) => domain_error_response(&err),
    }
}
