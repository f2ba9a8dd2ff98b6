//! Handler for POST /api/users/register

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::dto::users::{RegisterRequest, RegisterResponse};
use crate::handlers::{domain_error_response, validation_error_response};

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;

/// Creates a new unverified account.
///
/// # Errors
/// - 400: malformed email or password outside 8-128 characters
/// - 409: the email is already registered
pub async fn register<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    info!(email = %request.email, "Processing registration request");

    match state
        .account_service
        .register(&request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(RegisterResponse {
            success: true,
            message: "User registered successfully".to_string(),
            user_id: user.id,
        }),
        Err(err) => domain_error_response(&err),
    }
}
