//! Handler for POST /api/users/login

use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::dto::users::{LoginRequest, LoginResponse};
use crate::handlers::{domain_error_response, validation_error_response};

use vi_core::errors::{AuthError, DomainError};
use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;
use vi_shared::types::MessageResponse;

/// Authenticates an account and returns a signed access token.
///
/// # Errors
/// - 401: unknown email or wrong password
pub async fn login<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    info!(email = %request.email, "Processing login request");

    match state
        .account_service
        .login(&request.email, &request.password)
        .await
    {
        Ok((user, access_token)) => HttpResponse::Ok().json(LoginResponse {
            success: true,
            message: "Login successful".to_string(),
            user,
            access_token,
        }),
        // A failed login is an authentication failure whichever credential
        // was wrong; an absent account must not surface as 404 here.
        Err(err @ DomainError::Auth(AuthError::UserNotFound)) => {
            HttpResponse::Unauthorized().json(MessageResponse::error(err.to_string()))
        }
        Err(err) => domain_error_response(&err),
    }
}
