//! Handler for GET /api/users/{email}

use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::handlers::domain_error_response;

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::OtpMailer;
use vi_shared::types::MessageResponse;

/// Fetches an account by email.
///
/// The user payload serializes without its password hash.
pub async fn get_user<U, O, M>(
    state: web::Data<AppState<U, O, M>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    let email = path.into_inner();

    match state.account_service.get_user(&email).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().json(MessageResponse::error("User not found")),
        Err(err) => domain_error_response(&err),
    }
}
