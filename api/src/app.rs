//! Application state and factory
//!
//! Holds the shared service instances and builds the actix-web application
//! with middleware and routes configured.

use std::sync::Arc;

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::routes::{auth, users};

use vi_core::repositories::{OtpCodeRepository, UserRepository};
use vi_core::services::{AccountService, OtpMailer, OtpService};

/// Application state that holds shared services
pub struct AppState<U, O, M>
where
    U: UserRepository,
    O: OtpCodeRepository,
    M: OtpMailer,
{
    pub otp_service: Arc<OtpService<O, M>>,
    pub account_service: Arc<AccountService<U>>,
}

impl<U, O, M> AppState<U, O, M>
where
    U: UserRepository,
    O: OtpCodeRepository,
    M: OtpMailer,
{
    pub fn new(
        otp_service: Arc<OtpService<O, M>>,
        account_service: Arc<AccountService<U>>,
    ) -> Self {
        Self {
            otp_service,
            account_service,
        }
    }
}

/// Create and configure the application with all dependencies
pub fn create_app<U, O, M>(
    app_state: web::Data<AppState<U, O, M>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    O: OtpCodeRepository + 'static,
    M: OtpMailer + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .route("/", web::get().to(api_info))
        .service(
            web::scope("/api")
                .service(
                    web::scope("/auth")
                        .route("/send-otp", web::post().to(auth::send_otp::send_otp::<U, O, M>))
                        .route(
                            "/verify-otp",
                            web::post().to(auth::verify_otp::verify_otp::<U, O, M>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .route(
                            "/register",
                            web::post().to(users::register::register::<U, O, M>),
                        )
                        .route("/login", web::post().to(users::login::login::<U, O, M>))
                        .route(
                            "/verify/{email}",
                            web::post().to(users::verify_email::verify_email::<U, O, M>),
                        )
                        .route(
                            "/{email}",
                            web::get().to(users::get_user::get_user::<U, O, M>),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "voiceinvoice-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Root endpoint listing the available routes
async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "VoiceInvoice API",
        "endpoints": {
            "health": "/health",
            "auth": {
                "send_otp": "POST /api/auth/send-otp",
                "verify_otp": "POST /api/auth/verify-otp",
            },
            "users": {
                "register": "POST /api/users/register",
                "login": "POST /api/users/login",
                "verify_email": "POST /api/users/verify/{email}",
                "get_user": "GET /api/users/{email}",
            },
        },
    }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "success": false,
        "message": "The requested resource was not found"
    }))
}
