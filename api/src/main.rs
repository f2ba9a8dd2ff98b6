//! VoiceInvoice API server entry point.
//!
//! Wires configuration, the MySQL pool, repositories, the SMTP mailer, and
//! the domain services together, then serves the actix-web application.

use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vi_api::app::{create_app, AppState};
use vi_core::services::{AccountService, OtpService, TokenService};
use vi_infra::database::{DatabasePool, MySqlOtpCodeRepository, MySqlUserRepository};
use vi_infra::email::SmtpMailer;
use vi_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("Starting VoiceInvoice API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.get_pool().clone()));
    let otp_repository = Arc::new(MySqlOtpCodeRepository::new(pool.get_pool().clone()));
    let mailer = Arc::new(SmtpMailer::new(
        config.email.clone(),
        config.otp.expiry_minutes,
    ));

    let otp_service = Arc::new(OtpService::new(
        otp_repository,
        mailer,
        config.otp.clone().into(),
    ));
    let token_service = Arc::new(TokenService::new(&config.jwt));
    let account_service = Arc::new(AccountService::new(user_repository, token_service));

    let app_state = web::Data::new(AppState::new(otp_service, account_service));

    info!(address = %bind_address, "Server listening");

    let server = HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run();

    let result = server.await;

    pool.close().await;
    result
}
