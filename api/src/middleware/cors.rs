//! CORS middleware configuration for the web frontend.
//!
//! Environment-aware: permissive in development so the Vite dev server can
//! reach the API from any port, restricted to `FRONTEND_URL` in production.

use std::env;

use actix_cors::Cors;
use actix_web::http::{header, Method};

/// Creates a CORS middleware instance configured for the current environment.
///
/// # Environment Variables
/// - `ENVIRONMENT`: set to "production" for restricted settings
/// - `FRONTEND_URL`: the allowed origin in production
/// - `CORS_MAX_AGE`: max age for preflight cache (default: 3600 seconds)
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    if environment == "production" {
        create_production_cors(max_age)
    } else {
        create_development_cors(max_age)
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    let frontend_url =
        env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:5173".to_string());

    tracing::info!(origin = %frontend_url, "Configuring CORS for production environment");

    Cors::default()
        .allowed_origin(&frontend_url)
        .allowed_methods(vec![Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(max_age)
        .supports_credentials()
}
