//! HTTP API layer for the VoiceInvoice backend.
//!
//! Exposes the OTP verification and user account endpoints over actix-web,
//! translating domain errors into flat `{success, message}` JSON responses.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::AppState;
