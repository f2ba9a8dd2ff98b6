//! Request and response data transfer objects

pub mod auth;
pub mod users;

pub use auth::{OtpResponse, SendOtpRequest, VerifyOtpRequest};
pub use users::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};
