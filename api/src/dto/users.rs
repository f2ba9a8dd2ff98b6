//! DTOs for the user account endpoints

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use vi_core::domain::entities::user::User;

/// Request body for POST /api/users/register
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
}

/// Request body for POST /api/users/login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response body for registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    pub user_id: Uuid,
}

/// Response body for login
///
/// The embedded user serializes without its password hash.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: User,
    pub access_token: String,
}
