//! Main account service implementation

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;
use vi_shared::utils::is_valid_email;

use super::password::{hash_password, verify_password};

/// Account service for registration, login, and verification state
///
/// There is no rate limiting and no lockout; the OTP flow is the only
/// brute-force barrier this system carries.
pub struct AccountService<U: UserRepository> {
    /// User repository for account persistence
    user_repository: Arc<U>,
    /// Token service issuing access tokens on login
    token_service: Arc<TokenService>,
}

impl<U: UserRepository> AccountService<U> {
    /// Create a new account service
    pub fn new(user_repository: Arc<U>, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repository,
            token_service,
        }
    }

    /// Register a new account
    ///
    /// Fails with `UserAlreadyExists` when the email is taken; the existing
    /// row is left untouched. The password is stored as a salted bcrypt hash.
    pub async fn register(&self, email: &str, password: &str) -> DomainResult<User> {
        if !is_valid_email(email) {
            return Err(AuthError::InvalidEmail.into());
        }

        if self.user_repository.exists_by_email(email).await? {
            warn!(email, "Registration attempt for existing account");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = hash_password(password)?;
        let user = self
            .user_repository
            .create(User::new(email.to_string(), password_hash))
            .await?;

        info!(email, user_id = %user.id, "User registered");
        Ok(user)
    }

    /// Authenticate an account by email and password
    ///
    /// On success returns the user together with a signed access token.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<(User, String)> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            warn!(email, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let access_token = self.token_service.issue_access_token(&user.email)?;

        info!(email, user_id = %user.id, "User authenticated");
        Ok((user, access_token))
    }

    /// Mark an account's email as verified
    pub async fn verify_email(&self, email: &str) -> DomainResult<User> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        user.verify();
        let user = self.user_repository.update(user).await?;

        info!(email, "User email verified");
        Ok(user)
    }

    /// Fetch an account by email
    pub async fn get_user(&self, email: &str) -> DomainResult<Option<User>> {
        self.user_repository.find_by_email(email).await
    }
}
