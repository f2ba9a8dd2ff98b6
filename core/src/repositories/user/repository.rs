//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database operations while maintaining
/// the abstraction boundary between the domain and infrastructure layers.
/// Accounts are created on registration and mutated on verification; this
/// system never deletes them.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate email)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError)` - Update failed (e.g. user not found)
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
