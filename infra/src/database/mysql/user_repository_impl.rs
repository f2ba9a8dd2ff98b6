//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vi_core::domain::entities::user::User;
use vi_core::errors::{AuthError, DomainError};
use vi_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Database {
            message: format!("Failed to get id: {}", e),
        })?;

        Ok(User {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Database {
                message: format!("Invalid UUID: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Database {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get password_hash: {}", e),
                })?,
            is_verified: row
                .try_get("is_verified")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get is_verified: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, password_hash, is_verified, created_at, updated_at
            FROM users
            WHERE email = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        if self.exists_by_email(&user.email).await? {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let query = r#"
            INSERT INTO users (
                id, email, password_hash, is_verified, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create user: {}", e),
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                password_hash = ?,
                is_verified = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let now = Utc::now();
        let result = sqlx::query(query)
            .bind(&user.password_hash)
            .bind(user.is_verified)
            .bind(now)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update user: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(AuthError::UserNotFound.into());
        }

        let mut updated = user;
        updated.updated_at = now;
        Ok(updated)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let query = r#"
            SELECT EXISTS(
                SELECT 1 FROM users WHERE email = ?
            ) as user_exists
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to check user existence: {}", e),
            })?;

        let exists: i8 = row.try_get("user_exists").map_err(|e| DomainError::Database {
            message: format!("Failed to get existence result: {}", e),
        })?;

        Ok(exists == 1)
    }
}
