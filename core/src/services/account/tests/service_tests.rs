//! Tests for the account service

use std::sync::Arc;

use crate::errors::{AuthError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::account::AccountService;
use crate::services::token::TokenService;
use vi_shared::config::JwtConfig;

fn service(repo: Arc<MockUserRepository>) -> AccountService<MockUserRepository> {
    let tokens = Arc::new(TokenService::new(&JwtConfig::new("test-secret")));
    AccountService::new(repo, tokens)
}

#[tokio::test]
async fn test_register_stores_hashed_password() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());

    let user = accounts.register("a@b.com", "hunter2!").await.unwrap();

    assert_eq!(user.email, "a@b.com");
    assert!(!user.is_verified);
    assert_ne!(user.password_hash, "hunter2!");
    assert!(user.password_hash.starts_with("$2"));
}

#[tokio::test]
async fn test_register_rejects_duplicate_without_mutation() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());

    let original = accounts.register("a@b.com", "first").await.unwrap();
    let result = accounts.register("a@b.com", "second").await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));

    // Existing record untouched
    let stored = repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_eq!(stored, original);
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let accounts = service(Arc::new(MockUserRepository::new()));
    let result = accounts.register("nope", "password").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_login_returns_user_and_token() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());
    accounts.register("a@b.com", "hunter2!").await.unwrap();

    let (user, token) = accounts.login("a@b.com", "hunter2!").await.unwrap();
    assert_eq!(user.email, "a@b.com");
    assert!(!token.is_empty());

    let tokens = TokenService::new(&JwtConfig::new("test-secret"));
    let claims = tokens.verify_access_token(&token).unwrap();
    assert_eq!(claims.sub, "a@b.com");
}

#[tokio::test]
async fn test_login_unknown_email() {
    let accounts = service(Arc::new(MockUserRepository::new()));
    let result = accounts.login("ghost@b.com", "whatever").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());
    accounts.register("a@b.com", "hunter2!").await.unwrap();

    let result = accounts.login("a@b.com", "wrong").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::InvalidCredentials))
    ));
}

#[tokio::test]
async fn test_verify_email_flips_flag() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());
    accounts.register("a@b.com", "hunter2!").await.unwrap();

    let user = accounts.verify_email("a@b.com").await.unwrap();
    assert!(user.is_verified);

    let stored = repo.find_by_email("a@b.com").await.unwrap().unwrap();
    assert!(stored.is_verified);
}

#[tokio::test]
async fn test_verify_email_unknown_user() {
    let accounts = service(Arc::new(MockUserRepository::new()));
    let result = accounts.verify_email("ghost@b.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserNotFound))
    ));
}

#[tokio::test]
async fn test_get_user() {
    let repo = Arc::new(MockUserRepository::new());
    let accounts = service(repo.clone());
    accounts.register("a@b.com", "hunter2!").await.unwrap();

    assert!(accounts.get_user("a@b.com").await.unwrap().is_some());
    assert!(accounts.get_user("ghost@b.com").await.unwrap().is_none());
}
