//! Database module - MySQL implementations using SQLx
//!
//! Provides connection pool management and the repository implementations
//! backing the core crate's persistence traits.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlOtpCodeRepository, MySqlUserRepository};
