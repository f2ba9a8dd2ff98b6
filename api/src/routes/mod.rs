//! HTTP route handlers, one per file

pub mod auth;
pub mod users;
