//! JWT access token service.

pub mod service;

pub use service::{Claims, TokenService};
