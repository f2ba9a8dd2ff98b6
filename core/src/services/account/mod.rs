//! Account service: registration, login, and email verification state.

pub mod password;
pub mod service;

#[cfg(test)]
mod tests;

pub use service::AccountService;
