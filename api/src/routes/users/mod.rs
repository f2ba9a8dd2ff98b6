//! User account endpoints

pub mod get_user;
pub mod login;
pub mod register;
pub mod verify_email;
