//! Shared utilities and common types for the VoiceInvoice server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Response structures for the HTTP surface
//! - Validation utilities

pub mod config;
pub mod types;
pub mod utils;
