//! Shared types, errors, and configuration for Divisas.
//!
//! This crate provides common types used across all other crates:
//! - The `Currency` record (code and display name)
//! - Catalog error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::CatalogConfig;
pub use error::{AppError, AppResult};
pub use types::Currency;
