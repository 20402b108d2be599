//! Core currency data for Divisas.
//!
//! This crate holds the built-in currency table and a read-only catalog view
//! over it. It performs no I/O; configured catalogs are built from a
//! `CatalogConfig` the caller has already loaded.
//!
//! # Modules
//!
//! - `catalog` - Built-in currency table, validation and lookup

pub mod catalog;

pub use catalog::{CURRENCIES, CurrencyCatalog, currencies};
pub use divisas_shared::{AppError, AppResult, CatalogConfig, Currency};
