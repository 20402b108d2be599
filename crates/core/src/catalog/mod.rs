//! Currency catalog.
//!
//! This module implements:
//! - The built-in, ordered currency table
//! - Validation of configured currency entries
//! - A read-only catalog view with code lookup

pub mod data;
pub mod registry;
pub mod validation;

#[cfg(test)]
mod props;

pub use data::{CURRENCIES, currencies};
pub use registry::CurrencyCatalog;
pub use validation::validate_entry;
