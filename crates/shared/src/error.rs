//! Catalog error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Errors raised while building or querying a currency catalog.
///
/// The built-in table never produces one of these; they only arise when
/// currencies come from configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// A currency entry is missing its code or name, or the code is not alphabetic.
    #[error("Malformed currency entry at index {index}: {field} {reason}")]
    MalformedEntry {
        /// Position of the entry in its list.
        index: usize,
        /// Offending field (`code` or `name`).
        field: &'static str,
        /// What is wrong with the field.
        reason: &'static str,
    },

    /// No currency with the requested code.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration sources could not be read or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedEntry { .. } => "MALFORMED_ENTRY",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}
