//! Currency entry validation.

use divisas_shared::{AppError, AppResult, Currency};

/// Checks that a currency entry is well formed.
///
/// The code must be non-blank and made only of uppercase ASCII letters; the
/// name must be non-blank. `index` is the entry's position and is reported in the error.
pub fn validate_entry(index: usize, currency: &Currency) -> AppResult<()> {
    if currency.code.trim().is_empty() {
        return Err(malformed(index, "code", "is empty"));
    }
    if !currency.code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(malformed(index, "code", "must contain only uppercase ASCII letters"));
    }
    if currency.name.trim().is_empty() {
        return Err(malformed(index, "name", "is empty"));
    }
    Ok(())
}

const fn malformed(index: usize, field: &'static str, reason: &'static str) -> AppError {
    AppError::MalformedEntry {
        index,
        field,
        reason,
    }
}
