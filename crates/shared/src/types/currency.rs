//! Currency record: an ISO 4217-style code paired with a display name.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A currency as presented to users.
///
/// Both fields are `Cow<'static, str>` so the built-in table can live in a
/// `static` without allocating, while currencies read from configuration own
/// their strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 currency code (e.g., "USD", "EUR").
    pub code: Cow<'static, str>,
    /// Human-readable, locale-specific display name.
    pub name: Cow<'static, str>,
}

impl Currency {
    /// Creates a currency from string literals.
    #[must_use]
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code: Cow::Borrowed(code),
            name: Cow::Borrowed(name),
        }
    }

    /// Creates a currency that owns its code and name.
    #[must_use]
    pub fn owned(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            name: Cow::Owned(name.into()),
        }
    }

    /// Returns true if `code` names this currency, ignoring ASCII case.
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.code.eq_ignore_ascii_case(code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}
