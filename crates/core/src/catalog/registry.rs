//! Read-only currency catalog.

use std::borrow::Cow;
use std::collections::HashSet;

use divisas_shared::{AppError, AppResult, CatalogConfig, Currency};
use tracing::{debug, warn};

use super::data::CURRENCIES;
use super::validation::validate_entry;

/// An ordered, read-only list of currencies.
///
/// The built-in catalog borrows the static table; a configured catalog owns
/// its validated entries. Iteration always follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyCatalog {
    entries: Cow<'static, [Currency]>,
}

impl CurrencyCatalog {
    /// Returns a catalog over the built-in currency table.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: Cow::Borrowed(CURRENCIES.as_slice()),
        }
    }

    /// Builds a catalog from caller-supplied entries.
    ///
    /// Every entry is validated. Duplicate codes are kept but logged.
    pub fn from_entries(entries: Vec<Currency>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(entries.len());

        for (index, currency) in entries.iter().enumerate() {
            validate_entry(index, currency)?;
            if !seen.insert(&*currency.code) {
                warn!(index, code = %currency.code, "Duplicate currency code in catalog");
            }
        }

        debug!(count = entries.len(), "Built currency catalog");

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Builds a catalog from configuration, falling back to the built-in table.
    pub fn from_config(config: &CatalogConfig) -> AppResult<Self> {
        match &config.currencies {
            Some(currencies) => Self::from_entries(currencies.clone()),
            None => {
                debug!("No currencies configured, using built-in table");
                Ok(Self::builtin())
            }
        }
    }

    /// Returns all currencies in order.
    #[must_use]
    pub fn as_slice(&self) -> &[Currency] {
        &self.entries
    }

    /// Iterates over the currencies in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Currency> {
        self.entries.iter()
    }

    /// Number of currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no currencies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the currency at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Currency> {
        self.entries.get(index)
    }

    /// Finds the first currency with `code`, ignoring ASCII case.
    #[must_use]
    pub fn find(&self, code: &str) -> Option<&Currency> {
        self.entries.iter().find(|c| c.has_code(code))
    }

    /// Like [`find`](Self::find), but a missing code is an error.
    pub fn require(&self, code: &str) -> AppResult<&Currency> {
        self.find(code)
            .ok_or_else(|| AppError::NotFound(format!("currency {code}")))
    }

    /// Returns true if a currency with `code` exists.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Iterates over the currency codes in order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.code.as_ref())
    }
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a CurrencyCatalog {
    type Item = &'a Currency;
    type IntoIter = std::slice::Iter<'a, Currency>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
