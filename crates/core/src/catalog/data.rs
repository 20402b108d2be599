//! Built-in currency table.

use divisas_shared::Currency;

/// Currencies offered by default, in presentation order.
pub static CURRENCIES: [Currency; 4] = [
    Currency::new("USD", "Dólar de Estados Unidos"),
    Currency::new("MXN", "Peso Mexicano"),
    Currency::new("EUR", "Euro"),
    Currency::new("GBP", "Libra Esterlina"),
];

/// Returns the built-in currency table.
#[must_use]
pub fn currencies() -> &'static [Currency] {
    &CURRENCIES
}
