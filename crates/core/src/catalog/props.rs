//! Property-based tests for catalog construction.

use proptest::prelude::*;

use divisas_shared::{AppError, Currency};

use super::registry::CurrencyCatalog;

/// Strategy to generate well-formed currencies (3-letter code, non-blank name).
fn valid_currency() -> impl Strategy<Value = Currency> {
    ("[A-Z]{3}", "[A-Za-z][A-Za-z ]{0,30}").prop_map(|(code, name)| Currency::owned(code, name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A catalog built from valid entries exposes them unchanged and in order.
    #[test]
    fn prop_from_entries_preserves_order(
        entries in prop::collection::vec(valid_currency(), 0..20),
    ) {
        let catalog = CurrencyCatalog::from_entries(entries.clone()).unwrap();
        prop_assert_eq!(catalog.as_slice(), entries.as_slice());
        prop_assert_eq!(catalog.codes().count(), entries.len());
    }

    /// Every entry of a valid catalog can be found by its own code.
    #[test]
    fn prop_every_code_is_found(
        entries in prop::collection::vec(valid_currency(), 1..20),
    ) {
        let catalog = CurrencyCatalog::from_entries(entries.clone()).unwrap();
        for entry in &entries {
            let found = catalog.find(&entry.code.to_ascii_lowercase());
            prop_assert!(found.is_some());
            prop_assert!(found.unwrap().has_code(&entry.code));
        }
    }

    /// A blank code anywhere in the list is reported at its index.
    #[test]
    fn prop_blank_code_is_rejected_at_its_index(
        mut entries in prop::collection::vec(valid_currency(), 1..20),
        position in any::<prop::sample::Index>(),
        blank in "[ \t]{0,3}",
    ) {
        let index = position.index(entries.len());
        entries[index].code = blank.into();

        let err = CurrencyCatalog::from_entries(entries).unwrap_err();
        let is_expected = matches!(
            err,
            AppError::MalformedEntry { index: i, field: "code", .. } if i == index
        );
        prop_assert!(is_expected);
    }
}
