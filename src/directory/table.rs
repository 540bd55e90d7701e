//! Built-in country table embedded at compile time.

use super::CountryDirectory;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Country table JSON embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../../assets/countries.json");

/// Directory built from the embedded table on first use.
pub(super) static BUILTIN: Lazy<Arc<CountryDirectory>> = Lazy::new(|| {
    let directory =
        CountryDirectory::from_json(COUNTRIES_JSON).expect("countries.json is invalid");

    #[cfg(feature = "tracing")]
    tracing::debug!(countries = directory.len(), "Loaded built-in country directory");

    Arc::new(directory)
});
