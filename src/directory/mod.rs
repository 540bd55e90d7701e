//! Country directory: the country table indexed by alpha-2 and dialing code.

mod record;
mod table;

pub use record::{CountryEntry, CountryRecord};

use crate::errors::{NormalizeError, Result};
use isocountry::CountryCode;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Immutable, in-memory table of countries.
///
/// Two indexes are derived at construction:
///
/// - alpha-2 code → record (alpha-2 codes must be unique)
/// - dialing code → record
///
/// The dialing-code index is filled in table order, one entry per declared
/// code. When several records declare the same code (Canada and the United
/// States both declare "1") the record that comes last in the table owns
/// the code. Use [`CountryDirectory::countries_for_dialing_code`] to see
/// every claimant.
///
/// # Example
///
/// ```rust
/// use phone_normalizer::CountryDirectory;
///
/// let directory = CountryDirectory::builtin();
/// let malawi = directory.lookup_by_alpha2("MW").unwrap();
/// assert_eq!(malawi.name(), "Malawi");
///
/// let by_code = directory.lookup_by_dialing_code("265").unwrap();
/// assert_eq!(by_code.alpha2(), "MW");
/// ```
#[derive(Debug, Clone)]
pub struct CountryDirectory {
    countries: Vec<CountryRecord>,
    by_alpha2: HashMap<String, usize>,
    by_dialing_code: HashMap<String, usize>,
}

impl CountryDirectory {
    /// Build a directory from raw table entries, in table order.
    ///
    /// Fails with [`NormalizeError::DuplicateCountry`] if two entries share
    /// an alpha-2 code.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = CountryEntry>,
    {
        let countries: Vec<CountryRecord> = entries.into_iter().map(CountryRecord::from).collect();

        let mut by_alpha2 = HashMap::with_capacity(countries.len());
        let mut by_dialing_code = HashMap::with_capacity(countries.len());

        for (idx, country) in countries.iter().enumerate() {
            match by_alpha2.entry(country.alpha2().to_string()) {
                Entry::Occupied(_) => {
                    return Err(NormalizeError::DuplicateCountry {
                        alpha2: country.alpha2().to_string(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
            }

            for code in country.dialing_codes() {
                if let Some(_previous) = by_dialing_code.insert(code.to_string(), idx) {
                    #[cfg(feature = "tracing")]
                    debug!(
                        code = %code,
                        previous = countries[_previous].alpha2(),
                        current = country.alpha2(),
                        "Dialing code claimed by several countries, last one wins"
                    );
                }
            }
        }

        Ok(Self {
            countries,
            by_alpha2,
            by_dialing_code,
        })
    }

    /// Build a directory from a JSON array of [`CountryEntry`] objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CountryEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// The built-in directory, parsed from the embedded table on first use.
    pub fn builtin() -> &'static CountryDirectory {
        &table::BUILTIN
    }

    /// A shared handle to the built-in directory.
    ///
    /// Every call returns a clone of the same `Arc`; the table is parsed once
    /// per process.
    pub fn shared() -> Arc<CountryDirectory> {
        Arc::clone(&table::BUILTIN)
    }

    /// Look up a country by its alpha-2 code.
    ///
    /// The lookup is case-sensitive: "mw" does not find Malawi.
    pub fn lookup_by_alpha2(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.by_alpha2.get(alpha2).map(|&idx| &self.countries[idx])
    }

    /// Look up the country owning a dialing code.
    ///
    /// `code` must be bare digits: no '+', no separators.
    pub fn lookup_by_dialing_code(&self, code: &str) -> Option<&CountryRecord> {
        self.by_dialing_code.get(code).map(|&idx| &self.countries[idx])
    }

    /// Look up a country by its `isocountry` code.
    pub fn lookup_by_country(&self, country: CountryCode) -> Option<&CountryRecord> {
        self.lookup_by_alpha2(country.alpha2())
    }

    /// Every record declaring `code`, in table order.
    pub fn countries_for_dialing_code(&self, code: &str) -> Vec<&CountryRecord> {
        self.countries
            .iter()
            .filter(|country| country.has_dialing_code(code))
            .collect()
    }

    /// Iterate over all records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.countries.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    /// Returns true if the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
