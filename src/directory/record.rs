//! Country records.

use crate::types::DialCode;
use crate::utils::split_dialing_codes;
use isocountry::CountryCode;
use serde::{Deserialize, Serialize};

/// Raw country table entry, as stored in the data source.
///
/// `dialing_code` is the unparsed field: it may hold several comma-separated
/// codes and hyphenated NANP codes, e.g. `"1-809, 1-829, 1-849"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Display name.
    pub name: String,
    /// ISO 3166-1 alpha-2 code.
    pub alpha2: String,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: String,
    /// ISO 3166-1 numeric code.
    pub numeric: u16,
    /// Raw dialing-code field.
    pub dialing_code: String,
}

/// Identity and dialing metadata for one country or territory.
///
/// Records are built once by a [`CountryDirectory`](super::CountryDirectory)
/// and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    name: String,
    alpha2: String,
    alpha3: String,
    numeric_code: u16,
    dialing_codes: Vec<DialCode>,
}

impl CountryRecord {
    /// Display name (e.g. "Malawi").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO alpha-2 code (e.g. "MW").
    pub fn alpha2(&self) -> &str {
        &self.alpha2
    }

    /// ISO alpha-3 code (e.g. "MWI").
    pub fn alpha3(&self) -> &str {
        &self.alpha3
    }

    /// ISO numeric code (e.g. 454).
    pub fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// All dialing codes in table order. The first is the primary one.
    pub fn dialing_codes(&self) -> &[DialCode] {
        &self.dialing_codes
    }

    /// The code used when a local number is expanded to international form.
    pub fn primary_dialing_code(&self) -> Option<&DialCode> {
        self.dialing_codes.first()
    }

    /// Returns true if `code` is one of this record's dialing codes.
    pub fn has_dialing_code(&self, code: &str) -> bool {
        self.dialing_codes.iter().any(|c| c.as_str() == code)
    }

    /// Matching `isocountry` code, if the alpha-2 code is an assigned ISO code.
    pub fn iso_code(&self) -> Option<CountryCode> {
        CountryCode::for_alpha2(&self.alpha2).ok()
    }
}

impl From<CountryEntry> for CountryRecord {
    fn from(entry: CountryEntry) -> Self {
        let dialing_codes = split_dialing_codes(&entry.dialing_code);
        Self {
            name: entry.name,
            alpha2: entry.alpha2,
            alpha3: entry.alpha3,
            numeric_code: entry.numeric,
            dialing_codes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(dialing_code: &str) -> CountryEntry {
        CountryEntry {
            name: "Dominican Republic".to_string(),
            alpha2: "DO".to_string(),
            alpha3: "DOM".to_string(),
            numeric: 214,
            dialing_code: dialing_code.to_string(),
        }
    }

    #[test]
    fn test_record_from_entry() {
        let record = CountryRecord::from(entry("1-809, 1-829, 1-849"));
        assert_eq!(record.name(), "Dominican Republic");
        assert_eq!(record.alpha2(), "DO");
        assert_eq!(record.alpha3(), "DOM");
        assert_eq!(record.numeric_code(), 214);
        assert_eq!(record.dialing_codes().len(), 3);
        assert_eq!(record.primary_dialing_code().unwrap().as_str(), "1809");
        assert!(record.has_dialing_code("1829"));
        assert!(!record.has_dialing_code("1-829"));
    }

    #[test]
    fn test_record_without_codes() {
        let record = CountryRecord::from(entry(" , "));
        assert!(record.dialing_codes().is_empty());
        assert!(record.primary_dialing_code().is_none());
    }

    #[test]
    fn test_iso_code() {
        let record = CountryRecord::from(entry("1-809"));
        assert_eq!(record.iso_code(), Some(CountryCode::DOM));

        let mut unknown = entry("383");
        unknown.alpha2 = "XK".to_string();
        assert_eq!(CountryRecord::from(unknown).iso_code(), None);
    }

    #[test]
    fn test_entry_deserialize() {
        let json = r#"{"name":"Malawi","alpha2":"MW","alpha3":"MWI","numeric":454,"dialing_code":"265"}"#;
        let entry: CountryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.alpha2, "MW");
        assert_eq!(entry.numeric, 454);
    }
}
