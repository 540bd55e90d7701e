//! Core value types.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// DialCode
// =============================================================================

/// Error when parsing a dial code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialCodeError {
    /// Dial code contains non-digit characters.
    #[error("dial code must contain only digits")]
    NonDigit,
    /// Dial code is empty.
    #[error("dial code cannot be empty")]
    Empty,
}

/// Country dialing code (e.g., "265" for Malawi, "1684" for American Samoa).
///
/// Dial codes are stored as bare digits, without the leading '+' sign and
/// without the hyphen some tables use to mark NANP area codes ("1-684").
///
/// # Example
///
/// ```rust
/// use phone_normalizer::DialCode;
///
/// let dc = DialCode::new("+265").unwrap();
/// assert_eq!(dc.to_string(), "265");
///
/// let dc = DialCode::new("1-684").unwrap();
/// assert_eq!(dc.as_str(), "1684");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DialCode(String);

impl DialCode {
    /// Create a new DialCode from a string.
    ///
    /// Surrounding whitespace, a leading '+' and internal hyphens are stripped.
    pub fn new(s: impl AsRef<str>) -> Result<Self, DialCodeError> {
        let n = s.as_ref().trim().trim_start_matches('+').replace('-', "");
        if n.is_empty() {
            return Err(DialCodeError::Empty);
        }
        if !n.chars().all(|c| c.is_ascii_digit()) {
            return Err(DialCodeError::NonDigit);
        }
        Ok(Self(n))
    }

    /// Get the dial code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits in the code.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; an empty code cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `phone` starts with this code, with or without a leading '+'.
    pub fn prefixes(&self, phone: &str) -> bool {
        phone
            .strip_prefix('+')
            .is_some_and(|rest| rest.starts_with(self.as_str()))
            || phone.starts_with(self.as_str())
    }
}

impl FromStr for DialCode {
    type Err = DialCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for DialCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for DialCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(d)?;
        DialCode::new(raw).map_err(de::Error::custom)
    }
}

impl Serialize for DialCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.0)
    }
}
