//! Error types for normalization and country lookups.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = NormalizeError> = std::result::Result<T, E>;

/// Errors returned by the normalizer and the country directory.
///
/// Every variant is a deterministic validation outcome: retrying the same
/// call with the same input yields the same error.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Cleaned input is empty, too short, or (when a maximum is configured) too long.
    #[error("invalid phone number: '{phone}'")]
    InvalidPhoneNumber {
        /// The raw input as passed by the caller.
        phone: String,
    },

    /// The normalizer's default country did not resolve at construction time.
    #[error("no default country set: '{country}' is not in the directory")]
    DefaultCountryNotFound {
        /// The alpha-2 code the normalizer was built with.
        country: String,
    },

    /// The alpha-2 code passed to a lookup or validation call is unknown.
    #[error("invalid or unknown country: '{country}'")]
    UnknownCountry {
        /// The alpha-2 code that failed to resolve.
        country: String,
    },

    /// The phone number does not start with any dialing code of the country.
    #[error("phone number '{phone}' does not match country code of {country}")]
    PhoneNumberAndCountryCodeMismatch {
        /// The raw input as passed by the caller.
        phone: String,
        /// Display name of the expected country.
        country: String,
    },

    /// The default country has no dialing code to expand local numbers with.
    #[error("country '{country}' has no dialing code")]
    NoDialingCode {
        /// Alpha-2 code of the country.
        country: String,
    },

    /// A `+` appears anywhere but the first position, or more than once.
    ///
    /// Only produced when [`NormalizerConfig::strict_plus`](crate::NormalizerConfig) is set.
    #[error("misplaced '+' in phone number '{phone}'")]
    MisplacedPlus {
        /// The raw input as passed by the caller.
        phone: String,
    },

    /// Two records in a country table share the same alpha-2 code.
    #[error("duplicate alpha-2 code '{alpha2}' in country table")]
    DuplicateCountry {
        /// The repeated alpha-2 code.
        alpha2: String,
    },

    /// The country table could not be decoded.
    #[error("failed to decode country table: {source}")]
    Table {
        #[from]
        source: serde_json::Error,
    },
}

impl NormalizeError {
    /// Returns true if the error is caused by the phone number itself
    /// rather than by the country selection or the country table.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            NormalizeError::InvalidPhoneNumber { .. }
                | NormalizeError::PhoneNumberAndCountryCodeMismatch { .. }
                | NormalizeError::MisplacedPlus { .. }
        )
    }
}
