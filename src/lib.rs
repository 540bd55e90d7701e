//! # Phone Normalizer
//!
//! Normalizes phone numbers written in local or international formats to a
//! canonical international form: a leading `+`, the country dialing code and
//! the subscriber digits.
//!
//! A default country resolves local numbers. Country data comes from a
//! built-in table of ~250 countries and territories, indexed by ISO alpha-2
//! code and by dialing code. Some countries share a code (the NANP "1",
//! Russia and Kazakhstan on "7"); others use several codes.
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_normalizer::{Normalizer, NormalizeError};
//!
//! let normalizer = Normalizer::new("MW");
//!
//! // Local numbers get the default country's code.
//! assert_eq!(normalizer.normalize("0886392814")?, "+265886392814");
//!
//! // Numbers that already carry the code only get a '+'.
//! assert_eq!(normalizer.normalize("265 886 392 814")?, "+265886392814");
//!
//! // International numbers pass through.
//! assert_eq!(normalizer.normalize("+1 (202) 555-0123")?, "+12025550123");
//!
//! // Cross-check a number against a country.
//! assert!(matches!(
//!     normalizer.validate_phone_number("+12025550123", "MW"),
//!     Err(NormalizeError::PhoneNumberAndCountryCodeMismatch { .. })
//! ));
//! # Ok::<(), NormalizeError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Normalizer ──(Arc)──▶ CountryDirectory ──▶ [CountryRecord]
//!     │                     ├─ alpha-2 index
//!     │                     └─ dialing-code index (last claimant wins)
//!     ▼
//! utils::clean_phone / utils::split_dialing_codes
//! ```
//!
//! ## Features
//!
//! - `tracing` - tracing instrumentation (enabled by default)

pub mod directory;
pub mod errors;
pub mod normalizer;
pub mod types;
pub mod utils;

// Re-export commonly used types at the crate root
pub use directory::{CountryDirectory, CountryEntry, CountryRecord};
pub use errors::{NormalizeError, Result};
pub use normalizer::{
    MAXIMUM_LOCAL_DIGITS_LENGTH, MINIMUM_LOCAL_DIGITS_LENGTH, Normalizer, NormalizerConfig,
    NormalizerConfigBuilder, PhoneNormalizer,
};
pub use types::{DialCode, DialCodeError};
