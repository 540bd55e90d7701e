//! Phone number normalization against a default country.

pub(crate) mod config;
pub(crate) mod structure;
pub(crate) mod traits;

pub use config::{
    MAXIMUM_LOCAL_DIGITS_LENGTH, MINIMUM_LOCAL_DIGITS_LENGTH, NormalizerConfig,
    NormalizerConfigBuilder,
};
pub use structure::Normalizer;
pub use traits::PhoneNormalizer;
