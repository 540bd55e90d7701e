//! Normalizer configuration types.

use serde::{Deserialize, Serialize};

/// Minimum length of a cleaned phone number, '+' included.
pub const MINIMUM_LOCAL_DIGITS_LENGTH: usize = 7;

/// Conventional upper bound for local numbers.
///
/// Not enforced unless passed to [`NormalizerConfigBuilder::max_length`].
pub const MAXIMUM_LOCAL_DIGITS_LENGTH: usize = 12;

/// Configuration for the [`Normalizer`](crate::Normalizer).
///
/// Controls which country local numbers belong to and how strict input
/// checks are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Alpha-2 code of the country assumed for local numbers.
    pub default_country: String,
    /// Cleaned inputs shorter than this are rejected.
    pub min_length: usize,
    /// Local numbers longer than this (after trunk zeros are stripped) are rejected.
    pub max_length: Option<usize>,
    /// Reject inputs holding a '+' anywhere but the first position.
    pub strict_plus: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            default_country: "US".to_string(),
            min_length: MINIMUM_LOCAL_DIGITS_LENGTH,
            max_length: None,
            strict_plus: false,
        }
    }
}

impl NormalizerConfig {
    /// Create a new builder for NormalizerConfig.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phone_normalizer::{NormalizerConfig, MAXIMUM_LOCAL_DIGITS_LENGTH};
    ///
    /// let config = NormalizerConfig::builder()
    ///     .default_country("MW")
    ///     .max_length(MAXIMUM_LOCAL_DIGITS_LENGTH)
    ///     .strict_plus(true)
    ///     .build();
    ///
    /// assert_eq!(config.default_country, "MW");
    /// assert_eq!(config.max_length, Some(12));
    /// assert!(config.strict_plus);
    /// ```
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }

    /// Create a default config for the given country.
    pub fn for_country(alpha2: impl Into<String>) -> Self {
        Self {
            default_country: alpha2.into(),
            ..Self::default()
        }
    }

    /// Create a new config with a custom default country.
    pub fn with_default_country(mut self, alpha2: impl Into<String>) -> Self {
        self.default_country = alpha2.into();
        self
    }

    /// Create a new config with a custom maximum local number length.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// Builder for NormalizerConfig.
#[derive(Debug, Clone)]
pub struct NormalizerConfigBuilder {
    pub(crate) default_country: String,
    pub(crate) min_length: usize,
    pub(crate) max_length: Option<usize>,
    pub(crate) strict_plus: bool,
}

impl Default for NormalizerConfigBuilder {
    fn default() -> Self {
        let config = NormalizerConfig::default();
        Self {
            default_country: config.default_country,
            min_length: config.min_length,
            max_length: config.max_length,
            strict_plus: config.strict_plus,
        }
    }
}

impl NormalizerConfigBuilder {
    /// Create a new builder with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default country by alpha-2 code.
    ///
    /// Default: "US"
    pub fn default_country(mut self, alpha2: impl Into<String>) -> Self {
        self.default_country = alpha2.into();
        self
    }

    /// Set the minimum cleaned length.
    ///
    /// Default: 7
    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    /// Set the maximum local number length.
    ///
    /// Default: unbounded
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Reject misplaced or repeated '+' characters.
    ///
    /// Default: false
    pub fn strict_plus(mut self, strict: bool) -> Self {
        self.strict_plus = strict;
        self
    }

    /// Build the NormalizerConfig.
    pub fn build(self) -> NormalizerConfig {
        NormalizerConfig {
            default_country: self.default_country,
            min_length: self.min_length,
            max_length: self.max_length,
            strict_plus: self.strict_plus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = NormalizerConfig::default();
        assert_eq!(config.default_country, "US");
        assert_eq!(config.min_length, 7);
        assert_eq!(config.max_length, None);
        assert!(!config.strict_plus);
    }

    #[test]
    fn test_config_builder() {
        let config = NormalizerConfig::builder()
            .default_country("MW")
            .min_length(9)
            .max_length(10)
            .strict_plus(true)
            .build();

        assert_eq!(config.default_country, "MW");
        assert_eq!(config.min_length, 9);
        assert_eq!(config.max_length, Some(10));
        assert!(config.strict_plus);
    }

    #[test]
    fn test_config_builder_default() {
        let config = NormalizerConfigBuilder::new().build();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_config_with_methods() {
        let config = NormalizerConfig::default()
            .with_default_country("ZM")
            .with_max_length(MAXIMUM_LOCAL_DIGITS_LENGTH);

        assert_eq!(config.default_country, "ZM");
        assert_eq!(config.max_length, Some(12));
        assert_eq!(NormalizerConfig::for_country("ZM").default_country, "ZM");
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: NormalizerConfig =
            serde_json::from_str(r#"{"default_country":"MW","strict_plus":true}"#).unwrap();
        assert_eq!(config.default_country, "MW");
        assert_eq!(config.min_length, MINIMUM_LOCAL_DIGITS_LENGTH);
        assert!(config.strict_plus);
    }
}
