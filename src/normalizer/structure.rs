//! Main normalizer implementation.

use super::config::NormalizerConfig;
use super::traits::PhoneNormalizer;
use crate::directory::{CountryDirectory, CountryRecord};
use crate::errors::{NormalizeError, Result};
use crate::utils::{clean_phone, has_misplaced_plus};
use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Longest dialing-code prefix probed when detecting a default-country code.
const MAX_DIALING_CODE_PREFIX: usize = 4;

/// Phone number normalizer bound to a default country.
///
/// Converts local and international inputs to canonical `+<code><digits>`
/// form:
///
/// - inputs already starting with '+' are returned cleaned but otherwise as-is
/// - inputs starting with one of the default country's dialing codes get a '+'
/// - anything else is a local number: trunk zeros are stripped and the
///   default country's primary code is prepended
///
/// The normalizer never changes after construction and can be shared across
/// threads. Several normalizers with different default countries can share one
/// [`CountryDirectory`].
///
/// # Example
///
/// ```rust
/// use phone_normalizer::Normalizer;
///
/// let normalizer = Normalizer::new("MW");
///
/// assert_eq!(normalizer.normalize("0886 392 814").unwrap(), "+265886392814");
/// assert_eq!(normalizer.normalize("265886392814").unwrap(), "+265886392814");
/// assert!(normalizer.validate_phone_number("+265886392814", "MW").is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    directory: Arc<CountryDirectory>,
    default_country: Option<CountryRecord>,
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer over the built-in directory.
    ///
    /// An unknown `default_country` does not fail here; every later call to
    /// [`normalize`](Self::normalize) fails with
    /// [`NormalizeError::DefaultCountryNotFound`] instead.
    pub fn new(default_country: &str) -> Self {
        Self::with_config(NormalizerConfig::for_country(default_country))
    }

    /// Create a normalizer over the built-in directory with a custom configuration.
    pub fn with_config(config: NormalizerConfig) -> Self {
        Self::with_directory(CountryDirectory::shared(), config)
    }

    /// Create a normalizer over a custom directory.
    pub fn with_directory(directory: Arc<CountryDirectory>, config: NormalizerConfig) -> Self {
        let default_country = directory
            .lookup_by_alpha2(&config.default_country)
            .cloned();

        if default_country.is_none() {
            #[cfg(feature = "tracing")]
            warn!(
                country = %config.default_country,
                "Default country not found in directory, normalization will fail"
            );
        }

        Self {
            directory,
            default_country,
            config,
        }
    }

    /// The resolved default country, if its alpha-2 code was found.
    pub fn default_country(&self) -> Option<&CountryRecord> {
        self.default_country.as_ref()
    }

    /// The directory this normalizer resolves countries against.
    pub fn directory(&self) -> &Arc<CountryDirectory> {
        &self.directory
    }

    /// The configuration this normalizer was built with.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Normalize a phone number to canonical international form.
    ///
    /// # Errors
    ///
    /// - [`NormalizeError::DefaultCountryNotFound`] if the default country did not resolve
    /// - [`NormalizeError::InvalidPhoneNumber`] if the cleaned input is empty or too short
    ///   (or too long, when a maximum is configured)
    /// - [`NormalizeError::MisplacedPlus`] in strict mode
    /// - [`NormalizeError::NoDialingCode`] if the default country declares no code
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Normalizer::normalize",
            level = "trace",
            skip_all,
            fields(country = %self.config.default_country)
        )
    )]
    pub fn normalize(&self, phone: &str) -> Result<String> {
        let default_country =
            self.default_country
                .as_ref()
                .ok_or_else(|| NormalizeError::DefaultCountryNotFound {
                    country: self.config.default_country.clone(),
                })?;

        let cleaned = clean_phone(phone);

        if cleaned.is_empty() || cleaned.len() < self.config.min_length {
            #[cfg(feature = "tracing")]
            debug!(length = cleaned.len(), "Rejected phone number below minimum length");
            return Err(NormalizeError::InvalidPhoneNumber {
                phone: phone.to_string(),
            });
        }

        if self.config.strict_plus && has_misplaced_plus(&cleaned) {
            return Err(NormalizeError::MisplacedPlus {
                phone: phone.to_string(),
            });
        }

        if cleaned.starts_with('+') {
            return Ok(cleaned);
        }

        if self.has_default_country_code(default_country, &cleaned) {
            return Ok(format!("+{cleaned}"));
        }

        let local = cleaned.trim_start_matches('0');

        if self.config.max_length.is_some_and(|max| local.len() > max) {
            #[cfg(feature = "tracing")]
            debug!(length = local.len(), "Rejected local number above maximum length");
            return Err(NormalizeError::InvalidPhoneNumber {
                phone: phone.to_string(),
            });
        }

        let code = default_country.primary_dialing_code().ok_or_else(|| {
            NormalizeError::NoDialingCode {
                country: default_country.alpha2().to_string(),
            }
        })?;

        Ok(format!("+{code}{local}"))
    }

    /// Normalize multiple phone numbers.
    ///
    /// See [`PhoneNormalizer::normalize_bulk`] for the output layout.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Normalizer::normalize_bulk",
            skip_all,
            fields(country = %self.config.default_country, count = phones.len())
        )
    )]
    pub fn normalize_bulk<S: AsRef<str>>(
        &self,
        phones: &[S],
    ) -> (Vec<String>, Vec<Option<NormalizeError>>) {
        PhoneNormalizer::normalize_bulk(self, phones)
    }

    /// Normalize multiple phone numbers, one `Result` per input.
    pub fn normalize_iter<'a, I>(&'a self, phones: I) -> impl Iterator<Item = Result<String>> + 'a
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        I::IntoIter: 'a,
    {
        phones
            .into_iter()
            .map(move |phone| self.normalize(phone.as_ref()))
    }

    /// Check that a phone number carries a dialing code of the given country.
    ///
    /// The raw input is cleaned but not normalized: local numbers without a
    /// code fail. Both `+<code>...` and bare `<code>...` are accepted. The
    /// default country plays no part.
    ///
    /// # Errors
    ///
    /// - [`NormalizeError::UnknownCountry`] if `country_alpha2` is not in the directory
    /// - [`NormalizeError::PhoneNumberAndCountryCodeMismatch`] if no code matches
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "Normalizer::validate_phone_number",
            level = "trace",
            skip_all,
            fields(country = %country_alpha2)
        )
    )]
    pub fn validate_phone_number(&self, phone: &str, country_alpha2: &str) -> Result<()> {
        let country = self.directory.lookup_by_alpha2(country_alpha2).ok_or_else(|| {
            NormalizeError::UnknownCountry {
                country: country_alpha2.to_string(),
            }
        })?;

        let cleaned = clean_phone(phone);

        if country
            .dialing_codes()
            .iter()
            .any(|code| code.prefixes(&cleaned))
        {
            return Ok(());
        }

        Err(NormalizeError::PhoneNumberAndCountryCodeMismatch {
            phone: phone.to_string(),
            country: country.name().to_string(),
        })
    }

    /// Look up a country by alpha-2 code.
    pub fn get_country_by_a2(&self, alpha2: &str) -> Option<&CountryRecord> {
        self.directory.lookup_by_alpha2(alpha2)
    }

    /// Look up the country owning a dialing code (bare digits).
    pub fn get_country_by_code(&self, code: &str) -> Option<&CountryRecord> {
        self.directory.lookup_by_dialing_code(code)
    }

    /// Returns true if `cleaned` starts with a dialing code owned by the
    /// default country.
    ///
    /// Leading zeros are skipped, then prefixes of 1 to 4 digits are probed
    /// shortest first. The first prefix found in the directory decides: a
    /// match on another country's code is a miss, longer prefixes are not
    /// tried.
    fn has_default_country_code(&self, default_country: &CountryRecord, cleaned: &str) -> bool {
        let stripped = cleaned.trim_start_matches('0');

        (1..=MAX_DIALING_CODE_PREFIX.min(stripped.len()))
            .filter_map(|len| stripped.get(..len))
            .find_map(|prefix| self.directory.lookup_by_dialing_code(prefix))
            .is_some_and(|country| country.alpha2() == default_country.alpha2())
    }
}

impl PhoneNormalizer for Normalizer {
    fn normalize(&self, phone: &str) -> Result<String> {
        Normalizer::normalize(self, phone)
    }

    fn validate_phone_number(&self, phone: &str, country_alpha2: &str) -> Result<()> {
        Normalizer::validate_phone_number(self, phone, country_alpha2)
    }
}
