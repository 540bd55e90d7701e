//! Normalizer trait definition.

use crate::errors::{NormalizeError, Result};

/// Trait for phone number normalizers.
///
/// Lets callers depend on the normalization interface rather than on
/// [`Normalizer`](crate::Normalizer), e.g. to swap in a fixed-output fake.
pub trait PhoneNormalizer: Send + Sync {
    /// Normalize a single phone number to canonical `+<code><digits>` form.
    fn normalize(&self, phone: &str) -> Result<String>;

    /// Check that a phone number starts with a dialing code of the given country.
    fn validate_phone_number(&self, phone: &str, country_alpha2: &str) -> Result<()>;

    /// Normalize every input independently.
    ///
    /// Both returned vectors have the same length as `phones`; index `i` of
    /// each corresponds to `phones[i]`. A failed entry holds an empty string
    /// and `Some(error)`.
    fn normalize_bulk<S: AsRef<str>>(
        &self,
        phones: &[S],
    ) -> (Vec<String>, Vec<Option<NormalizeError>>)
    where
        Self: Sized,
    {
        phones
            .iter()
            .map(|phone| match self.normalize(phone.as_ref()) {
                Ok(normalized) => (normalized, None),
                Err(err) => (String::new(), Some(err)),
            })
            .unzip()
    }
}
