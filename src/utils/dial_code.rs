//! Dialing-code field parsing.

use crate::types::DialCode;

#[cfg(feature = "tracing")]
use tracing::warn;

/// Split a raw dialing-code field into individual codes.
///
/// The field may list several comma-separated codes ("1-809, 1-829") and a
/// single code may carry a hyphen ("1-684"). Pieces are trimmed and
/// de-hyphenated; empty pieces are dropped. Order is preserved, so the first
/// returned code is the primary one.
///
/// # Example
///
/// ```rust
/// use phone_normalizer::utils::split_dialing_codes;
///
/// let codes = split_dialing_codes("1-809, 1-829,, 1-849");
/// let codes: Vec<&str> = codes.iter().map(|c| c.as_str()).collect();
/// assert_eq!(codes, ["1809", "1829", "1849"]);
/// ```
pub fn split_dialing_codes(raw: &str) -> Vec<DialCode> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| match DialCode::new(piece) {
            Ok(code) => Some(code),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                warn!(piece, error = %_err, "Skipping malformed dialing code");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &str) -> Vec<String> {
        split_dialing_codes(raw)
            .into_iter()
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn test_single_code() {
        assert_eq!(codes("265"), ["265"]);
    }

    #[test]
    fn test_hyphenated_code() {
        assert_eq!(codes("1-684"), ["1684"]);
    }

    #[test]
    fn test_multiple_codes_keep_order() {
        assert_eq!(codes("379, 39-06"), ["379", "3906"]);
        assert_eq!(codes(" 1-787 ,1-939 "), ["1787", "1939"]);
    }

    #[test]
    fn test_empty_pieces_dropped() {
        assert!(codes("").is_empty());
        assert!(codes(" , ,").is_empty());
        assert_eq!(codes(",44,"), ["44"]);
    }

    #[test]
    fn test_malformed_pieces_dropped() {
        assert_eq!(codes("44, n/a"), ["44"]);
    }
}
