//! Phone input cleaning.

/// Strip formatting from a raw phone number.
///
/// Only ASCII digits and '+' are kept, in their original order. The '+' is
/// neither moved nor deduplicated: `"1+2+3"` cleans to `"1+2+3"`. Use
/// [`has_misplaced_plus`] to detect such input.
///
/// # Example
///
/// ```rust
/// use phone_normalizer::utils::clean_phone;
///
/// assert_eq!(clean_phone("+265 (0) 88-639-2814"), "+2650886392814");
/// assert_eq!(clean_phone("ext. abc"), "");
/// ```
pub fn clean_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Returns true if a cleaned number holds a '+' anywhere but position 0,
/// or more than one '+'.
pub fn has_misplaced_plus(cleaned: &str) -> bool {
    cleaned.rfind('+').is_some_and(|idx| idx > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_formatting() {
        assert_eq!(clean_phone("088 639 2814"), "0886392814");
        assert_eq!(clean_phone("(088) 639-2814"), "0886392814");
        assert_eq!(clean_phone("+265.886.392.814"), "+265886392814");
        assert_eq!(clean_phone("\t+1 (202) 555-0123\n"), "+12025550123");
    }

    #[test]
    fn test_clean_drops_letters() {
        assert_eq!(clean_phone("0886abcdefg392814"), "0886392814");
        assert_eq!(clean_phone("CALL 0886392814"), "0886392814");
    }

    #[test]
    fn test_clean_drops_non_ascii_digits() {
        // Arabic-Indic digits are not ASCII digits.
        assert_eq!(clean_phone("٠١٢3"), "3");
    }

    #[test]
    fn test_clean_keeps_plus_in_place() {
        assert_eq!(clean_phone("++265"), "++265");
        assert_eq!(clean_phone("265+886"), "265+886");
    }

    #[test]
    fn test_clean_empty() {
        assert_eq!(clean_phone(""), "");
        assert_eq!(clean_phone(" - () "), "");
    }

    #[test]
    fn test_misplaced_plus() {
        assert!(!has_misplaced_plus("+265886392814"));
        assert!(!has_misplaced_plus("0886392814"));
        assert!(has_misplaced_plus("++265886392814"));
        assert!(has_misplaced_plus("265+886392814"));
    }
}
