//! ZIP code canonicalization.

use super::present;

const ZIP_LENGTH: usize = 5;

/// Canonicalize a ZIP code to exactly five ASCII digits.
///
/// Non-digits are dropped, ZIP+4 and longer runs are truncated to the first
/// five digits, and shorter runs are left-padded with zeros. Values without
/// any digit normalize to `None`.
///
/// ```
/// use addr_normalization::normalize_zip;
///
/// assert_eq!(normalize_zip(Some("2108")), Some("02108".to_string()));
/// assert_eq!(normalize_zip(Some("90210-1234")), Some("90210".to_string()));
/// assert_eq!(normalize_zip(Some("n/a")), None);
/// ```
pub fn normalize_zip(raw: Option<&str>) -> Option<String> {
    let value = present(raw)?;
    let digits: String = value
        .chars()
        .filter(char::is_ascii_digit)
        .take(ZIP_LENGTH)
        .collect();
    if digits.is_empty() {
        return None;
    }
    Some(format!("{digits:0>width$}", width = ZIP_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert_eq, proptest};

    #[test]
    fn pads_short_codes() {
        assert_eq!(normalize_zip(Some("501")), Some("00501".to_string()));
        assert_eq!(normalize_zip(Some("0")), Some("00000".to_string()));
    }

    #[test]
    fn strips_punctuation_and_truncates() {
        assert_eq!(normalize_zip(Some(" 02108 ")), Some("02108".to_string()));
        assert_eq!(normalize_zip(Some("021081234")), Some("02108".to_string()));
        assert_eq!(normalize_zip(Some("ZIP: 10001")), Some("10001".to_string()));
    }

    #[test]
    fn missing_values_are_none() {
        assert_eq!(normalize_zip(None), None);
        assert_eq!(normalize_zip(Some("")), None);
        assert_eq!(normalize_zip(Some("   ")), None);
        assert_eq!(normalize_zip(Some("--")), None);
    }

    proptest! {
        #[test]
        fn idempotent_for_short_numeric_strings(raw in "[0-9]{1,5}") {
            let once = normalize_zip(Some(&raw));
            let twice = normalize_zip(once.as_deref());
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.map(|zip| zip.len()), Some(5));
        }

        #[test]
        fn output_is_always_five_digits(raw in "\\PC{0,20}") {
            if let Some(zip) = normalize_zip(Some(&raw)) {
                prop_assert_eq!(zip.len(), 5);
                prop_assert_eq!(zip.chars().all(|ch| ch.is_ascii_digit()), true);
            }
        }
    }
}
