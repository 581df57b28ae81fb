//! State name to USPS code mapping.

use addr_standards::{state_code, state_code_for_variant};

use super::present;

/// Map a state name or abbreviation to its two-letter code.
///
/// Matching is case-insensitive against the state lexicon. Unrecognized
/// values, including punctuated forms such as `"Mass."`, yield `None`; there
/// is no fuzzy fallback.
///
/// ```
/// use addr_normalization::normalize_state;
///
/// assert_eq!(normalize_state(Some("texas")), Some("TX"));
/// assert_eq!(normalize_state(Some("Nowhereland")), None);
/// ```
pub fn normalize_state(raw: Option<&str>) -> Option<&'static str> {
    let value = present(raw)?.to_lowercase();
    if let Some(code) = state_code(&value.to_uppercase()) {
        return Some(code);
    }
    state_code_for_variant(&value)
}
