//! City name normalization.

use super::present;
use super::text::{clean_city, title_case};
use crate::fuzzy::FuzzyMatcher;

/// Normalize a city name.
///
/// The whole cleaned value is corrected as a single dictionary lookup, so a
/// multi-word city only changes when the dictionary has a matching
/// multi-word entry.
pub fn normalize_city(raw: Option<&str>, matcher: &FuzzyMatcher) -> Option<String> {
    let cleaned = clean_city(present(raw)?);
    if cleaned.trim().is_empty() {
        return None;
    }
    let corrected = match matcher.closest(&cleaned) {
        Some(suggestion) => suggestion.term,
        None => cleaned,
    };
    Some(title_case(&corrected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::bundled_matcher;
    use crate::options::NormalizationOptions;
    use addr_standards::{DictionaryFormat, FrequencyDictionary};

    fn city(raw: &str) -> Option<String> {
        normalize_city(Some(raw), bundled_matcher())
    }

    #[test]
    fn corrects_single_word_cities() {
        assert_eq!(city("Springfeild").as_deref(), Some("Springfield"));
        assert_eq!(city("BOSTON").as_deref(), Some("Boston"));
        assert_eq!(city("Pittsburg").as_deref(), Some("Pittsburgh"));
    }

    #[test]
    fn short_city_names_are_kept() {
        for name in ["Troy", "Erie", "Waco", "Bend"] {
            assert_eq!(city(name).as_deref(), Some(name));
        }
        assert_eq!(city("OHIO").as_deref(), Some("Ohio"));
    }

    #[test]
    fn multi_word_city_is_one_lookup() {
        // "san fransisco" is never split; the bundled dictionary has no
        // multi-word entries, so the value is only cleaned and title-cased.
        assert_eq!(city("San Fransisco!").as_deref(), Some("San Fransisco"));
    }

    #[test]
    fn multi_word_entries_enable_correction() {
        let format = DictionaryFormat::default().with_separator('\t');
        let dictionary =
            FrequencyDictionary::parse("san francisco\t500\n", &format, "test");
        let matcher = FuzzyMatcher::new(&dictionary, NormalizationOptions::default()).unwrap();

        assert_eq!(
            normalize_city(Some("San Fransisco"), &matcher).as_deref(),
            Some("San Francisco")
        );
    }

    #[test]
    fn missing_or_empty_is_none() {
        assert_eq!(normalize_city(None, bundled_matcher()), None);
        assert_eq!(city(""), None);
        assert_eq!(city(" - "), None);
    }
}
