//! Street line normalization.

use addr_standards::address_term;

use super::present;
use super::text::{clean_street, title_case};
use crate::fuzzy::FuzzyMatcher;

/// Normalize a street line token by token.
///
/// House numbers and tokens containing `#` pass through, known suffixes and
/// directionals map to their canonical term, and everything else is
/// spell-corrected against `matcher` when a suggestion exists. The result is
/// title-cased.
pub fn normalize_street(raw: Option<&str>, matcher: &FuzzyMatcher) -> Option<String> {
    let cleaned = clean_street(present(raw)?);
    let tokens: Vec<String> = cleaned
        .split_whitespace()
        .map(|token| normalize_token(token, matcher))
        .collect();
    if tokens.is_empty() {
        return None;
    }
    Some(title_case(&tokens.join(" ")))
}

fn normalize_token(token: &str, matcher: &FuzzyMatcher) -> String {
    if token.chars().all(|ch| ch.is_ascii_digit()) || token.contains('#') {
        return token.to_string();
    }
    if let Some(term) = address_term(token) {
        return term.to_string();
    }
    match matcher.closest(token) {
        Some(suggestion) => suggestion.term,
        None => token.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::bundled_matcher;

    fn street(raw: &str) -> Option<String> {
        normalize_street(Some(raw), bundled_matcher())
    }

    #[test]
    fn expands_suffixes_and_keeps_units() {
        assert_eq!(street("123 Main St #4B").as_deref(), Some("123 Main Street #4B"));
        assert_eq!(street("123 Main St.").as_deref(), Some("123 Main Street"));
        assert_eq!(street("9 ELM AVE").as_deref(), Some("9 Elm Avenue"));
    }

    #[test]
    fn expands_directionals() {
        assert_eq!(
            street("500 N Washington Blvd").as_deref(),
            Some("500 North Washington Boulevard")
        );
        assert_eq!(street("12 sw Park Pkwy").as_deref(), Some("12 Southwest Park Parkway"));
    }

    #[test]
    fn corrects_misspelled_words() {
        assert_eq!(street("42 Mapel Dr").as_deref(), Some("42 Maple Drive"));
        assert_eq!(street("7 Chesnut Ln").as_deref(), Some("7 Chestnut Lane"));
    }

    #[test]
    fn short_dictionary_words_are_not_corrected() {
        assert_eq!(street("12 Ash St").as_deref(), Some("12 Ash Street"));
        assert_eq!(street("3 Peach Ln").as_deref(), Some("3 Peach Lane"));
        assert_eq!(street("80 Glen Rd").as_deref(), Some("80 Glen Road"));
        assert_eq!(street("5 Fir Ct").as_deref(), Some("5 Fir Court"));
        assert_eq!(street("210 Vine St").as_deref(), Some("210 Vine Street"));
    }

    #[test]
    fn unknown_words_without_suggestion_are_kept() {
        assert_eq!(street("1 Xyzzyq Rd").as_deref(), Some("1 Xyzzyq Road"));
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(street("  77   Oak   Ct ").as_deref(), Some("77 Oak Court"));
    }

    #[test]
    fn missing_or_empty_is_none() {
        assert_eq!(normalize_street(None, bundled_matcher()), None);
        assert_eq!(street(""), None);
        assert_eq!(street("   "), None);
        assert_eq!(street("..."), None);
    }

    #[test]
    fn normalized_output_is_stable() {
        let once = street("123 Main St #4B").unwrap();
        assert_eq!(street(&once).as_deref(), Some(once.as_str()));
    }
}
