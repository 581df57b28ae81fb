//! Shared text cleanup for street and city values.

use std::sync::LazyLock;

use regex::Regex;

/// Anything but word characters, whitespace, `#`, and `-`.
static STREET_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s#-]").expect("Invalid street cleanup regex"));

/// Anything but word characters and whitespace.
static CITY_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid city cleanup regex"));

pub(super) fn clean_street(value: &str) -> String {
    STREET_NOISE
        .replace_all(&value.trim().to_lowercase(), "")
        .into_owned()
}

pub(super) fn clean_city(value: &str) -> String {
    CITY_NOISE
        .replace_all(&value.trim().to_lowercase(), "")
        .into_owned()
}

/// Title-case `value`: a cased letter is uppercased when it starts the string
/// or follows an uncased character, and lowercased otherwise.
///
/// ```
/// use addr_normalization::normalization::title_case;
///
/// assert_eq!(title_case("123 main street #4b"), "123 Main Street #4B");
/// assert_eq!(title_case("o'neil"), "O'Neil");
/// ```
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_cased = false;
    for ch in value.chars() {
        if previous_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        previous_cased = ch.is_lowercase() || ch.is_uppercase();
    }
    out
}
