//! Address-term and US state lexicons.
//!
//! Each table maps a canonical value to its accepted lowercase variants.
//! Variants are disjoint across entries of the same table, so a reverse
//! lookup never has to pick between two canonical values.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Street suffixes and directionals, canonical term first.
pub const ADDRESS_TERMS: &[(&str, &[&str])] = &[
    ("street", &["st", "street", "str"]),
    ("avenue", &["ave", "avenue", "av"]),
    ("drive", &["dr", "drive", "drv"]),
    ("road", &["rd", "road"]),
    ("lane", &["ln", "lane"]),
    ("circle", &["cir", "circle", "crcl"]),
    ("boulevard", &["blvd", "boulevard", "boul"]),
    ("place", &["pl", "place"]),
    ("court", &["ct", "court", "crt"]),
    ("square", &["sq", "square"]),
    ("highway", &["hwy", "highway", "hiway"]),
    ("parkway", &["pkwy", "parkway"]),
    ("expressway", &["expy", "expressway"]),
    ("plaza", &["plz", "plaza"]),
    ("trail", &["tr", "trail", "trl"]),
    ("way", &["wy", "way"]),
    ("alley", &["aly", "alley"]),
    ("terrace", &["ter", "terrace"]),
    ("pike", &["pk", "pike"]),
    ("grove", &["grv", "grove"]),
    ("ridge", &["rdg", "ridge"]),
    ("north", &["n", "no", "nth"]),
    ("south", &["s", "so", "sth"]),
    ("east", &["e", "ea"]),
    ("west", &["w", "we"]),
    ("northeast", &["ne"]),
    ("northwest", &["nw"]),
    ("southeast", &["se"]),
    ("southwest", &["sw"]),
];

/// US states, DC, and inhabited territories keyed by USPS code.
pub const US_STATES: &[(&str, &[&str])] = &[
    ("AL", &["alabama", "al"]),
    ("AK", &["alaska", "ak"]),
    ("AZ", &["arizona", "az"]),
    ("AR", &["arkansas", "ar"]),
    ("CA", &["california", "ca", "calif"]),
    ("CO", &["colorado", "co"]),
    ("CT", &["connecticut", "ct", "conn"]),
    ("DE", &["delaware", "de"]),
    ("FL", &["florida", "fl", "fla"]),
    ("GA", &["georgia", "ga"]),
    ("HI", &["hawaii", "hi"]),
    ("ID", &["idaho", "id"]),
    ("IL", &["illinois", "il"]),
    ("IN", &["indiana", "in"]),
    ("IA", &["iowa", "ia"]),
    ("KS", &["kansas", "ks"]),
    ("KY", &["kentucky", "ky"]),
    ("LA", &["louisiana", "la"]),
    ("ME", &["maine", "me"]),
    ("MD", &["maryland", "md"]),
    ("MA", &["massachusetts", "ma", "mass"]),
    ("MI", &["michigan", "mi", "mich"]),
    ("MN", &["minnesota", "mn", "minn"]),
    ("MS", &["mississippi", "ms"]),
    ("MO", &["missouri", "mo"]),
    ("MT", &["montana", "mt"]),
    ("NE", &["nebraska", "ne", "nebr"]),
    ("NV", &["nevada", "nv"]),
    ("NH", &["new hampshire", "nh"]),
    ("NJ", &["new jersey", "nj"]),
    ("NM", &["new mexico", "nm"]),
    ("NY", &["new york", "ny"]),
    ("NC", &["north carolina", "nc"]),
    ("ND", &["north dakota", "nd"]),
    ("OH", &["ohio", "oh"]),
    ("OK", &["oklahoma", "ok"]),
    ("OR", &["oregon", "or"]),
    ("PA", &["pennsylvania", "pa"]),
    ("RI", &["rhode island", "ri"]),
    ("SC", &["south carolina", "sc"]),
    ("SD", &["south dakota", "sd"]),
    ("TN", &["tennessee", "tn", "tenn"]),
    ("TX", &["texas", "tx"]),
    ("UT", &["utah", "ut"]),
    ("VT", &["vermont", "vt"]),
    ("VA", &["virginia", "va"]),
    ("WA", &["washington", "wa", "wash"]),
    ("WV", &["west virginia", "wv"]),
    ("WI", &["wisconsin", "wi", "wis", "wisc"]),
    ("WY", &["wyoming", "wy"]),
    ("DC", &["district of columbia", "dc"]),
    ("PR", &["puerto rico", "pr"]),
    ("VI", &["virgin islands", "vi"]),
    ("GU", &["guam", "gu"]),
    ("MP", &["northern mariana islands", "mp"]),
    ("AS", &["american samoa", "as"]),
];

/// Variant (and canonical term) → canonical address term.
static ADDRESS_TERM_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (canonical, variants) in ADDRESS_TERMS {
        map.insert(*canonical, *canonical);
        for variant in *variants {
            map.insert(*variant, *canonical);
        }
    }
    map
});

static STATE_VARIANT_INDEX: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (code, variants) in US_STATES {
        for variant in *variants {
            map.insert(*variant, *code);
        }
    }
    map
});

/// Canonical address term for a token, matched case-insensitively.
///
/// ```
/// use addr_standards::address_term;
///
/// assert_eq!(address_term("St"), Some("street"));
/// assert_eq!(address_term("parkway"), Some("parkway"));
/// assert_eq!(address_term("main"), None);
/// ```
pub fn address_term(token: &str) -> Option<&'static str> {
    ADDRESS_TERM_INDEX
        .get(token.to_lowercase().as_str())
        .copied()
}

/// The entry in [`US_STATES`] equal to `code` (exact, uppercase).
pub fn state_code(code: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .map(|(known, _)| *known)
        .find(|known| *known == code)
}

/// True when `code` is exactly one of the two-letter codes in [`US_STATES`].
pub fn is_state_code(code: &str) -> bool {
    state_code(code).is_some()
}

/// State code whose variant list contains `variant` (expected lowercase).
pub fn state_code_for_variant(variant: &str) -> Option<&'static str> {
    STATE_VARIANT_INDEX.get(variant).copied()
}
