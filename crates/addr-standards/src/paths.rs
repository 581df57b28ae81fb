//! Dictionary path resolution.

use std::path::PathBuf;

/// Environment variable naming a word-frequency dictionary to use instead of
/// the bundled one.
pub const DICTIONARY_ENV_VAR: &str = "ADDRCLEAN_DICTIONARY";

/// Dictionary path configured through [`DICTIONARY_ENV_VAR`], if any.
///
/// Blank values are treated as unset.
pub fn dictionary_path_from_env() -> Option<PathBuf> {
    std::env::var_os(DICTIONARY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
