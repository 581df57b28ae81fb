#![deny(unsafe_code)]

//! Static reference data for address normalization.
//!
//! - [`lexicon`]: address-term synonyms and US state variants.
//! - [`dictionary`]: word-frequency dictionaries used by fuzzy correction.

pub mod dictionary;
pub mod error;
pub mod lexicon;
pub mod paths;

pub use crate::dictionary::{DictionaryFormat, FrequencyDictionary, bundled_dictionary};
pub use crate::error::StandardsError;
pub use crate::lexicon::{
    ADDRESS_TERMS, US_STATES, address_term, is_state_code, state_code, state_code_for_variant,
};
pub use crate::paths::{DICTIONARY_ENV_VAR, dictionary_path_from_env};
