#![deny(unsafe_code)]

//! Address normalization for tabular data.
//!
//! Field normalizers turn raw street, city, state, and ZIP values into
//! canonical strings (or null), [`transform`] applies them to a whole frame,
//! and [`dedup`] drops repeated address tuples afterwards.

pub mod dedup;
pub mod error;
pub mod fuzzy;
pub mod normalization;
pub mod options;
pub mod transform;

pub use dedup::{DedupOutcome, deduplicate};
pub use error::{NormalizationError, Result};
pub use fuzzy::{FuzzyMatcher, Suggestion, Verbosity, bundled_matcher};
pub use normalization::{normalize_city, normalize_state, normalize_street, normalize_zip};
pub use options::NormalizationOptions;
pub use transform::{
    ADDRESS_KEY_COLUMNS, AddressNormalizer, CITY_COLUMN, FieldStats, NormalizationStats,
    STATE_COLUMN, STREET_COLUMN, ZIP_COLUMN,
};
