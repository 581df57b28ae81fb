//! Dictionary-backed spelling correction.
//!
//! A thin layer over the `symspell` symmetric-delete index: every dictionary
//! term contributes the deletes of its prefix, and a query only computes edit
//! distances against terms that share a delete with the query prefix.
//!
//! ```text
//! "springfeild" ──prefix──▶ "springf" ──deletes──▶ {"springf", "sringf", ...}
//!                                                     │
//!                                  index hit ◀────────┘
//!                                     │
//!                       "springfield" (distance 1, OSA)
//! ```
//!
//! The index orders suggestions by distance and count only. Ties on both are
//! broken here by term so repeated runs pick the same correction.

use std::cmp::Reverse;
use std::fmt;
use std::sync::LazyLock;

use addr_standards::{FrequencyDictionary, bundled_dictionary};
use symspell::{SymSpell, SymSpellBuilder, UnicodeStringStrategy};
use tracing::debug;

use crate::error::{NormalizationError, Result};
use crate::options::NormalizationOptions;

type Index = SymSpell<UnicodeStringStrategy>;

/// Separator used when feeding parsed entries to the index. Parsed terms
/// never contain it.
const ENTRY_SEPARATOR: &str = "\t";

static BUNDLED_MATCHER: LazyLock<FuzzyMatcher> = LazyLock::new(|| {
    // `SymSpell::default()` is built with the default options.
    FuzzyMatcher::from_index(
        Index::default(),
        bundled_dictionary(),
        NormalizationOptions::default(),
    )
});

/// Matcher over the bundled dictionary with default options.
pub fn bundled_matcher() -> &'static FuzzyMatcher {
    &BUNDLED_MATCHER
}

/// Which suggestions a lookup returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Only the best-ranked suggestion.
    Top,
    /// Every suggestion at the smallest distance found.
    #[default]
    Closest,
    /// Every suggestion within the edit distance.
    All,
}

/// A dictionary term proposed for an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub term: String,
    pub distance: usize,
    pub count: u64,
}

/// Immutable symmetric-delete index over a frequency dictionary.
pub struct FuzzyMatcher {
    index: Index,
    max_edit_distance: usize,
    terms: usize,
    source: String,
}

impl fmt::Debug for FuzzyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyMatcher")
            .field("source", &self.source)
            .field("terms", &self.terms)
            .field("max_edit_distance", &self.max_edit_distance)
            .finish_non_exhaustive()
    }
}

impl FuzzyMatcher {
    /// Index `dictionary` with validated options.
    pub fn new(dictionary: &FrequencyDictionary, options: NormalizationOptions) -> Result<Self> {
        options.validate()?;
        let index: Index = SymSpellBuilder::default()
            .max_dictionary_edit_distance(to_index_int(options.max_edit_distance)?)
            .prefix_length(to_index_int(options.prefix_length)?)
            .count_threshold(1)
            .build()
            .map_err(|err| NormalizationError::InvalidOptions {
                message: err.to_string(),
            })?;
        Ok(Self::from_index(index, dictionary, options))
    }

    fn from_index(
        mut index: Index,
        dictionary: &FrequencyDictionary,
        options: NormalizationOptions,
    ) -> Self {
        let mut terms = 0;
        for (term, count) in dictionary.iter() {
            if count == 0 {
                continue;
            }
            // The index stores counts as i64.
            let count = i64::try_from(count).unwrap_or(i64::MAX);
            let line = format!("{term}{ENTRY_SEPARATOR}{count}");
            if index.load_dictionary_line(&line, 0, 1, ENTRY_SEPARATOR) {
                terms += 1;
            }
        }
        debug!(source = dictionary.source(), terms, "built fuzzy index");
        Self {
            index,
            max_edit_distance: options.max_edit_distance,
            terms,
            source: dictionary.source().to_string(),
        }
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of indexed terms.
    pub fn len(&self) -> usize {
        self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms == 0
    }

    /// Suggestions for `input`, ranked by distance, then count (descending),
    /// then term.
    ///
    /// `max_edit_distance` is capped at the distance the index was built for.
    pub fn lookup(
        &self,
        input: &str,
        verbosity: Verbosity,
        max_edit_distance: usize,
    ) -> Vec<Suggestion> {
        let max_distance = max_edit_distance.min(self.max_edit_distance);
        // Top is resolved after the tie-break, so ask for every closest term.
        let search = match verbosity {
            Verbosity::All => symspell::Verbosity::All,
            Verbosity::Top | Verbosity::Closest => symspell::Verbosity::Closest,
        };
        let Ok(max_distance) = i64::try_from(max_distance) else {
            return Vec::new();
        };

        let mut suggestions: Vec<Suggestion> = self
            .index
            .lookup(input, search, max_distance)
            .into_iter()
            .map(|found| Suggestion {
                term: found.term,
                distance: usize::try_from(found.distance).unwrap_or(usize::MAX),
                count: u64::try_from(found.count).unwrap_or_default(),
            })
            .collect();
        suggestions.sort_by(|a, b| {
            (a.distance, Reverse(a.count), &a.term).cmp(&(b.distance, Reverse(b.count), &b.term))
        });
        if verbosity == Verbosity::Top {
            suggestions.truncate(1);
        }
        suggestions
    }

    /// Best correction for `input` within the configured edit distance.
    pub fn closest(&self, input: &str) -> Option<Suggestion> {
        self.lookup(input, Verbosity::Top, self.max_edit_distance)
            .into_iter()
            .next()
    }
}

fn to_index_int(value: usize) -> Result<i64> {
    i64::try_from(value).map_err(|_| NormalizationError::InvalidOptions {
        message: format!("{value} is too large"),
    })
}
