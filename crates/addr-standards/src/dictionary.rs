//! Word-frequency dictionaries.
//!
//! Dictionaries use the SymSpell text layout: one entry per line with the
//! term and its corpus count in separate columns. An English dictionary of
//! about 11,500 terms is compiled into the binary. It covers general
//! vocabulary, street-name words (trees, landforms, surnames) and US place
//! names. Larger lists (for example the 82,765-term SymSpell English list) can
//! be loaded from disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use tracing::debug;

use crate::error::StandardsError;

const BUNDLED_DICTIONARY: &str = include_str!("../data/frequency_dictionary_en.txt");

static BUNDLED: LazyLock<FrequencyDictionary> = LazyLock::new(|| {
    FrequencyDictionary::parse(
        BUNDLED_DICTIONARY,
        &DictionaryFormat::default(),
        "bundled:frequency_dictionary_en.txt",
    )
});

/// The dictionary shipped with the crate, parsed on first access.
pub fn bundled_dictionary() -> &'static FrequencyDictionary {
    &BUNDLED
}

/// Column layout of a dictionary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFormat {
    /// Column holding the term.
    pub term_index: usize,
    /// Column holding the frequency count.
    pub count_index: usize,
    /// Column separator. `None` splits on any run of whitespace.
    pub separator: Option<char>,
}

impl Default for DictionaryFormat {
    fn default() -> Self {
        Self {
            term_index: 0,
            count_index: 1,
            separator: None,
        }
    }
}

impl DictionaryFormat {
    /// Use an explicit separator, which allows multi-word terms when it is
    /// not a space (e.g. `"new york\t1234"`).
    #[must_use]
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self.separator {
            Some(sep) => line.split(sep).collect(),
            None => line.split_whitespace().collect(),
        }
    }
}

/// Immutable term → count table.
#[derive(Debug, Clone)]
pub struct FrequencyDictionary {
    source: String,
    counts: HashMap<String, u64>,
}

impl FrequencyDictionary {
    /// Parse dictionary text. Malformed lines are skipped; repeated terms
    /// accumulate their counts.
    pub fn parse(text: &str, format: &DictionaryFormat, source: impl Into<String>) -> Self {
        let source = source.into();
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut skipped = 0usize;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let columns = format.split(line);
            let term = columns.get(format.term_index).map(|term| term.trim());
            let count = columns
                .get(format.count_index)
                .and_then(|count| count.trim().parse::<u64>().ok());
            match (term, count) {
                (Some(term), Some(count)) if !term.is_empty() => {
                    let entry = counts.entry(term.to_lowercase()).or_insert(0);
                    *entry = entry.saturating_add(count);
                }
                _ => skipped += 1,
            }
        }
        if skipped > 0 {
            debug!(source = %source, skipped, "skipped malformed dictionary lines");
        }
        Self { source, counts }
    }

    /// Load a dictionary file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`StandardsError::Io`] when the file cannot be read and
    /// [`StandardsError::EmptyDictionary`] when no line yields an entry.
    pub fn load(path: &Path, format: &DictionaryFormat) -> Result<Self, StandardsError> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let dictionary = Self::parse(&text, format, path.display().to_string());
        if dictionary.is_empty() {
            return Err(StandardsError::EmptyDictionary {
                path: PathBuf::from(path),
            });
        }
        debug!(path = %path.display(), terms = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Build a dictionary from in-memory entries.
    pub fn from_entries<I, S>(entries: I, source: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut counts: HashMap<String, u64> = HashMap::new();
        for (term, count) in entries {
            let entry = counts.entry(term.as_ref().to_lowercase()).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        Self {
            source: source.into(),
            counts,
        }
    }

    /// Where the entries came from (file path or `bundled:` label).
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, term: &str) -> Option<u64> {
        self.counts.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(term, count)| (term.as_str(), *count))
    }
}
