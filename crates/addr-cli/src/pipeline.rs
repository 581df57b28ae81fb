//! Read → normalize → deduplicate → write.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, trace};

use addr_common::column_strings;
use addr_ingest::{read_csv_table, write_csv_table};
use addr_normalization::{
    ADDRESS_KEY_COLUMNS, AddressNormalizer, FuzzyMatcher, NormalizationOptions,
    NormalizationStats, bundled_matcher, deduplicate,
};
use addr_standards::{
    DictionaryFormat, FrequencyDictionary, bundled_dictionary, dictionary_path_from_env,
};

use crate::logging::redact_value;

/// Where the fuzzy-correction vocabulary comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DictionarySource {
    /// The dictionary compiled into the binary.
    #[default]
    Bundled,
    /// A `term count` file on disk.
    File {
        path: PathBuf,
        format: DictionaryFormat,
    },
}

impl DictionarySource {
    /// Pick the dictionary from an explicit path, then `ADDRCLEAN_DICTIONARY`,
    /// falling back to the bundled one.
    pub fn resolve(explicit: Option<PathBuf>, separator: Option<char>) -> Self {
        match explicit.or_else(dictionary_path_from_env) {
            Some(path) => {
                let mut format = DictionaryFormat::default();
                if let Some(separator) = separator {
                    format = format.with_separator(separator);
                }
                Self::File { path, format }
            }
            None => Self::Bundled,
        }
    }
}

/// A matcher that is either the shared bundled one or built for this run.
#[derive(Debug)]
pub enum LoadedMatcher {
    Shared(&'static FuzzyMatcher),
    Owned(Box<FuzzyMatcher>),
}

impl Deref for LoadedMatcher {
    type Target = FuzzyMatcher;

    fn deref(&self) -> &FuzzyMatcher {
        match self {
            Self::Shared(matcher) => matcher,
            Self::Owned(matcher) => matcher,
        }
    }
}

/// Build the fuzzy matcher for a run. Completes before any row is touched.
pub fn load_matcher(
    source: &DictionarySource,
    options: NormalizationOptions,
) -> Result<LoadedMatcher> {
    options.validate()?;
    match source {
        DictionarySource::Bundled if options == NormalizationOptions::default() => {
            Ok(LoadedMatcher::Shared(bundled_matcher()))
        }
        DictionarySource::Bundled => {
            let matcher = FuzzyMatcher::new(bundled_dictionary(), options)?;
            Ok(LoadedMatcher::Owned(Box::new(matcher)))
        }
        DictionarySource::File { path, format } => {
            let dictionary = FrequencyDictionary::load(path, format)
                .with_context(|| format!("load dictionary {}", path.display()))?;
            let matcher = FuzzyMatcher::new(&dictionary, options)?;
            Ok(LoadedMatcher::Owned(Box::new(matcher)))
        }
    }
}

/// Settings for [`process_file`].
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub dictionary: DictionarySource,
    pub normalization: NormalizationOptions,
    /// Run every stage but skip writing the output file.
    pub dry_run: bool,
}

/// Outcome of a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows whose address tuple repeats, first occurrences included.
    pub duplicates: DataFrame,
    pub duplicate_count: usize,
    pub removed: usize,
    pub stats: NormalizationStats,
    /// The cleaned table as written.
    pub data: DataFrame,
    /// `None` on dry runs.
    pub output: Option<PathBuf>,
}

/// `<dir>/<stem>_cleaned.csv` next to `input`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "addresses".to_string());
    input.with_file_name(format!("{stem}_cleaned.csv"))
}

/// Clean `input` and write the result to `output`.
///
/// Nothing is written when reading, normalization, or deduplication fails.
pub fn process_file(
    input: &Path,
    output: &Path,
    options: &PipelineOptions,
) -> Result<PipelineResult> {
    let span = info_span!("pipeline", input = %input.display());
    let _guard = span.enter();

    let matcher = load_matcher(&options.dictionary, options.normalization)?;
    info!(dictionary = matcher.source(), terms = matcher.len(), "dictionary ready");

    let raw = read_csv_table(input, &ADDRESS_KEY_COLUMNS)
        .with_context(|| format!("read input {}", input.display()))?;
    let (normalized, stats) = AddressNormalizer::new(&matcher)
        .normalize_frame(&raw)
        .with_context(|| format!("normalize {}", input.display()))?;
    let outcome = deduplicate(&normalized, &ADDRESS_KEY_COLUMNS).context("deduplicate rows")?;
    trace_duplicates(&outcome.duplicates)?;

    let mut data = outcome.data;
    let output = if options.dry_run {
        info!("dry run, skipping output");
        None
    } else {
        write_csv_table(&mut data, output)
            .with_context(|| format!("write output {}", output.display()))?;
        Some(output.to_path_buf())
    };

    info!(
        input_rows = raw.height(),
        output_rows = data.height(),
        removed = outcome.removed,
        "pipeline complete"
    );
    Ok(PipelineResult {
        input_rows: raw.height(),
        output_rows: data.height(),
        duplicates: outcome.duplicates,
        duplicate_count: outcome.duplicate_count,
        removed: outcome.removed,
        stats,
        data,
        output,
    })
}

fn trace_duplicates(duplicates: &DataFrame) -> Result<()> {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return Ok(());
    }
    let streets = column_strings(duplicates, ADDRESS_KEY_COLUMNS[0])?;
    let cities = column_strings(duplicates, ADDRESS_KEY_COLUMNS[1])?;
    for (street, city) in streets.iter().zip(&cities) {
        trace!(
            street = redact_value(street.as_deref().unwrap_or_default()),
            city = redact_value(city.as_deref().unwrap_or_default()),
            "duplicate address"
        );
    }
    Ok(())
}
