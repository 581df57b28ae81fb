//! Frame-level application of the field normalizers.

use addr_common::column_strings;
use polars::prelude::{DataFrame, NamedFrom, Series};
use tracing::{debug, info_span};

use crate::error::{NormalizationError, Result};
use crate::fuzzy::FuzzyMatcher;
use crate::normalization::{normalize_city, normalize_state, normalize_street, normalize_zip};

pub const STREET_COLUMN: &str = "street";
pub const CITY_COLUMN: &str = "city";
pub const STATE_COLUMN: &str = "state";
pub const ZIP_COLUMN: &str = "zip";

/// Columns that identify an address, in deduplication key order.
pub const ADDRESS_KEY_COLUMNS: [&str; 4] = [STREET_COLUMN, CITY_COLUMN, STATE_COLUMN, ZIP_COLUMN];

/// Per-column outcome counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Non-blank input cells.
    pub present: usize,
    /// Cells whose normalized value differs from the raw text.
    pub changed: usize,
    /// Non-blank cells that normalized to null.
    pub nulled: usize,
}

impl FieldStats {
    fn record(&mut self, raw: Option<&str>, normalized: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        self.present += 1;
        match normalized {
            None => self.nulled += 1,
            Some(value) if value != raw => self.changed += 1,
            Some(_) => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    pub rows: usize,
    pub street: FieldStats,
    pub city: FieldStats,
    pub state: FieldStats,
    pub zip: FieldStats,
}

/// Applies the field normalizers to the address columns of a frame.
#[derive(Debug, Clone, Copy)]
pub struct AddressNormalizer<'a> {
    matcher: &'a FuzzyMatcher,
}

impl<'a> AddressNormalizer<'a> {
    pub fn new(matcher: &'a FuzzyMatcher) -> Self {
        Self { matcher }
    }

    /// Return a normalized copy of `df`.
    ///
    /// Row count, row order, and column order are preserved; the four
    /// address columns are replaced by nullable string columns and every
    /// other column is carried over untouched.
    ///
    /// # Errors
    ///
    /// [`NormalizationError::MissingColumn`] when an address column is absent.
    pub fn normalize_frame(&self, df: &DataFrame) -> Result<(DataFrame, NormalizationStats)> {
        let span = info_span!("normalize", rows = df.height());
        let _guard = span.enter();

        ensure_address_columns(df)?;
        let mut output = df.clone();
        let mut stats = NormalizationStats {
            rows: df.height(),
            ..NormalizationStats::default()
        };

        let streets = self.normalize_column(df, STREET_COLUMN, &mut stats.street, |raw| {
            normalize_street(raw, self.matcher)
        })?;
        output.with_column(streets)?;

        let cities = self.normalize_column(df, CITY_COLUMN, &mut stats.city, |raw| {
            normalize_city(raw, self.matcher)
        })?;
        output.with_column(cities)?;

        let states = self.normalize_column(df, STATE_COLUMN, &mut stats.state, |raw| {
            normalize_state(raw).map(str::to_string)
        })?;
        output.with_column(states)?;

        let zips = self.normalize_column(df, ZIP_COLUMN, &mut stats.zip, normalize_zip)?;
        output.with_column(zips)?;

        Ok((output, stats))
    }

    fn normalize_column<F>(
        &self,
        df: &DataFrame,
        name: &str,
        stats: &mut FieldStats,
        normalize: F,
    ) -> Result<Series>
    where
        F: Fn(Option<&str>) -> Option<String>,
    {
        let raw_values = column_strings(df, name)?;
        let mut normalized = Vec::with_capacity(raw_values.len());
        for raw in &raw_values {
            let value = normalize(raw.as_deref());
            stats.record(raw.as_deref(), value.as_deref());
            normalized.push(value);
        }
        debug!(
            column = name,
            present = stats.present,
            changed = stats.changed,
            nulled = stats.nulled,
            "normalized column"
        );
        Ok(Series::new(name.into(), normalized))
    }
}

fn ensure_address_columns(df: &DataFrame) -> Result<()> {
    for column in ADDRESS_KEY_COLUMNS {
        if df.column(column).is_err() {
            return Err(NormalizationError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}
