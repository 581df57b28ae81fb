//! Removal of repeated address tuples.

use std::collections::{HashMap, HashSet};

use addr_common::column_strings;
use polars::prelude::{BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use crate::error::{NormalizationError, Result};

/// Result of [`deduplicate`].
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    /// First occurrence of every distinct key tuple, in input order.
    pub data: DataFrame,
    /// Every row whose key tuple occurs more than once, first occurrences
    /// included.
    pub duplicates: DataFrame,
    /// Number of rows in `duplicates`.
    pub duplicate_count: usize,
    /// Rows dropped from the input.
    pub removed: usize,
}

/// Keep the first row of each distinct `keys` tuple.
///
/// Null key cells compare equal to each other, so rows that are null across
/// all keys collapse like any other tuple.
pub fn deduplicate(df: &DataFrame, keys: &[&str]) -> Result<DedupOutcome> {
    let mut key_columns = Vec::with_capacity(keys.len());
    for key in keys {
        if df.column(key).is_err() {
            return Err(NormalizationError::MissingColumn {
                column: (*key).to_string(),
            });
        }
        key_columns.push(column_strings(df, key)?);
    }

    let tuples: Vec<Vec<Option<&str>>> = (0..df.height())
        .map(|row| {
            key_columns
                .iter()
                .map(|values| values[row].as_deref())
                .collect()
        })
        .collect();

    let mut occurrences: HashMap<&[Option<&str>], usize> = HashMap::new();
    for tuple in &tuples {
        *occurrences.entry(tuple.as_slice()).or_insert(0) += 1;
    }

    let mut seen: HashSet<&[Option<&str>]> = HashSet::with_capacity(occurrences.len());
    let mut keep = Vec::with_capacity(tuples.len());
    let mut repeated = Vec::with_capacity(tuples.len());
    for tuple in &tuples {
        keep.push(seen.insert(tuple.as_slice()));
        repeated.push(occurrences[tuple.as_slice()] > 1);
    }

    let duplicates = df.filter(&BooleanChunked::from_slice("duplicated".into(), &repeated))?;
    let data = df.filter(&BooleanChunked::from_slice("dedupe".into(), &keep))?;
    let removed = df.height() - data.height();
    debug!(
        rows = df.height(),
        duplicates = duplicates.height(),
        removed,
        "deduplicated address rows"
    );

    Ok(DedupOutcome {
        duplicate_count: duplicates.height(),
        data,
        duplicates,
        removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::ADDRESS_KEY_COLUMNS;
    use polars::prelude::{AnyValue, IntoColumn, NamedFrom, Series};

    fn frame(rows: &[[Option<&str>; 5]]) -> DataFrame {
        let names = ["street", "city", "state", "zip", "id"];
        let columns = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let values: Vec<Option<&str>> = rows.iter().map(|row| row[idx]).collect();
                Series::new((*name).into(), values).into_column()
            })
            .collect();
        DataFrame::new(columns).unwrap()
    }

    fn ids(df: &DataFrame) -> Vec<String> {
        let column = df.column("id").unwrap();
        (0..df.height())
            .map(|row| match column.get(row).unwrap() {
                AnyValue::Null => String::new(),
                value => addr_common::any_to_string(value),
            })
            .collect()
    }

    #[test]
    fn keeps_first_of_each_tuple() {
        let df = frame(&[
            [Some("1 Oak Road"), Some("Boston"), Some("MA"), Some("02110"), Some("a")],
            [Some("1 Oak Road"), Some("Boston"), Some("MA"), Some("02110"), Some("b")],
            [Some("1 Oak Road"), Some("Boston"), Some("MA"), Some("02111"), Some("c")],
        ]);

        let outcome = deduplicate(&df, &ADDRESS_KEY_COLUMNS).unwrap();

        assert_eq!(ids(&outcome.data), vec!["a", "c"]);
        assert_eq!(outcome.duplicate_count, 2);
        assert_eq!(ids(&outcome.duplicates), vec!["a", "b"]);
        assert_eq!(outcome.removed, 1);
    }

    #[test]
    fn nulls_match_nulls() {
        let df = frame(&[
            [None, None, None, None, Some("a")],
            [Some("2 Elm Street"), None, Some("TX"), None, Some("b")],
            [None, None, None, None, Some("c")],
            [Some("2 Elm Street"), None, Some("TX"), None, Some("d")],
            [Some("2 Elm Street"), Some("Austin"), Some("TX"), None, Some("e")],
        ]);

        let outcome = deduplicate(&df, &ADDRESS_KEY_COLUMNS).unwrap();

        assert_eq!(ids(&outcome.data), vec!["a", "b", "e"]);
        assert_eq!(outcome.duplicate_count, 4);
        assert_eq!(outcome.removed, 2);
    }

    #[test]
    fn no_duplicates_is_a_no_op() {
        let df = frame(&[
            [Some("1 Oak Road"), None, None, None, Some("a")],
            [Some("2 Oak Road"), None, None, None, Some("b")],
        ]);

        let outcome = deduplicate(&df, &ADDRESS_KEY_COLUMNS).unwrap();

        assert_eq!(outcome.data.height(), 2);
        assert_eq!(outcome.duplicates.height(), 0);
        assert_eq!(outcome.removed, 0);
    }

    #[test]
    fn extra_columns_do_not_affect_keys() {
        let df = frame(&[
            [Some("1 Oak Road"), None, None, None, Some("a")],
            [Some("1 Oak Road"), None, None, None, Some("z")],
        ]);
        let outcome = deduplicate(&df, &ADDRESS_KEY_COLUMNS).unwrap();
        assert_eq!(ids(&outcome.data), vec!["a"]);
    }

    #[test]
    fn missing_key_column_is_an_error() {
        let df = frame(&[[Some("1 Oak Road"), None, None, None, Some("a")]]);
        assert!(deduplicate(&df, &["street", "county"]).is_err());
    }
}
