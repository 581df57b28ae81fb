//! Polars AnyValue utility functions.
//!
//! Address columns are usually read as strings, but callers may also hand in
//! frames with inferred numeric columns (ZIP codes are the common case).

use polars::prelude::{AnyValue, DataFrame, PolarsResult};

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`. Whole floats are rendered without a
/// fractional part so that `2108.0` becomes `"2108"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use addr_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(2108)), "2108");
/// assert_eq!(any_to_string(AnyValue::Float64(2108.0)), "2108");
/// assert_eq!(any_to_string(AnyValue::String("02108")), "02108");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts `AnyValue` to `String`, returning `None` for nulls and blank text.
pub fn any_to_string_non_empty(value: AnyValue<'_>) -> Option<String> {
    let s = any_to_string(value);
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Formats a floating-point number, dropping the fractional part of whole values.
///
/// # Examples
///
/// ```
/// use addr_common::format_numeric;
///
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    // i64 holds every whole f64 below 2^53 exactly.
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 9_007_199_254_740_992.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

/// Reads a column as optional strings, one entry per row.
///
/// Nulls and blank cells become `None`; other values go through
/// [`any_to_string`] so numeric columns are accepted too.
pub fn column_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_string_non_empty(column.get(idx)?));
    }
    Ok(values)
}
