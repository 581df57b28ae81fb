//! Shared utilities for addrclean crates.
//!
//! This crate provides the Polars `AnyValue` conversions used when address
//! columns arrive as strings, numbers, or nulls.

pub mod polars;

pub use polars::{any_to_string, any_to_string_non_empty, column_strings, format_numeric};
