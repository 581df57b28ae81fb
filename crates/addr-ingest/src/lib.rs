//! Address table ingestion.
//!
//! Reads delimited files into Polars frames with every column kept as text,
//! and writes normalized frames back out.

pub mod csv;
pub mod error;

pub use crate::csv::{read_csv_table, write_csv_table};
pub use crate::error::{IngestError, Result};
