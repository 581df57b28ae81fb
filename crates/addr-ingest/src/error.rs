//! Error types for address table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing address tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input path does not resolve to a file.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or flush the output file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to move the finished temp file over the output path.
    #[error("failed to replace {target_path} with {temp_path}: {source}")]
    AtomicWrite {
        temp_path: PathBuf,
        target_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no header or no data rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Required column not found in the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Failed to serialize a frame.
    #[error("failed to write CSV {path}: {message}")]
    CsvWrite { path: PathBuf, message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/data/addresses.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /data/addresses.csv");

        let err = IngestError::MissingColumn {
            column: "zip".to_string(),
            path: PathBuf::from("in.csv"),
        };
        assert_eq!(err.to_string(), "required column 'zip' not found in in.csv");
    }
}
