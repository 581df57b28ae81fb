//! Error types for address normalization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormalizationError {
    /// A required address column is absent from the frame.
    #[error("required address column '{column}' not found")]
    MissingColumn { column: String },

    /// Fuzzy matching parameters that cannot build a usable index.
    #[error("invalid normalization options: {message}")]
    InvalidOptions { message: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for NormalizationError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NormalizationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NormalizationError::MissingColumn {
            column: "zip".to_string(),
        };
        assert_eq!(err.to_string(), "required address column 'zip' not found");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("city".into());
        let err: NormalizationError = polars_err.into();
        assert!(matches!(err, NormalizationError::DataFrame { .. }));
    }
}
