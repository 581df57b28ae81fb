//! Configuration options for address normalization.

use crate::error::{NormalizationError, Result};

/// Default maximum edit distance for fuzzy correction.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Default number of leading characters indexed per dictionary term.
pub const DEFAULT_PREFIX_LENGTH: usize = 7;

/// Fuzzy-correction settings shared by the street and city normalizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationOptions {
    /// Largest edit distance a correction may span.
    pub max_edit_distance: usize,
    /// Characters of each term that go into the delete index.
    pub prefix_length: usize,
}

impl Default for NormalizationOptions {
    fn default() -> Self {
        Self {
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            prefix_length: DEFAULT_PREFIX_LENGTH,
        }
    }
}

impl NormalizationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    #[must_use]
    pub fn with_prefix_length(mut self, length: usize) -> Self {
        self.prefix_length = length;
        self
    }

    /// Reject settings the delete index cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.prefix_length == 0 {
            return Err(NormalizationError::InvalidOptions {
                message: "prefix length must be at least 1".to_string(),
            });
        }
        if self.prefix_length <= self.max_edit_distance {
            return Err(NormalizationError::InvalidOptions {
                message: format!(
                    "prefix length {} must exceed max edit distance {}",
                    self.prefix_length, self.max_edit_distance
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let options = NormalizationOptions::new();
        assert_eq!(options.max_edit_distance, 2);
        assert_eq!(options.prefix_length, 7);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn prefix_must_exceed_distance() {
        let options = NormalizationOptions::new()
            .with_max_edit_distance(3)
            .with_prefix_length(3);
        assert!(matches!(
            options.validate(),
            Err(NormalizationError::InvalidOptions { .. })
        ));
        assert!(NormalizationOptions::new().with_prefix_length(0).validate().is_err());
    }
}
