//! Error types for step segmentation

use thiserror::Error;

/// Core error type for segmentation operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two sequences that must be aligned row-for-row have different lengths
    #[error("Length mismatch in {context}: expected {expected}, got {actual}")]
    LengthMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for misaligned columns
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::LengthMismatch {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Fail unless `actual` equals `expected`
    pub(crate) fn ensure_aligned(expected: usize, actual: usize, context: &str) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Self::length_mismatch(expected, actual, context))
        }
    }
}
