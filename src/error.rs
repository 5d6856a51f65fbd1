//! Error types for the compensation calculator.
//!
//! The calculation itself never fails: degenerate inputs surface as
//! non-finite numbers in the report. [`CompensationError`] covers the
//! edges around it: reading rail notation from the command line, opt-in
//! strict validation, and writing the report.

use thiserror::Error;

/// Result type alias using [`CompensationError`].
pub type Result<T> = std::result::Result<T, CompensationError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum CompensationError {
    // ============ Rail Notation Errors ============
    /// A value could not be read as a number
    #[error("Invalid value '{text}' for field '{field}'")]
    InvalidValue { field: String, text: String },

    /// A field name that is not part of a rail description
    #[error("Unknown rail field '{field}' (expected V, I, C, R, RC, CC, CROLL or L)")]
    UnknownField { field: String },

    /// The same field given twice in one rail
    #[error("Rail field '{field}' given more than once")]
    DuplicateField { field: String },

    /// A required field is absent
    #[error("Rail is missing required field '{field}'")]
    MissingField { field: String },

    /// A token that is not a KEY=VALUE pair
    #[error("Malformed rail entry '{text}' (expected KEY=VALUE)")]
    MalformedEntry { text: String },

    // ============ Validation Errors ============
    /// A rail failed strict validation
    #[error("Invalid rail #{index} field '{field}': {message}")]
    InvalidRail {
        index: usize,
        field: String,
        message: String,
    },

    // ============ I/O Errors ============
    /// Error writing the report
    #[error("Failed to write report: {source}")]
    OutputError {
        #[from]
        source: std::io::Error,
    },
}

impl CompensationError {
    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, text: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create an invalid rail error
    pub fn invalid_rail(index: usize, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRail {
            index,
            field: field.into(),
            message: message.into(),
        }
    }
}
