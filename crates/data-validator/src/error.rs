//! Validation Error Types

use thiserror::Error;

/// Errors while validating a reading entered as text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Field left blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Text is not a number
    #[error("{field} is not a number: {input:?}")]
    InvalidFormat { field: &'static str, input: String },

    /// NaN or infinite value
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// Value out of allowed range
    #[error("{field} value {value} is out of range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl ValidationError {
    /// Field the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::MissingField(field)
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NonFinite { field }
            | ValidationError::OutOfRange { field, .. } => field,
        }
    }
}
