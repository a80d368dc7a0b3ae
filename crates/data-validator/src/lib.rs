//! Reading Validation
//!
//! Parses the three segment measurements from user-entered text and
//! checks them against their documented domains. Only validated readings
//! are handed to the inference pipeline.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ReadingForm, ValidationConfig, ValidationResult, Validator, INVALID_INPUT_MESSAGE};
