//! Reading Validator for Text Input

use crate::error::ValidationError;
use membership::{Reading, Variable};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

/// Message shown when any field fails validation
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid numeric values for all fields.";

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Voltage deviation valid range
    pub voltage_range: (f64, f64),
    /// Frequency variation valid range
    pub frequency_range: (f64, f64),
    /// Load imbalance valid range
    pub load_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            voltage_range: Variable::Voltage.domain(),
            frequency_range: Variable::Frequency.domain(),
            load_range: Variable::Load.domain(),
        }
    }
}

impl ValidationConfig {
    /// Valid range for a variable
    pub fn range(&self, variable: Variable) -> (f64, f64) {
        match variable {
            Variable::Voltage => self.voltage_range,
            Variable::Frequency => self.frequency_range,
            Variable::Load => self.load_range,
        }
    }
}

/// A reading as entered by a user, one text field per measurement.
///
/// When deserialized, each field may be given as text or as a number;
/// `null` counts as a missing field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingForm {
    #[serde(default, deserialize_with = "text_or_number")]
    pub voltage: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub frequency: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub load: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FieldInput {
    Text(String),
    Number(f64),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FieldInput>::deserialize(deserializer)? {
        Some(FieldInput::Text(text)) => text,
        Some(FieldInput::Number(value)) => value.to_string(),
        None => String::new(),
    })
}

impl ReadingForm {
    /// Create a form from its three fields
    pub fn new(voltage: impl Into<String>, frequency: impl Into<String>, load: impl Into<String>) -> Self {
        Self {
            voltage: voltage.into(),
            frequency: frequency.into(),
            load: load.into(),
        }
    }

    /// Text entered for a variable
    pub fn field(&self, variable: Variable) -> &str {
        match variable {
            Variable::Voltage => &self.voltage,
            Variable::Frequency => &self.frequency,
            Variable::Load => &self.load,
        }
    }
}

/// Result of validating a whole form
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether all values are valid
    pub valid: bool,
    /// List of validation errors
    pub errors: Vec<ValidationError>,
    /// Number of fields validated
    pub fields_checked: usize,
}

impl ValidationResult {
    /// Create a valid result
    pub fn valid(fields_checked: usize) -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            fields_checked,
        }
    }

    /// Create an invalid result with errors
    pub fn invalid(errors: Vec<ValidationError>, fields_checked: usize) -> Self {
        Self {
            valid: false,
            errors,
            fields_checked,
        }
    }
}

/// Validator for segment readings entered as text
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Get the active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::NonFinite { field });
        }
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Parse one field's text into a checked value
    pub fn parse_field(
        &self,
        field: &'static str,
        text: &str,
        range: (f64, f64),
    ) -> Result<f64, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
        let value: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
            field,
            input: text.to_string(),
        })?;
        self.validate_range(field, value, range)?;
        Ok(value)
    }

    /// Parse the text entered for a variable
    pub fn parse_variable(&self, variable: Variable, text: &str) -> Result<f64, ValidationError> {
        self.parse_field(variable.as_str(), text, self.config.range(variable))
    }

    /// Parse voltage deviation
    pub fn parse_voltage(&self, text: &str) -> Result<f64, ValidationError> {
        self.parse_variable(Variable::Voltage, text)
    }

    /// Parse frequency variation
    pub fn parse_frequency(&self, text: &str) -> Result<f64, ValidationError> {
        self.parse_variable(Variable::Frequency, text)
    }

    /// Parse load imbalance
    pub fn parse_load(&self, text: &str) -> Result<f64, ValidationError> {
        self.parse_variable(Variable::Load, text)
    }

    /// Whether a field may hold this text while it is being edited.
    ///
    /// Blank text is accepted so a field can be cleared; anything else must
    /// already be a number inside the range.
    pub fn accepts_keystroke(&self, text: &str, range: (f64, f64)) -> bool {
        if text.trim().is_empty() {
            return true;
        }
        match text.trim().parse::<f64>() {
            Ok(value) => (range.0..=range.1).contains(&value),
            Err(_) => false,
        }
    }

    /// Validate every field of a form, collecting all errors
    pub fn check_form(&self, form: &ReadingForm) -> ValidationResult {
        let errors: Vec<ValidationError> = Variable::ALL
            .iter()
            .filter_map(|v| self.parse_variable(*v, form.field(*v)).err())
            .collect();

        if errors.is_empty() {
            ValidationResult::valid(Variable::ALL.len())
        } else {
            ValidationResult::invalid(errors, Variable::ALL.len())
        }
    }

    /// Parse a whole form into a reading.
    ///
    /// On failure every field error is reported, never a partial reading.
    pub fn parse_form(&self, form: &ReadingForm) -> Result<Reading, ValidationResult> {
        let voltage = self.parse_voltage(&form.voltage);
        let frequency = self.parse_frequency(&form.frequency);
        let load = self.parse_load(&form.load);

        match (voltage, frequency, load) {
            (Ok(voltage), Ok(frequency), Ok(load)) => Ok(Reading::new(voltage, frequency, load)),
            (voltage, frequency, load) => {
                let errors: Vec<ValidationError> = [voltage, frequency, load]
                    .into_iter()
                    .filter_map(Result::err)
                    .collect();
                debug!("Rejected reading form: {} invalid field(s)", errors.len());
                Err(ValidationResult::invalid(errors, Variable::ALL.len()))
            }
        }
    }
}
