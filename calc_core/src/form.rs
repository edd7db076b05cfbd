//! # Form Parsing
//!
//! A front end holds transformer fields as text while the user types.
//! [`TransformerForm`] is that text-typed form; [`TransformerForm::parse`]
//! turns it into a [`TransformerInput`] once, at the boundary, so the engine
//! only ever sees numbers.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::form::TransformerForm;
//!
//! let form = TransformerForm {
//!     primary_voltage: "11000".into(),
//!     secondary_voltage: "400".into(),
//!     kva_rating: "500".into(),
//!     power_factor: "0.85".into(),
//!     phase: "three".into(),
//!     percent_impedance: "6".into(),
//!     ..TransformerForm::default()
//! };
//!
//! let input = form.parse().unwrap();
//! assert_eq!(input.frequency, 50.0);
//! assert_eq!(input.source_fault_level, None);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::transformer::{Phase, TransformerInput};
use crate::errors::{CalcError, CalcResult};

/// Transformer fields as entered, before parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformerForm {
    pub primary_voltage: String,
    pub secondary_voltage: String,
    pub kva_rating: String,
    pub power_factor: String,
    pub phase: String,
    /// Blank → 50 Hz
    pub frequency: String,
    pub percent_impedance: String,
    /// Blank → infinite source
    pub source_fault_level: String,
    /// Blank → 40 °C
    pub ambient_temp: String,
    /// Blank → 0 m
    pub altitude: String,
    /// "yes" / "true" / "1" (any case) → non-linear load
    pub harmonics: String,
    /// Blank → Dyn11
    pub connection_type: String,
}

fn required_number(field: &str, text: &str) -> CalcResult<f64> {
    optional_number(field, text)?.ok_or_else(|| CalcError::missing_field(field))
}

fn optional_number(field: &str, text: &str) -> CalcResult<Option<f64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CalcError::invalid_input(field, trimmed, "Value must be a number"))
}

fn parse_flag(text: &str) -> bool {
    matches!(text.trim().to_ascii_lowercase().as_str(), "yes" | "y" | "true" | "1" | "on")
}

impl TransformerForm {
    /// Populate a form from an existing input, e.g. a preset
    pub fn from_input(input: &TransformerInput) -> Self {
        Self {
            primary_voltage: input.primary_voltage.to_string(),
            secondary_voltage: input.secondary_voltage.to_string(),
            kva_rating: input.kva_rating.to_string(),
            power_factor: input.power_factor.to_string(),
            phase: match input.phase {
                Phase::Single => "single".to_string(),
                Phase::Three => "three".to_string(),
            },
            frequency: input.frequency.to_string(),
            percent_impedance: input.percent_impedance.to_string(),
            source_fault_level: input.source_fault_level.map(|v| v.to_string()).unwrap_or_default(),
            ambient_temp: input.ambient_temp.to_string(),
            altitude: input.altitude.to_string(),
            harmonics: if input.harmonics { "yes" } else { "no" }.to_string(),
            connection_type: input.connection_type.clone(),
        }
    }

    /// Parse the form into a validated input.
    ///
    /// # Errors
    ///
    /// * `CalcError::MissingField` - a required field is blank
    /// * `CalcError::InvalidInput` - a field is not a number, or the parsed
    ///   input fails [`TransformerInput::validate`]
    pub fn parse(&self) -> CalcResult<TransformerInput> {
        let defaults = TransformerInput::default();

        let phase_text = self.phase.trim();
        if phase_text.is_empty() {
            return Err(CalcError::missing_field("phase"));
        }

        let connection_type = match self.connection_type.trim() {
            "" => defaults.connection_type,
            code => code.to_string(),
        };

        let input = TransformerInput {
            primary_voltage: required_number("primary_voltage", &self.primary_voltage)?,
            secondary_voltage: required_number("secondary_voltage", &self.secondary_voltage)?,
            kva_rating: required_number("kva_rating", &self.kva_rating)?,
            power_factor: required_number("power_factor", &self.power_factor)?,
            phase: phase_text.parse()?,
            frequency: optional_number("frequency", &self.frequency)?.unwrap_or(defaults.frequency),
            percent_impedance: required_number("percent_impedance", &self.percent_impedance)?,
            source_fault_level: optional_number("source_fault_level", &self.source_fault_level)?,
            ambient_temp: optional_number("ambient_temp", &self.ambient_temp)?.unwrap_or(defaults.ambient_temp),
            altitude: optional_number("altitude", &self.altitude)?.unwrap_or(defaults.altitude),
            harmonics: parse_flag(&self.harmonics),
            connection_type,
        };

        input.validate()?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TransformerForm {
        TransformerForm {
            primary_voltage: "11000".into(),
            secondary_voltage: "400".into(),
            kva_rating: "500".into(),
            power_factor: "0.85".into(),
            phase: "3".into(),
            percent_impedance: " 6 ".into(),
            ..TransformerForm::default()
        }
    }

    #[test]
    fn test_blank_optionals_use_defaults() {
        let input = filled().parse().unwrap();
        assert_eq!(input, TransformerInput::default());
    }

    #[test]
    fn test_missing_required_field() {
        let mut form = filled();
        form.kva_rating = "   ".into();
        let err = form.parse().unwrap_err();
        assert_eq!(err.error_code(), "MISSING_FIELD");
        assert_eq!(err.field(), Some("kva_rating"));

        let mut form = filled();
        form.phase.clear();
        assert_eq!(form.parse().unwrap_err().field(), Some("phase"));
    }

    #[test]
    fn test_non_numeric_field() {
        let mut form = filled();
        form.percent_impedance = "six".into();
        let err = form.parse().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("percent_impedance"));
    }

    #[test]
    fn test_optional_fields_parse() {
        let mut form = filled();
        form.source_fault_level = "250".into();
        form.altitude = "1500".into();
        form.harmonics = "Yes".into();
        form.connection_type = "Yyn0".into();
        let input = form.parse().unwrap();
        assert_eq!(input.source_fault_level, Some(250.0));
        assert_eq!(input.altitude, 1500.0);
        assert!(input.harmonics);
        assert_eq!(input.connection_type, "Yyn0");
    }

    #[test]
    fn test_out_of_range_after_parse() {
        let mut form = filled();
        form.power_factor = "1.2".into();
        assert_eq!(form.parse().unwrap_err().field(), Some("power_factor"));
    }

    #[test]
    fn test_bad_phase() {
        let mut form = filled();
        form.phase = "two".into();
        assert_eq!(form.parse().unwrap_err().field(), Some("phase"));
    }

    #[test]
    fn test_from_input_round_trips() {
        let original = TransformerInput {
            source_fault_level: Some(100.0),
            harmonics: true,
            phase: Phase::Single,
            ..TransformerInput::default()
        };
        let parsed = TransformerForm::from_input(&original).parse().unwrap();
        assert_eq!(parsed, original);
    }
}
