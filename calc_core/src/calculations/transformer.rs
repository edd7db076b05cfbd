//! # Transformer Calculation
//!
//! Derives rated currents, power, losses, fault level, regulation, inrush and
//! derating for a two-winding transformer from its nameplate and site data.
//!
//! ## Assumptions
//!
//! - Full rated load at the given power factor
//! - Impedance referred to the secondary winding; source and transformer
//!   impedances added as magnitudes
//! - Losses, inrush and regulation are engineering estimates (see
//!   [`crate::equations::registry::Equation::approximations`])
//! - The vector group only influences advisory text
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use calc_core::calculations::transformer::{calculate, Phase, TransformerInput, TransformerType};
//!
//! let input = TransformerInput {
//!     primary_voltage: 11_000.0,
//!     secondary_voltage: 400.0,
//!     kva_rating: 500.0,
//!     power_factor: 0.85,
//!     phase: Phase::Three,
//!     percent_impedance: 6.0,
//!     ..TransformerInput::default()
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! assert_eq!(result.transformer_type, TransformerType::StepDown);
//! assert!((result.voltage_ratio - 27.5).abs() < 1e-9);
//! assert!((result.secondary_rated_current - 721.7).abs() < 0.1);
//! assert!((result.kw - 425.0).abs() < 1e-9);
//! println!("Fault current: {:.0} A", result.transformer_fault_current);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::advisory;
use crate::derating::DeratingFactors;
use crate::equations::{
    base_impedance, efficiency, impedance_components, inrush_current, reactive_power, real_power,
    single_phase_current, single_phase_fault_current, source_impedance, three_phase_current,
    three_phase_fault_current, total_loss, transformer_impedance, typical_x_over_r,
    voltage_ratio, voltage_regulation, INRUSH_DURATION_S,
};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Kva, Mva, Ohms, VoltAmps};

/// Tolerance for classifying a ratio as exactly 1 (isolation)
pub const ISOLATION_TOLERANCE: f64 = 1e-9;

/// Supply arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Single-phase: I = S / V
    Single,
    /// Three-phase: I = S / (√3 × V)
    #[default]
    Three,
}

impl Phase {
    /// All phase variants for UI selection
    pub const ALL: [Phase; 2] = [Phase::Single, Phase::Three];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Phase::Single => "Single-phase",
            Phase::Three => "Three-phase",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Phase {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "1" | "1ph" | "single-phase" => Ok(Phase::Single),
            "three" | "3" | "3ph" | "three-phase" => Ok(Phase::Three),
            other => Err(CalcError::invalid_input(
                "phase",
                other,
                "Phase must be 'single' or 'three'",
            )),
        }
    }
}

/// Classification of the winding ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformerType {
    /// Primary voltage above secondary (ratio > 1)
    StepDown,
    /// Primary voltage below secondary (ratio < 1)
    StepUp,
    /// Equal voltages (ratio == 1)
    Isolation,
}

impl TransformerType {
    /// Classify a voltage ratio. Every positive ratio maps to exactly one type.
    pub fn classify(ratio: f64) -> Self {
        if (ratio - 1.0).abs() <= ISOLATION_TOLERANCE {
            TransformerType::Isolation
        } else if ratio > 1.0 {
            TransformerType::StepDown
        } else {
            TransformerType::StepUp
        }
    }

    /// Label used in reports
    pub fn label(&self) -> &'static str {
        match self {
            TransformerType::StepDown => "step-down",
            TransformerType::StepUp => "step-up",
            TransformerType::Isolation => "isolation",
        }
    }
}

impl fmt::Display for TransformerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn default_frequency() -> f64 {
    50.0
}

fn default_ambient_temp() -> f64 {
    40.0
}

fn default_connection_type() -> String {
    "Dyn11".to_string()
}

/// Input parameters for a transformer calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "primary_voltage": 11000.0,
///   "secondary_voltage": 400.0,
///   "kva_rating": 500.0,
///   "power_factor": 0.85,
///   "phase": "three",
///   "frequency": 50.0,
///   "percent_impedance": 6.0,
///   "source_fault_level": 250.0,
///   "ambient_temp": 40.0,
///   "altitude": 0.0,
///   "harmonics": false,
///   "connection_type": "Dyn11"
/// }
/// ```
///
/// `frequency`, `source_fault_level`, `ambient_temp`, `altitude`, `harmonics`
/// and `connection_type` may be omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerInput {
    /// Primary (HV) rated voltage in volts, line-to-line for three-phase
    pub primary_voltage: f64,

    /// Secondary (LV) rated voltage in volts, line-to-line for three-phase
    pub secondary_voltage: f64,

    /// Rated apparent power in kVA
    pub kva_rating: f64,

    /// Load power factor, 0 < pf ≤ 1
    pub power_factor: f64,

    /// Single- or three-phase
    pub phase: Phase,

    /// Supply frequency in Hz
    #[serde(default = "default_frequency")]
    pub frequency: f64,

    /// Nameplate short-circuit impedance in percent (typically 2-10)
    pub percent_impedance: f64,

    /// Upstream fault level in MVA; `None` treats the supply as infinite
    #[serde(default)]
    pub source_fault_level: Option<f64>,

    /// Maximum ambient temperature in °C
    #[serde(default = "default_ambient_temp")]
    pub ambient_temp: f64,

    /// Installation altitude in metres above sea level
    #[serde(default)]
    pub altitude: f64,

    /// Non-linear (harmonic-producing) load present
    #[serde(default)]
    pub harmonics: bool,

    /// Vector group code, e.g. "Dyn11"
    #[serde(default = "default_connection_type")]
    pub connection_type: String,
}

impl Default for TransformerInput {
    /// 11 kV / 400 V 500 kVA Dyn11 distribution transformer at reference conditions
    fn default() -> Self {
        Self {
            primary_voltage: 11_000.0,
            secondary_voltage: 400.0,
            kva_rating: 500.0,
            power_factor: 0.85,
            phase: Phase::Three,
            frequency: default_frequency(),
            percent_impedance: 6.0,
            source_fault_level: None,
            ambient_temp: default_ambient_temp(),
            altitude: 0.0,
            harmonics: false,
            connection_type: default_connection_type(),
        }
    }
}

fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

/// A derived quantity that overflowed or underflowed is reported against the
/// input that drives it
fn require_finite_output(quantity: &str, value: f64, field: &str, input_value: f64) -> CalcResult<()> {
    if value.is_finite() {
        return Ok(());
    }
    Err(CalcError::invalid_input(
        field,
        input_value.to_string(),
        format!("Value is outside the calculable range ({} is not finite)", quantity),
    ))
}

fn require_finite(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(())
}

impl TransformerInput {
    /// Parse an input from JSON
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate input parameters.
    ///
    /// Fields are checked in declaration order; the first failure is returned.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("primary_voltage", self.primary_voltage)?;
        require_positive("secondary_voltage", self.secondary_voltage)?;
        require_positive("kva_rating", self.kva_rating)?;

        if !self.power_factor.is_finite() || self.power_factor <= 0.0 || self.power_factor > 1.0 {
            return Err(CalcError::invalid_input(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor must be greater than 0 and at most 1",
            ));
        }

        require_positive("frequency", self.frequency)?;
        require_positive("percent_impedance", self.percent_impedance)?;

        if let Some(level) = self.source_fault_level {
            require_positive("source_fault_level", level)?;
        }

        require_finite("ambient_temp", self.ambient_temp)?;
        require_finite("altitude", self.altitude)?;
        Ok(())
    }

    /// Derating factors for this input's site conditions
    pub fn derating_factors(&self) -> DeratingFactors {
        DeratingFactors::for_conditions(self.ambient_temp, self.altitude, self.harmonics)
    }
}

/// Results from a transformer calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "voltage_ratio": 27.5,
///   "transformer_type": "step-down",
///   "primary_rated_current": 26.24,
///   "secondary_rated_current": 721.69,
///   "kw": 425.0,
///   "kvar": 263.39,
///   "total_loss": 5.5,
///   "efficiency": 0.9872,
///   "transformer_fault_current": 12028.0,
///   "voltage_regulation": 0.0461,
///   "inrush_current": 262.4,
///   "inrush_duration": 0.1,
///   "warnings": [],
///   "recommendations": ["..."]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformerResult {
    /// Primary / secondary voltage
    pub voltage_ratio: f64,

    /// Step-down, step-up or isolation
    pub transformer_type: TransformerType,

    /// Rated current of the primary winding (A)
    pub primary_rated_current: f64,

    /// Rated current of the secondary winding (A)
    pub secondary_rated_current: f64,

    /// Real power at rated kVA and load power factor (kW)
    pub kw: f64,

    /// Reactive power at rated kVA and load power factor (kVAr)
    pub kvar: f64,

    /// Estimated full-load losses (kW)
    pub total_loss: f64,

    /// Estimated full-load efficiency (0-1)
    pub efficiency: f64,

    /// Prospective fault current at the secondary terminals (A)
    pub transformer_fault_current: f64,

    /// Estimated full-load voltage regulation (fraction)
    pub voltage_regulation: f64,

    /// Estimated peak magnetising inrush (A)
    pub inrush_current: f64,

    /// Typical inrush decay time (s)
    pub inrush_duration: f64,

    /// Ambient temperature factor, present only above 40 °C
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_derating: Option<f64>,

    /// Altitude factor, present only above 1000 m
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude_derating: Option<f64>,

    /// Harmonic factor, present only with non-linear loads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harmonic_derating: Option<f64>,

    /// Triggered warnings, in rule-table order
    pub warnings: Vec<String>,

    /// Advisory recommendations, in rule-table order
    pub recommendations: Vec<String>,
}

impl TransformerResult {
    /// Derating factors carried by this result
    pub fn derating_factors(&self) -> DeratingFactors {
        DeratingFactors {
            temperature: self.temperature_derating,
            altitude: self.altitude_derating,
            harmonic: self.harmonic_derating,
        }
    }

    /// True if no warning rule fired
    pub fn passes(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Calculate transformer electrical parameters.
///
/// Pure and deterministic: no I/O, no shared state. Identical inputs always
/// produce identical results.
///
/// # Arguments
///
/// * `input` - Nameplate and site parameters
///
/// # Returns
///
/// * `Ok(TransformerResult)` - Calculation results
/// * `Err(CalcError::InvalidInput)` - If any field fails validation, or is so
///   extreme that a derived quantity is not finite; no partial result is produced
pub fn calculate(input: &TransformerInput) -> CalcResult<TransformerResult> {
    input.validate()?;

    let vp = input.primary_voltage;
    let vs = input.secondary_voltage;
    let kva = input.kva_rating;
    let pf = input.power_factor;

    let rated_va = VoltAmps::from(Kva(kva));
    require_finite_output("rated VA", rated_va.value(), "kva_rating", kva)?;

    // Ratio and classification
    let ratio = voltage_ratio(vp, vs);
    let transformer_type = TransformerType::classify(ratio);

    // Rated currents
    let (primary_rated_current, secondary_rated_current) = match input.phase {
        Phase::Three => (three_phase_current(kva, vp), three_phase_current(kva, vs)),
        Phase::Single => (single_phase_current(kva, vp), single_phase_current(kva, vs)),
    };

    // Power triangle, losses, efficiency
    let kw = real_power(kva, pf);
    let kvar = reactive_power(kva, pf);
    let loss_kw = total_loss(kva, input.percent_impedance);
    let eff = efficiency(kw, loss_kw);

    // Fault current through transformer (+ source) impedance
    let z_transformer = Ohms(transformer_impedance(base_impedance(vs, kva), input.percent_impedance));
    let z_source = input
        .source_fault_level
        .map(|mva| Ohms(source_impedance(vs, VoltAmps::from(Mva(mva)).value())))
        .unwrap_or_default();
    let z_total = z_transformer + z_source;
    let fault_current = match input.phase {
        Phase::Three => three_phase_fault_current(vs, z_total.value()),
        Phase::Single => single_phase_fault_current(vs, z_total.value()),
    };

    // Regulation from assumed X/R
    let (r_percent, x_percent) = impedance_components(input.percent_impedance, typical_x_over_r(kva));
    let regulation = voltage_regulation(r_percent, x_percent, pf);

    let outputs = [
        ("voltage_ratio", ratio, "secondary_voltage", vs),
        ("primary_rated_current", primary_rated_current, "primary_voltage", vp),
        ("secondary_rated_current", secondary_rated_current, "secondary_voltage", vs),
        ("transformer_fault_current", fault_current, "secondary_voltage", vs),
        ("inrush_current", inrush_current(primary_rated_current), "primary_voltage", vp),
        ("total_loss", loss_kw, "kva_rating", kva),
        ("efficiency", eff, "kva_rating", kva),
        ("voltage_regulation", regulation, "percent_impedance", input.percent_impedance),
    ];
    for (quantity, value, field, input_value) in outputs {
        require_finite_output(quantity, value, field, input_value)?;
    }

    let derating = input.derating_factors();

    let mut result = TransformerResult {
        voltage_ratio: ratio,
        transformer_type,
        primary_rated_current,
        secondary_rated_current,
        kw,
        kvar,
        total_loss: loss_kw,
        efficiency: eff,
        transformer_fault_current: fault_current,
        voltage_regulation: regulation,
        inrush_current: inrush_current(primary_rated_current),
        inrush_duration: INRUSH_DURATION_S,
        temperature_derating: derating.temperature,
        altitude_derating: derating.altitude,
        harmonic_derating: derating.harmonic,
        warnings: Vec::new(),
        recommendations: Vec::new(),
    };

    result.warnings = advisory::warnings(input, &result);
    result.recommendations = advisory::recommendations(input, &result);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution_500() -> TransformerInput {
        TransformerInput {
            primary_voltage: 11_000.0,
            secondary_voltage: 400.0,
            kva_rating: 500.0,
            power_factor: 0.85,
            phase: Phase::Three,
            percent_impedance: 6.0,
            ..TransformerInput::default()
        }
    }

    fn site_transformer() -> TransformerInput {
        TransformerInput {
            primary_voltage: 230.0,
            secondary_voltage: 110.0,
            kva_rating: 5.0,
            power_factor: 0.9,
            phase: Phase::Single,
            percent_impedance: 4.0,
            connection_type: "Ii0".to_string(),
            ..TransformerInput::default()
        }
    }

    #[test]
    fn test_distribution_scenario() {
        let result = calculate(&distribution_500()).unwrap();

        assert!((result.voltage_ratio - 27.5).abs() < 1e-9);
        assert_eq!(result.transformer_type, TransformerType::StepDown);
        // 500000 / (1.732 * 400) = 721.7 A
        assert!((result.secondary_rated_current - 721.7).abs() < 0.1);
        // 500000 / (1.732 * 11000) = 26.24 A
        assert!((result.primary_rated_current - 26.24).abs() < 0.01);
        assert!((result.kw - 425.0).abs() < 1e-9);
        assert!((result.kvar - 263.39).abs() < 0.01);
    }

    #[test]
    fn test_distribution_fault_and_losses() {
        let result = calculate(&distribution_500()).unwrap();

        // Zt = 0.32 * 0.06 = 0.0192 Ω; Isc = 400 / (1.732 * 0.0192)
        assert!((result.transformer_fault_current - 12_028.0).abs() < 1.0);
        assert!((result.total_loss - 5.5).abs() < 1e-9);
        // 425 / 430.5
        assert!((result.efficiency - 0.98722).abs() < 1e-4);
        assert!((result.voltage_regulation - 0.0461).abs() < 0.001);
        assert!((result.inrush_current - 262.4).abs() < 0.1);
        assert_eq!(result.inrush_duration, 0.1);
    }

    #[test]
    fn test_reference_conditions_have_no_warnings() {
        let result = calculate(&distribution_500()).unwrap();
        assert!(result.passes(), "unexpected warnings: {:?}", result.warnings);
        assert_eq!(result.temperature_derating, None);
        assert_eq!(result.altitude_derating, None);
        assert_eq!(result.harmonic_derating, None);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_single_phase_scenario() {
        let result = calculate(&site_transformer()).unwrap();
        // 5000 / 110
        assert!((result.secondary_rated_current - 45.45).abs() < 0.01);
        // 5000 / 230
        assert!((result.primary_rated_current - 21.74).abs() < 0.01);
        assert_eq!(result.transformer_type, TransformerType::StepDown);

        // Zbase = 110² / 5000 = 2.42 Ω, Zt = 0.0968 Ω, Isc = 110 / 0.0968
        assert!((result.transformer_fault_current - 1136.4).abs() < 0.1);
    }

    #[test]
    fn test_step_up_and_isolation() {
        let mut input = distribution_500();
        input.primary_voltage = 400.0;
        input.secondary_voltage = 11_000.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.transformer_type, TransformerType::StepUp);
        assert!(result.voltage_ratio < 1.0);

        input.secondary_voltage = 400.0;
        let result = calculate(&input).unwrap();
        assert_eq!(result.transformer_type, TransformerType::Isolation);
    }

    #[test]
    fn test_classify_partition() {
        assert_eq!(TransformerType::classify(1.0), TransformerType::Isolation);
        assert_eq!(TransformerType::classify(1.0 + 1e-12), TransformerType::Isolation);
        assert_eq!(TransformerType::classify(1.001), TransformerType::StepDown);
        assert_eq!(TransformerType::classify(0.999), TransformerType::StepUp);
    }

    #[test]
    fn test_source_fault_level_reduces_fault_current() {
        let infinite = calculate(&distribution_500()).unwrap();

        let mut input = distribution_500();
        input.source_fault_level = Some(250.0);
        let finite = calculate(&input).unwrap();

        // Zs = 400² / 250e6 = 0.00064 Ω; Isc = 400 / (1.732 * 0.01984)
        assert!(finite.transformer_fault_current < infinite.transformer_fault_current);
        assert!((finite.transformer_fault_current - 11_640.0).abs() < 1.0);
    }

    #[test]
    fn test_derating_presence() {
        let mut input = distribution_500();
        input.ambient_temp = 50.0;
        input.altitude = 2000.0;
        input.harmonics = true;
        let result = calculate(&input).unwrap();

        assert!((result.temperature_derating.unwrap() - 0.90).abs() < 1e-12);
        assert!((result.altitude_derating.unwrap() - 0.96).abs() < 1e-12);
        assert_eq!(result.harmonic_derating, Some(0.85));
        assert!(result.derating_factors().any());
    }

    #[test]
    fn test_invalid_primary_voltage() {
        let mut input = distribution_500();
        input.primary_voltage = -1.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("primary_voltage"));
    }

    #[test]
    fn test_invalid_inputs_name_their_field() {
        let cases: [(&str, fn(&mut TransformerInput)); 9] = [
            ("secondary_voltage", |i| i.secondary_voltage = 0.0),
            ("kva_rating", |i| i.kva_rating = f64::NAN),
            ("power_factor", |i| i.power_factor = 1.01),
            ("power_factor", |i| i.power_factor = 0.0),
            ("frequency", |i| i.frequency = 0.0),
            ("percent_impedance", |i| i.percent_impedance = -6.0),
            ("source_fault_level", |i| i.source_fault_level = Some(0.0)),
            ("ambient_temp", |i| i.ambient_temp = f64::INFINITY),
            ("altitude", |i| i.altitude = f64::NAN),
        ];

        for (field, mutate) in cases {
            let mut input = distribution_500();
            mutate(&mut input);
            let err = calculate(&input).unwrap_err();
            assert_eq!(err.field(), Some(field));
        }
    }

    #[test]
    fn test_tiny_secondary_voltage_rejected() {
        // Vs² underflows, Zt = 0, fault current would be infinite
        let mut input = distribution_500();
        input.secondary_voltage = 1e-160;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(err.field(), Some("secondary_voltage"));
    }

    #[test]
    fn test_huge_rating_rejected() {
        let mut input = distribution_500();
        input.kva_rating = 1e306;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.field(), Some("kva_rating"));
    }

    #[test]
    fn test_extreme_but_finite_inputs_serialize_as_numbers() {
        let mut input = distribution_500();
        input.kva_rating = 1e12;
        input.secondary_voltage = 1e-3;
        let result = calculate(&input).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("null"), "{json}");
    }

    #[test]
    fn test_unity_power_factor_is_valid() {
        let mut input = distribution_500();
        input.power_factor = 1.0;
        let result = calculate(&input).unwrap();
        assert!(result.kvar.abs() < 1e-9);
        assert!((result.kw - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_phase_from_str() {
        assert_eq!("three".parse::<Phase>().unwrap(), Phase::Three);
        assert_eq!(" 1 ".parse::<Phase>().unwrap(), Phase::Single);
        assert_eq!("Single-Phase".parse::<Phase>().unwrap(), Phase::Single);
        assert!("two".parse::<Phase>().is_err());
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{
            "primary_voltage": 11000,
            "secondary_voltage": 400,
            "kva_rating": 500,
            "power_factor": 0.85,
            "phase": "three",
            "percent_impedance": 6
        }"#;
        let input = TransformerInput::from_json(json).unwrap();
        assert_eq!(input, distribution_500());
    }

    #[test]
    fn test_json_errors_are_serialization_errors() {
        let err = TransformerInput::from_json("{\"primary_voltage\": 1}").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_result_omits_absent_derating() {
        let result = calculate(&distribution_500()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"transformer_type\":\"step-down\""));
        assert!(!json.contains("altitude_derating"));
    }
}
