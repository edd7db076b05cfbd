//! # Compliance Classification
//!
//! Lookups layered on a [`TransformerResult`]: an overall status from the
//! warning count, the smallest standard protective device for the secondary
//! and the minimum breaking capacity for the prospective fault current.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::compliance::{
//!     recommended_breaking_capacity, recommended_device_rating, BreakingCapacity,
//! };
//!
//! // 721.7 A × 1.25 = 902 A → 1000 A device
//! assert_eq!(recommended_device_rating(721.7).unwrap(), 1000);
//! assert_eq!(recommended_breaking_capacity(12_028.0), BreakingCapacity::Ka16);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculations::transformer::TransformerResult;
use crate::errors::{CalcError, CalcResult};
use crate::presets::STANDARD_DEVICE_RATINGS;
use crate::units::{Amps, Kiloamps};

/// Protective device rating must be at least this multiple of rated current
pub const DEVICE_SIZING_FACTOR: f64 = 1.25;

/// Overall verdict derived from the number of warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// No warnings
    Compliant,
    /// Exactly one warning
    Caution,
    /// Two or more warnings
    Review,
}

impl ComplianceStatus {
    /// Classify a warning count
    pub fn from_warning_count(count: usize) -> Self {
        match count {
            0 => ComplianceStatus::Compliant,
            1 => ComplianceStatus::Caution,
            _ => ComplianceStatus::Review,
        }
    }

    /// Display name for reports
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "Compliant",
            ComplianceStatus::Caution => "Caution",
            ComplianceStatus::Review => "Review required",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Status for a calculation result
pub fn compliance_status(result: &TransformerResult) -> ComplianceStatus {
    ComplianceStatus::from_warning_count(result.warnings.len())
}

/// Smallest standard device rating (A) not less than 1.25 × `secondary_current`.
///
/// # Errors
///
/// * `CalcError::OutOfStandardRange` - if the requirement exceeds the largest
///   standard rating
/// * `CalcError::InvalidInput` - if the current is negative or not finite
pub fn recommended_device_rating(secondary_current: f64) -> CalcResult<u32> {
    if !secondary_current.is_finite() || secondary_current < 0.0 {
        return Err(CalcError::invalid_input(
            "secondary_current",
            secondary_current.to_string(),
            "Current must be a finite, non-negative number",
        ));
    }

    let required = secondary_current * DEVICE_SIZING_FACTOR;
    STANDARD_DEVICE_RATINGS
        .iter()
        .copied()
        .find(|&rating| f64::from(rating) >= required)
        .ok_or_else(|| {
            let max = STANDARD_DEVICE_RATINGS[STANDARD_DEVICE_RATINGS.len() - 1];
            CalcError::out_of_standard_range(
                "protective_device_rating",
                format!("{:.1} A", required),
                format!("{} A", max),
            )
        })
}

/// Standard breaking capacity classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BreakingCapacity {
    #[serde(rename = "6kA")]
    Ka6,
    #[serde(rename = "10kA")]
    Ka10,
    #[serde(rename = "16kA")]
    Ka16,
    #[serde(rename = "25kA")]
    Ka25,
    #[serde(rename = "36kA")]
    Ka36,
    #[serde(rename = "50kA")]
    Ka50,
    #[serde(rename = "65kA")]
    Ka65,
    #[serde(rename = "80kA")]
    Ka80,
    /// Beyond standard switchgear; needs a specialist design
    #[serde(rename = "specialist")]
    Specialist,
}

impl BreakingCapacity {
    /// Standard classes in ascending order, excluding `Specialist`
    pub const STANDARD: [BreakingCapacity; 8] = [
        BreakingCapacity::Ka6,
        BreakingCapacity::Ka10,
        BreakingCapacity::Ka16,
        BreakingCapacity::Ka25,
        BreakingCapacity::Ka36,
        BreakingCapacity::Ka50,
        BreakingCapacity::Ka65,
        BreakingCapacity::Ka80,
    ];

    /// Rated breaking capacity, `None` for `Specialist`
    pub fn rating(&self) -> Option<Kiloamps> {
        let ka = match self {
            BreakingCapacity::Ka6 => 6.0,
            BreakingCapacity::Ka10 => 10.0,
            BreakingCapacity::Ka16 => 16.0,
            BreakingCapacity::Ka25 => 25.0,
            BreakingCapacity::Ka36 => 36.0,
            BreakingCapacity::Ka50 => 50.0,
            BreakingCapacity::Ka65 => 65.0,
            BreakingCapacity::Ka80 => 80.0,
            BreakingCapacity::Specialist => return None,
        };
        Some(Kiloamps(ka))
    }
}

impl fmt::Display for BreakingCapacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rating() {
            Some(ka) => write!(f, "{} kA", ka.value()),
            None => write!(f, "Specialist (>80 kA)"),
        }
    }
}

/// Minimum breaking capacity for a prospective fault current (A).
///
/// Bounds are inclusive: exactly 10 kA selects the 10 kA class.
pub fn recommended_breaking_capacity(fault_current: f64) -> BreakingCapacity {
    let fault: Kiloamps = Amps(fault_current).into();
    BreakingCapacity::STANDARD
        .into_iter()
        .find(|class| class.rating().is_some_and(|rating| fault <= rating))
        .unwrap_or(BreakingCapacity::Specialist)
}

/// Device recommendation, with the out-of-range case as a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amps", rename_all = "snake_case")]
pub enum DeviceSelection {
    /// A standard rating in amps
    Standard(u32),
    /// Above the largest standard rating
    ExceedsStandardRange,
}

impl fmt::Display for DeviceSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceSelection::Standard(amps) => write!(f, "{} A", amps),
            DeviceSelection::ExceedsStandardRange => write!(f, "Exceeds standard range"),
        }
    }
}

/// Status plus equipment recommendations for one result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub status: ComplianceStatus,
    pub protective_device: DeviceSelection,
    pub breaking_capacity: BreakingCapacity,
}

impl ComplianceReport {
    /// Build a report from a calculation result
    pub fn from_result(result: &TransformerResult) -> Self {
        let protective_device = match recommended_device_rating(result.secondary_rated_current) {
            Ok(amps) => DeviceSelection::Standard(amps),
            Err(_) => DeviceSelection::ExceedsStandardRange,
        };

        Self {
            status: compliance_status(result),
            protective_device,
            breaking_capacity: recommended_breaking_capacity(result.transformer_fault_current),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::transformer::{calculate, Phase, TransformerInput};

    #[test]
    fn test_status_from_warning_count() {
        assert_eq!(ComplianceStatus::from_warning_count(0), ComplianceStatus::Compliant);
        assert_eq!(ComplianceStatus::from_warning_count(1), ComplianceStatus::Caution);
        assert_eq!(ComplianceStatus::from_warning_count(2), ComplianceStatus::Review);
        assert_eq!(ComplianceStatus::from_warning_count(7), ComplianceStatus::Review);
    }

    #[test]
    fn test_device_rating_scenarios() {
        assert_eq!(recommended_device_rating(721.7).unwrap(), 1000);
        assert_eq!(recommended_device_rating(45.45).unwrap(), 63);
        assert_eq!(recommended_device_rating(0.0).unwrap(), 6);
    }

    #[test]
    fn test_device_rating_exact_boundary() {
        // 800 / 1.25 = 640
        assert_eq!(recommended_device_rating(640.0).unwrap(), 800);
    }

    #[test]
    fn test_device_rating_out_of_range() {
        let err = recommended_device_rating(6000.0).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_STANDARD_RANGE");
        assert!(recommended_device_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_breaking_capacity_bounds() {
        assert_eq!(recommended_breaking_capacity(0.0), BreakingCapacity::Ka6);
        assert_eq!(recommended_breaking_capacity(6_000.0), BreakingCapacity::Ka6);
        assert_eq!(recommended_breaking_capacity(6_000.1), BreakingCapacity::Ka10);
        assert_eq!(recommended_breaking_capacity(10_000.0), BreakingCapacity::Ka10);
        assert_eq!(recommended_breaking_capacity(12_028.0), BreakingCapacity::Ka16);
        assert_eq!(recommended_breaking_capacity(36_000.0), BreakingCapacity::Ka36);
        assert_eq!(recommended_breaking_capacity(80_000.0), BreakingCapacity::Ka80);
        assert_eq!(recommended_breaking_capacity(80_001.0), BreakingCapacity::Specialist);
    }

    #[test]
    fn test_breaking_capacity_display() {
        assert_eq!(BreakingCapacity::Ka25.to_string(), "25 kA");
        assert_eq!(BreakingCapacity::Specialist.rating(), None);
    }

    #[test]
    fn test_report_for_distribution_transformer() {
        let result = calculate(&TransformerInput::default()).unwrap();
        let report = ComplianceReport::from_result(&result);
        assert_eq!(report.status, ComplianceStatus::Compliant);
        assert_eq!(report.protective_device, DeviceSelection::Standard(1000));
        assert_eq!(report.breaking_capacity, BreakingCapacity::Ka16);
    }

    #[test]
    fn test_report_exceeds_standard_range() {
        // 5000 kVA at 400 V: ~7217 A secondary
        let input = TransformerInput {
            kva_rating: 5000.0,
            phase: Phase::Three,
            ..TransformerInput::default()
        };
        let result = calculate(&input).unwrap();
        let report = ComplianceReport::from_result(&result);
        assert_eq!(report.protective_device, DeviceSelection::ExceedsStandardRange);
        assert_eq!(report.protective_device.to_string(), "Exceeds standard range");
        assert_eq!(report.breaking_capacity, BreakingCapacity::Specialist);
        // very high fault current warning
        assert_ne!(report.status, ComplianceStatus::Compliant);
    }

    #[test]
    fn test_report_serializes() {
        let result = calculate(&TransformerInput::default()).unwrap();
        let json = serde_json::to_string(&ComplianceReport::from_result(&result)).unwrap();
        assert!(json.contains("\"status\":\"compliant\""));
        assert!(json.contains("\"breaking_capacity\":\"16kA\""));
    }
}
