//! # Derating Factors
//!
//! Capacity derating for transformers operated away from standard reference
//! conditions.
//!
//! ## Overview
//!
//! The nameplate kVA applies at the reference conditions of IEC 60076-2.
//! Outside them, available capacity is the nameplate rating multiplied by
//! every applicable factor:
//!
//! ```text
//! S' = S × k_θ × k_h × k_H
//! ```
//!
//! ## Factor Summary
//!
//! | Factor | Description        | Applies when            | Typical Values |
//! |--------|--------------------|-------------------------|----------------|
//! | k_θ    | Ambient temperature| ambient > 40 °C         | 0.5 - 1.0      |
//! | k_h    | Altitude           | altitude > 1000 m       | 0.5 - 1.0      |
//! | k_H    | Harmonic loading   | non-linear loads present| 0.85           |
//!
//! A factor that does not apply is absent (`None`), never `Some(1.0)`.
//! Conditions better than reference (cold ambient, sea level) do not uprate.
//!
//! ## Reference
//!
//! IEC 60076-2:2011 Clause 6.3 (temperature and altitude corrections),
//! IEEE C57.110-2018 (non-sinusoidal load currents)

use serde::{Deserialize, Serialize};

// ============================================================================
// Code Section References
// ============================================================================

/// Standard clause references for derating factors.
pub mod iec_ref {
    /// Ambient temperature correction
    pub const TEMPERATURE: &str = "IEC 60076-2 6.3";
    /// Altitude correction
    pub const ALTITUDE: &str = "IEC 60076-2 6.3";
    /// Harmonic (K-factor) derating
    pub const HARMONICS: &str = "IEEE C57.110";
}

// ============================================================================
// Reference Conditions
// ============================================================================

/// Reference maximum ambient temperature (°C)
pub const REFERENCE_AMBIENT_C: f64 = 40.0;

/// Reference maximum installation altitude (m)
pub const REFERENCE_ALTITUDE_M: f64 = 1000.0;

/// Capacity reduction per °C above reference ambient
pub const TEMPERATURE_DERATING_PER_C: f64 = 0.01;

/// Capacity reduction per 100 m above reference altitude
pub const ALTITUDE_DERATING_PER_100M: f64 = 0.004;

/// Derating applied for harmonic-rich loads (roughly a K-4 load on a
/// standard transformer)
pub const HARMONIC_DERATING: f64 = 0.85;

/// Lowest factor reported; beyond this the unit is unsuitable, not derated
pub const MINIMUM_DERATING: f64 = 0.5;

/// Derating factors that apply to one operating point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeratingFactors {
    /// Ambient temperature factor k_θ
    pub temperature: Option<f64>,
    /// Altitude factor k_h
    pub altitude: Option<f64>,
    /// Harmonic loading factor k_H
    pub harmonic: Option<f64>,
}

impl DeratingFactors {
    /// Evaluate all factors for the given site conditions
    pub fn for_conditions(ambient_temp_c: f64, altitude_m: f64, harmonics: bool) -> Self {
        Self {
            temperature: temperature_derating(ambient_temp_c),
            altitude: altitude_derating(altitude_m),
            harmonic: harmonic_derating(harmonics),
        }
    }

    /// Product of all applicable factors (1.0 when none apply)
    pub fn combined(&self) -> f64 {
        [self.temperature, self.altitude, self.harmonic]
            .iter()
            .flatten()
            .product()
    }

    /// True if any factor applies
    pub fn any(&self) -> bool {
        self.temperature.is_some() || self.altitude.is_some() || self.harmonic.is_some()
    }
}

/// A factor that rounds to 1.0 is no reduction at all
fn reduction(factor: f64) -> Option<f64> {
    (factor < 1.0).then_some(factor)
}

/// Ambient temperature derating, present only above 40 °C
///
/// k_θ = 1 - 0.01 × (θ - 40), floored at 0.5
pub fn temperature_derating(ambient_temp_c: f64) -> Option<f64> {
    if ambient_temp_c <= REFERENCE_AMBIENT_C {
        return None;
    }
    let excess = ambient_temp_c - REFERENCE_AMBIENT_C;
    reduction((1.0 - TEMPERATURE_DERATING_PER_C * excess).max(MINIMUM_DERATING))
}

/// Altitude derating, present only above 1000 m
///
/// k_h = 1 - 0.004 × (h - 1000) / 100, floored at 0.5
pub fn altitude_derating(altitude_m: f64) -> Option<f64> {
    if altitude_m <= REFERENCE_ALTITUDE_M {
        return None;
    }
    let excess_hundreds = (altitude_m - REFERENCE_ALTITUDE_M) / 100.0;
    reduction((1.0 - ALTITUDE_DERATING_PER_100M * excess_hundreds).max(MINIMUM_DERATING))
}

/// Harmonic derating, present only when non-linear loading is declared
pub fn harmonic_derating(harmonics: bool) -> Option<f64> {
    harmonics.then_some(HARMONIC_DERATING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_conditions_have_no_factors() {
        let factors = DeratingFactors::for_conditions(40.0, 1000.0, false);
        assert_eq!(factors, DeratingFactors::default());
        assert!(!factors.any());
        assert_eq!(factors.combined(), 1.0);
    }

    #[test]
    fn test_cold_ambient_does_not_uprate() {
        assert_eq!(temperature_derating(20.0), None);
    }

    #[test]
    fn test_temperature_derating() {
        // 50 °C: 10 °C over reference
        let k = temperature_derating(50.0).unwrap();
        assert!((k - 0.90).abs() < 1e-12);
    }

    #[test]
    fn test_temperature_derating_floor() {
        assert_eq!(temperature_derating(150.0), Some(MINIMUM_DERATING));
    }

    #[test]
    fn test_altitude_derating() {
        // 2000 m: 10 × 0.4 % = 4 %
        let k = altitude_derating(2000.0).unwrap();
        assert!((k - 0.96).abs() < 1e-12);
        assert_eq!(altitude_derating(999.0), None);
    }

    #[test]
    fn test_altitude_just_above_reference_is_not_neutral() {
        let next_up = f64::from_bits(REFERENCE_ALTITUDE_M.to_bits() + 1);
        assert!(next_up > REFERENCE_ALTITUDE_M);
        assert_eq!(altitude_derating(next_up), None);
        assert_eq!(altitude_derating(1000.000_000_000_1), None);
    }

    #[test]
    fn test_factors_never_neutral() {
        for step in 1..=64u64 {
            let temp = f64::from_bits(REFERENCE_AMBIENT_C.to_bits() + step);
            let alt = f64::from_bits(REFERENCE_ALTITUDE_M.to_bits() + step);
            assert_ne!(temperature_derating(temp), Some(1.0));
            assert_ne!(altitude_derating(alt), Some(1.0));
        }
    }

    #[test]
    fn test_combined_factors() {
        let factors = DeratingFactors::for_conditions(50.0, 2000.0, true);
        assert!(factors.any());
        assert!((factors.combined() - 0.90 * 0.96 * 0.85).abs() < 1e-12);
    }
}
