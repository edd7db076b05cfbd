//! # Impedance, Fault Current and Regulation Formulas
//!
//! Per-unit style impedance relations referred to the secondary winding.
//!
//! ## Notation
//!
//! - `Zbase` = Base impedance at the secondary voltage (Ω)
//! - `Z%` = Nameplate percent impedance
//! - `Zt` = Transformer impedance referred to secondary (Ω)
//! - `Zs` = Upstream source impedance referred to secondary (Ω)
//! - `Ssc` = Source fault level (MVA)
//! - `X/R` = Reactance to resistance ratio
//!
//! ## Conventions
//!
//! Impedances are combined as magnitudes (arithmetic sum). This is the usual
//! hand-calculation simplification; it slightly understates the combined
//! impedance when X/R ratios differ, which errs toward a higher fault current.
//!
//! ## References
//!
//! - IEC 60909-0:2016: Short-circuit currents in three-phase AC systems
//! - IEC 60076-5:2006 Table 1: Recommended minimum short-circuit impedance
//! - IEC 60076-1:2011 Annex A: Voltage regulation approximation

use super::SQRT_3;

// =============================================================================
// BASE AND NAMEPLATE IMPEDANCE
// =============================================================================

/// Base impedance of the secondary winding
///
/// # Formula
/// Zbase = V² / (S × 1000)
///
/// # Example
/// ```rust
/// use calc_core::equations::impedance::base_impedance;
///
/// // 400 V, 500 kVA
/// let z = base_impedance(400.0, 500.0);
/// assert!((z - 0.32).abs() < 1e-12);
/// ```
#[inline]
pub fn base_impedance(secondary_voltage: f64, kva: f64) -> f64 {
    secondary_voltage.powi(2) / (kva * 1000.0)
}

/// Transformer impedance in ohms from nameplate percent impedance
///
/// # Formula
/// Zt = Zbase × Z% / 100
#[inline]
pub fn transformer_impedance(base_impedance: f64, percent_impedance: f64) -> f64 {
    base_impedance * percent_impedance / 100.0
}

/// Upstream source impedance referred to the secondary voltage
///
/// # Formula
/// Zs = V² / (Ssc × 10⁶)
///
/// # Arguments
/// * `secondary_voltage` - Voltage the impedance is referred to (V)
/// * `source_va` - Source fault level (VA)
#[inline]
pub fn source_impedance(secondary_voltage: f64, source_va: f64) -> f64 {
    secondary_voltage.powi(2) / source_va
}

// =============================================================================
// FAULT CURRENT
// =============================================================================

/// Prospective symmetrical fault current for a three-phase bolted fault
///
/// # Formula
/// Isc = V / (√3 × Z)
///
/// # Example
/// ```rust
/// use calc_core::equations::impedance::three_phase_fault_current;
///
/// // 400 V through 0.0192 Ω (500 kVA, 6 %)
/// let isc = three_phase_fault_current(400.0, 0.0192);
/// assert!((isc - 12_028.0).abs() < 1.0);
/// ```
#[inline]
pub fn three_phase_fault_current(line_voltage: f64, impedance: f64) -> f64 {
    line_voltage / (SQRT_3 * impedance)
}

/// Prospective fault current for a single-phase winding
///
/// # Formula
/// Isc = V / Z
#[inline]
pub fn single_phase_fault_current(voltage: f64, impedance: f64) -> f64 {
    voltage / impedance
}

// =============================================================================
// VOLTAGE REGULATION
// =============================================================================

/// Typical X/R ratio by rating.
///
/// Small distribution transformers are relatively resistive; large units
/// are dominated by leakage reactance. Values are representative, not
/// taken from a specific manufacturer.
pub fn typical_x_over_r(kva: f64) -> f64 {
    if kva <= 500.0 {
        3.0
    } else if kva <= 2500.0 {
        6.0
    } else {
        10.0
    }
}

/// Split percent impedance into resistive and reactive components
///
/// # Formula
/// R% = Z% / √(1 + (X/R)²), X% = R% × X/R
///
/// Returns `(r_percent, x_percent)`.
pub fn impedance_components(percent_impedance: f64, x_over_r: f64) -> (f64, f64) {
    let r_percent = percent_impedance / (1.0 + x_over_r.powi(2)).sqrt();
    (r_percent, r_percent * x_over_r)
}

/// Approximate full-load voltage regulation (fraction)
///
/// # Formula
/// VR ≈ (R% × cos φ + X% × sin φ) / 100
///
/// First-order approximation; neglects the quadrature term which is
/// below 0.1 % for typical impedances.
///
/// # Example
/// ```rust
/// use calc_core::equations::impedance::voltage_regulation;
///
/// // Purely resistive 2 % at unity power factor
/// let vr = voltage_regulation(2.0, 0.0, 1.0);
/// assert!((vr - 0.02).abs() < 1e-12);
/// ```
pub fn voltage_regulation(r_percent: f64, x_percent: f64, power_factor: f64) -> f64 {
    let sin_phi = power_factor.acos().sin();
    (r_percent * power_factor + x_percent * sin_phi) / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transformer_impedance() {
        let zb = base_impedance(400.0, 500.0);
        let zt = transformer_impedance(zb, 6.0);
        assert!((zt - 0.0192).abs() < 1e-12);
    }

    #[test]
    fn test_source_impedance_250_mva() {
        // 400² / 250e6 = 0.00064 Ω
        let zs = source_impedance(400.0, 250.0e6);
        assert!((zs - 0.00064).abs() < 1e-12);
    }

    #[test]
    fn test_single_phase_fault_current() {
        assert!((single_phase_fault_current(230.0, 0.5) - 460.0).abs() < 1e-9);
    }

    #[test]
    fn test_impedance_components_recombine() {
        let (r, x) = impedance_components(6.0, 6.0);
        assert!((r.hypot(x) - 6.0).abs() < 1e-9);
        assert!((x / r - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_typical_x_over_r_bands() {
        assert_eq!(typical_x_over_r(100.0), 3.0);
        assert_eq!(typical_x_over_r(500.0), 3.0);
        assert_eq!(typical_x_over_r(1000.0), 6.0);
        assert_eq!(typical_x_over_r(5000.0), 10.0);
    }

    #[test]
    fn test_voltage_regulation_lagging_load() {
        // 500 kVA, 6 %, X/R = 3, pf 0.85
        let (r, x) = impedance_components(6.0, 3.0);
        let vr = voltage_regulation(r, x, 0.85);
        assert!((vr - 0.0461).abs() < 0.001);
    }
}
