//! # Power and Current Formulas
//!
//! Power-triangle and rated-current relations for single- and three-phase
//! transformers.
//!
//! ## Notation
//!
//! - `S` = Apparent power (kVA)
//! - `P` = Real power (kW)
//! - `Q` = Reactive power (kVAr)
//! - `pf` = Power factor, cos φ
//! - `V` = Line voltage (V) for three-phase, winding voltage for single-phase
//! - `I` = Line current (A)
//!
//! ## References
//!
//! - IEC 60076-1:2011 Clause 3.4: Rated quantities
//! - IEC 60050-131: Circuit theory (power triangle)

use super::SQRT_3;

// =============================================================================
// RATED CURRENT
// =============================================================================

/// Rated line current of a three-phase winding
///
/// # Formula
/// I = S × 1000 / (√3 × V)
///
/// # Arguments
/// * `kva` - Apparent power rating (kVA)
/// * `line_voltage` - Line-to-line voltage (V)
///
/// # Example
/// ```rust
/// use calc_core::equations::power::three_phase_current;
///
/// // 500 kVA at 400 V
/// let i = three_phase_current(500.0, 400.0);
/// assert!((i - 721.69).abs() < 0.01);
/// ```
#[inline]
pub fn three_phase_current(kva: f64, line_voltage: f64) -> f64 {
    kva * 1000.0 / (SQRT_3 * line_voltage)
}

/// Rated current of a single-phase winding
///
/// # Formula
/// I = S × 1000 / V
///
/// # Example
/// ```rust
/// use calc_core::equations::power::single_phase_current;
///
/// let i = single_phase_current(5.0, 110.0);
/// assert!((i - 45.45).abs() < 0.01);
/// ```
#[inline]
pub fn single_phase_current(kva: f64, voltage: f64) -> f64 {
    kva * 1000.0 / voltage
}

// =============================================================================
// POWER TRIANGLE
// =============================================================================

/// Real power drawn at a given power factor
///
/// # Formula
/// P = S × pf
#[inline]
pub fn real_power(kva: f64, power_factor: f64) -> f64 {
    kva * power_factor
}

/// Reactive power at a given power factor
///
/// # Formula
/// Q = S × sin(acos(pf))
///
/// # Example
/// ```rust
/// use calc_core::equations::power::{real_power, reactive_power};
///
/// let p = real_power(100.0, 0.8);
/// let q = reactive_power(100.0, 0.8);
/// assert!((p - 80.0).abs() < 1e-9);
/// assert!((q - 60.0).abs() < 1e-9);
/// ```
#[inline]
pub fn reactive_power(kva: f64, power_factor: f64) -> f64 {
    kva * power_factor.acos().sin()
}

// =============================================================================
// EFFICIENCY
// =============================================================================

/// Efficiency from output power and total losses
///
/// # Formula
/// η = P / (P + losses)
///
/// # Arguments
/// * `output_kw` - Real power delivered (kW)
/// * `loss_kw` - Total losses (kW)
#[inline]
pub fn efficiency(output_kw: f64, loss_kw: f64) -> f64 {
    output_kw / (output_kw + loss_kw)
}

/// Winding voltage ratio (primary / secondary)
#[inline]
pub fn voltage_ratio(primary_voltage: f64, secondary_voltage: f64) -> f64 {
    primary_voltage / secondary_voltage
}
