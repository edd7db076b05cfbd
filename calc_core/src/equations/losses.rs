//! # Loss and Inrush Estimates
//!
//! Simplified estimates for quantities that really depend on core steel,
//! winding design and switching angle. They are suitable for sizing
//! exercises and training, not as a substitute for manufacturer test data.
//!
//! The constants below are placeholders pending confirmation against
//! IEC 60076-1 routine test figures or a manufacturer's data sheet.

/// No-load (iron) loss as a fraction of rating
pub const IRON_LOSS_FRACTION: f64 = 0.002;

/// Load (copper) loss as a fraction of rating, per percent impedance
pub const COPPER_LOSS_PER_PERCENT_Z: f64 = 0.0015;

/// Inrush peak as a multiple of rated primary current
pub const INRUSH_MULTIPLIER: f64 = 10.0;

/// Typical inrush decay time (s)
pub const INRUSH_DURATION_S: f64 = 0.1;

/// Estimated no-load loss (kW)
///
/// # Formula
/// P₀ = S × 0.002
#[inline]
pub fn iron_loss(kva: f64) -> f64 {
    kva * IRON_LOSS_FRACTION
}

/// Estimated full-load copper loss (kW)
///
/// # Formula
/// Pk = S × 0.0015 × Z%
#[inline]
pub fn copper_loss(kva: f64, percent_impedance: f64) -> f64 {
    kva * COPPER_LOSS_PER_PERCENT_Z * percent_impedance
}

/// Estimated total loss at full load (kW)
///
/// # Example
/// ```rust
/// use calc_core::equations::losses::total_loss;
///
/// // 500 kVA, 6 %: 1.0 kW iron + 4.5 kW copper
/// let loss = total_loss(500.0, 6.0);
/// assert!((loss - 5.5).abs() < 1e-9);
/// ```
#[inline]
pub fn total_loss(kva: f64, percent_impedance: f64) -> f64 {
    iron_loss(kva) + copper_loss(kva, percent_impedance)
}

/// Estimated peak magnetising inrush current (A)
#[inline]
pub fn inrush_current(primary_rated_current: f64) -> f64 {
    primary_rated_current * INRUSH_MULTIPLIER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_losses_scale_with_rating() {
        assert!((total_loss(1000.0, 6.0) - 2.0 * total_loss(500.0, 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_copper_loss_grows_with_impedance() {
        assert!(copper_loss(500.0, 8.0) > copper_loss(500.0, 4.0));
    }

    #[test]
    fn test_inrush_multiple() {
        assert!((inrush_current(26.24) - 262.4).abs() < 1e-9);
    }
}
