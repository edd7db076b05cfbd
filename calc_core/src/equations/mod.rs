//! # Transformer Equations
//!
//! This module contains all closed-form electrical equations used in calculations.
//! Having equations in one place enables:
//! - Easy verification against standards (IEC 60076, IEC 60909, IEEE C57)
//! - Documentation of assumptions and simplifications
//! - Consistent implementation across calculation types
//!
//! ## Modules
//!
//! - [`power`] - Rated currents, power triangle, efficiency
//! - [`impedance`] - Base/source impedance, fault current, voltage regulation
//! - [`losses`] - Loss and inrush estimates
//! - [`registry`] - Equation metadata for the generated reference
//!
//! ## Conventions
//!
//! - **Voltage**: line-to-line for three-phase, winding voltage for single-phase
//! - **Power**: kVA / kW / kVAr at the calculation boundary, VA inside impedance formulas
//! - **Impedance**: ohms referred to the secondary winding
//!
//! ## References
//!
//! - IEC 60076-1:2011 Power transformers - General
//! - IEC 60076-5:2006 Ability to withstand short circuit
//! - IEC 60909-0:2016 Short-circuit currents in three-phase AC systems
//! - IEEE C57.110-2018 Transformer capability with non-sinusoidal load currents

pub mod impedance;
pub mod losses;
pub mod power;
pub mod registry;

/// √3, for line/phase conversions
pub const SQRT_3: f64 = 1.732_050_807_568_877_2;

// Re-export commonly used items
pub use power::{
    efficiency,
    reactive_power,
    real_power,
    single_phase_current,
    three_phase_current,
    voltage_ratio,
};

pub use impedance::{
    base_impedance,
    impedance_components,
    single_phase_fault_current,
    source_impedance,
    three_phase_fault_current,
    transformer_impedance,
    typical_x_over_r,
    voltage_regulation,
};

pub use losses::{copper_loss, inrush_current, iron_loss, total_loss, INRUSH_DURATION_S};

pub use registry::{
    CodeReference,
    Equation,
    EquationCategory,
    EquationMetadata,
    Variable,
    ALL_EQUATIONS,
    generate_equations_markdown,
    transformer_calculation_equations,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqrt_3() {
        assert!((SQRT_3 * SQRT_3 - 3.0).abs() < 1e-12);
    }
}
