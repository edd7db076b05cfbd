//! # Equation Registry
//!
//! Central registry of all electrical equations used in transformer calculations.
//! Each equation has metadata including standard references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for the generated equations reference and audit trails
//! - An explicit flag on every simplified engineering estimate, so results
//!   derived from it can be labelled as estimates rather than certified figures
//!
//! ## Usage
//!
//! ```rust
//! use calc_core::equations::registry::Equation;
//!
//! let meta = Equation::ThreePhaseFaultCurrent.metadata();
//! println!("Formula: {}", meta.formula_plain);
//! assert!(!meta.is_approximation);
//! assert!(Equation::CopperLoss.metadata().is_approximation);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to an electrical standard or textbook relation.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// IEC 60076 - Power transformers
    Iec60076 {
        part: u8,
        clause: &'static str,
    },
    /// IEC 60909 - Short-circuit currents in three-phase AC systems
    Iec60909 {
        part: u8,
        clause: &'static str,
    },
    /// IEEE C57 - Standards for distribution and power transformers
    IeeeC57 {
        number: &'static str,
        clause: &'static str,
    },
    /// BS 7671 - Requirements for Electrical Installations
    Bs7671 {
        regulation: &'static str,
    },
    /// Fundamental circuit theory (no specific standard needed)
    CircuitTheory,
}

impl CodeReference {
    /// Format the reference for display in generated documentation
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Iec60076 { part, clause } => {
                format!("IEC 60076-{} Clause {}", part, clause)
            }
            CodeReference::Iec60909 { part, clause } => {
                format!("IEC 60909-{} Clause {}", part, clause)
            }
            CodeReference::IeeeC57 { number, clause } => {
                format!("IEEE C57.{} Clause {}", number, clause)
            }
            CodeReference::Bs7671 { regulation } => {
                format!("BS 7671 Regulation {}", regulation)
            }
            CodeReference::CircuitTheory => "Fundamental Circuit Theory".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Iec60076 { .. } => "IEC 60076",
            CodeReference::Iec60909 { .. } => "IEC 60909",
            CodeReference::IeeeC57 { .. } => "IEEE C57",
            CodeReference::Bs7671 { .. } => "BS 7671",
            CodeReference::CircuitTheory => "Circuit Theory",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the generated reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Ratio and rated currents
    RatedQuantities,
    /// kW / kVAr from kVA and power factor
    PowerTriangle,
    /// Base, transformer and source impedance
    Impedance,
    /// Prospective fault current
    FaultCurrent,
    /// Voltage regulation
    Regulation,
    /// Loss, efficiency and inrush estimates
    LossesAndInrush,
    /// Temperature, altitude and harmonic derating
    Derating,
    /// Protective device and switchgear selection
    Protection,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::RatedQuantities => "Rated Quantities",
            EquationCategory::PowerTriangle => "Power Triangle",
            EquationCategory::Impedance => "Impedance",
            EquationCategory::FaultCurrent => "Fault Current",
            EquationCategory::Regulation => "Voltage Regulation",
            EquationCategory::LossesAndInrush => "Losses and Inrush",
            EquationCategory::Derating => "Derating Factors",
            EquationCategory::Protection => "Protection",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::RatedQuantities => 1,
            EquationCategory::PowerTriangle => 2,
            EquationCategory::LossesAndInrush => 3,
            EquationCategory::Impedance => 4,
            EquationCategory::FaultCurrent => 5,
            EquationCategory::Regulation => 6,
            EquationCategory::Derating => 7,
            EquationCategory::Protection => 8,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "S", "V", "Z%")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kVA", "V", "Ω")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an electrical equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Three-Phase Rated Current")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text (human-readable)
    pub formula_plain: &'static str,
    /// Standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Simplified estimate rather than an exact relation
    pub is_approximation: bool,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All electrical equations used by the transformer engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Rated quantities
    // -------------------------------------------------------------------------
    /// a = Vp / Vs
    VoltageRatio,
    /// I = S·1000 / (√3·V)
    ThreePhaseRatedCurrent,
    /// I = S·1000 / V
    SinglePhaseRatedCurrent,

    // -------------------------------------------------------------------------
    // Power triangle
    // -------------------------------------------------------------------------
    /// P = S·pf
    RealPower,
    /// Q = S·sin(acos pf)
    ReactivePower,

    // -------------------------------------------------------------------------
    // Losses and inrush
    // -------------------------------------------------------------------------
    /// P₀ = 0.002·S
    IronLoss,
    /// Pk = 0.0015·S·Z%
    CopperLoss,
    /// η = P / (P + losses)
    Efficiency,
    /// I_inrush = 10·Ip
    InrushCurrent,

    // -------------------------------------------------------------------------
    // Impedance
    // -------------------------------------------------------------------------
    /// Zbase = V² / (S·1000)
    BaseImpedance,
    /// Zt = Zbase·Z%/100
    TransformerImpedance,
    /// Zs = V² / Ssc
    SourceImpedance,
    /// R% and X% from Z% and X/R
    ImpedanceComponents,

    // -------------------------------------------------------------------------
    // Fault current
    // -------------------------------------------------------------------------
    /// Isc = V / (√3·Z)
    ThreePhaseFaultCurrent,
    /// Isc = V / Z
    SinglePhaseFaultCurrent,

    // -------------------------------------------------------------------------
    // Regulation
    // -------------------------------------------------------------------------
    /// VR ≈ (R%·cos φ + X%·sin φ) / 100
    VoltageRegulation,

    // -------------------------------------------------------------------------
    // Derating
    // -------------------------------------------------------------------------
    /// k_θ = 1 - 0.01·(θ - 40)
    TemperatureDerating,
    /// k_h = 1 - 0.004·(h - 1000)/100
    AltitudeDerating,
    /// k_H = 0.85
    HarmonicDerating,

    // -------------------------------------------------------------------------
    // Protection
    // -------------------------------------------------------------------------
    /// In ≥ 1.25·Is
    ProtectiveDeviceSizing,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::VoltageRatio => EquationMetadata {
                name: "Voltage Ratio",
                description: "Ratio of primary to secondary rated voltage; classifies the unit as step-down, step-up or isolation",
                formula_plain: "a = Vp / Vs",
                reference: CodeReference::Iec60076 { part: 1, clause: "3.4.3" },
                variables: vec![
                    Variable::new("a", "Voltage ratio", "-"),
                    Variable::new("Vp", "Primary rated voltage", "V"),
                    Variable::new("Vs", "Secondary rated voltage", "V"),
                ],
                assumptions: vec!["Isolation when |a - 1| <= 1e-9"],
                category: EquationCategory::RatedQuantities,
                is_approximation: false,
                source_module: "equations/power.rs",
                source_function: "voltage_ratio",
            },

            Equation::ThreePhaseRatedCurrent => EquationMetadata {
                name: "Three-Phase Rated Current",
                description: "Rated line current of a three-phase winding",
                formula_plain: "I = S * 1000 / (sqrt(3) * V)",
                reference: CodeReference::Iec60076 { part: 1, clause: "3.4.7" },
                variables: vec![
                    Variable::new("I", "Rated line current", "A"),
                    Variable::new("S", "Rated apparent power", "kVA"),
                    Variable::new("V", "Line-to-line voltage", "V"),
                ],
                assumptions: vec!["Balanced three-phase load"],
                category: EquationCategory::RatedQuantities,
                is_approximation: false,
                source_module: "equations/power.rs",
                source_function: "three_phase_current",
            },

            Equation::SinglePhaseRatedCurrent => EquationMetadata {
                name: "Single-Phase Rated Current",
                description: "Rated current of a single-phase winding",
                formula_plain: "I = S * 1000 / V",
                reference: CodeReference::Iec60076 { part: 1, clause: "3.4.7" },
                variables: vec![
                    Variable::new("I", "Rated current", "A"),
                    Variable::new("S", "Rated apparent power", "kVA"),
                    Variable::new("V", "Winding voltage", "V"),
                ],
                assumptions: vec![],
                category: EquationCategory::RatedQuantities,
                is_approximation: false,
                source_module: "equations/power.rs",
                source_function: "single_phase_current",
            },

            Equation::RealPower => EquationMetadata {
                name: "Real Power",
                description: "Real power delivered at full rating and the given load power factor",
                formula_plain: "P = S * pf",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("P", "Real power", "kW"),
                    Variable::new("S", "Apparent power", "kVA"),
                    Variable::new("pf", "Load power factor (cos phi)", "-"),
                ],
                assumptions: vec!["Sinusoidal steady state"],
                category: EquationCategory::PowerTriangle,
                is_approximation: false,
                source_module: "equations/power.rs",
                source_function: "real_power",
            },

            Equation::ReactivePower => EquationMetadata {
                name: "Reactive Power",
                description: "Reactive complement of the real power at the given power factor",
                formula_plain: "Q = S * sin(acos(pf))",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("Q", "Reactive power", "kVAr"),
                    Variable::new("S", "Apparent power", "kVA"),
                    Variable::new("pf", "Load power factor (cos phi)", "-"),
                ],
                assumptions: vec!["Sinusoidal steady state", "Sign of Q (lagging/leading) not tracked"],
                category: EquationCategory::PowerTriangle,
                is_approximation: false,
                source_module: "equations/power.rs",
                source_function: "reactive_power",
            },

            Equation::IronLoss => EquationMetadata {
                name: "No-Load Loss Estimate",
                description: "Core (iron) loss estimated as a fixed fraction of rating",
                formula_plain: "P0 = 0.002 * S",
                reference: CodeReference::Iec60076 { part: 1, clause: "11.5" },
                variables: vec![
                    Variable::new("P0", "No-load loss", "kW"),
                    Variable::new("S", "Rated apparent power", "kVA"),
                ],
                assumptions: vec!["Placeholder constant; use routine test report values where available"],
                category: EquationCategory::LossesAndInrush,
                is_approximation: true,
                source_module: "equations/losses.rs",
                source_function: "iron_loss",
            },

            Equation::CopperLoss => EquationMetadata {
                name: "Load Loss Estimate",
                description: "Winding (copper) loss at full load, scaled with percent impedance",
                formula_plain: "Pk = 0.0015 * S * Z%",
                reference: CodeReference::Iec60076 { part: 1, clause: "11.4" },
                variables: vec![
                    Variable::new("Pk", "Load loss at rated current", "kW"),
                    Variable::new("S", "Rated apparent power", "kVA"),
                    Variable::new("Z%", "Percent impedance", "%"),
                ],
                assumptions: vec![
                    "Placeholder constant; use routine test report values where available",
                    "Evaluated at full rated load",
                ],
                category: EquationCategory::LossesAndInrush,
                is_approximation: true,
                source_module: "equations/losses.rs",
                source_function: "copper_loss",
            },

            Equation::Efficiency => EquationMetadata {
                name: "Efficiency",
                description: "Full-load efficiency from output power and estimated losses",
                formula_plain: "eta = P / (P + P0 + Pk)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("eta", "Efficiency", "-"),
                    Variable::new("P", "Real power output", "kW"),
                    Variable::new("P0 + Pk", "Total losses", "kW"),
                ],
                assumptions: vec!["Inherits the uncertainty of the loss estimates"],
                category: EquationCategory::LossesAndInrush,
                is_approximation: true,
                source_module: "equations/power.rs",
                source_function: "efficiency",
            },

            Equation::InrushCurrent => EquationMetadata {
                name: "Inrush Current Estimate",
                description: "Peak magnetising inrush as a fixed multiple of rated primary current",
                formula_plain: "I_inrush = 10 * Ip, t = 0.1 s",
                reference: CodeReference::IeeeC57 { number: "12.00", clause: "Annex" },
                variables: vec![
                    Variable::new("I_inrush", "Peak inrush current", "A"),
                    Variable::new("Ip", "Primary rated current", "A"),
                    Variable::new("t", "Typical decay time", "s"),
                ],
                assumptions: vec![
                    "Typical range 8-12 x In; actual value depends on switching angle and remanence",
                    "Not derived from a core magnetisation model",
                ],
                category: EquationCategory::LossesAndInrush,
                is_approximation: true,
                source_module: "equations/losses.rs",
                source_function: "inrush_current",
            },

            Equation::BaseImpedance => EquationMetadata {
                name: "Base Impedance",
                description: "Base impedance of the secondary winding",
                formula_plain: "Zbase = Vs^2 / (S * 1000)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("Zbase", "Base impedance", "ohm"),
                    Variable::new("Vs", "Secondary voltage", "V"),
                    Variable::new("S", "Rated apparent power", "kVA"),
                ],
                assumptions: vec![],
                category: EquationCategory::Impedance,
                is_approximation: false,
                source_module: "equations/impedance.rs",
                source_function: "base_impedance",
            },

            Equation::TransformerImpedance => EquationMetadata {
                name: "Transformer Impedance",
                description: "Short-circuit impedance referred to the secondary",
                formula_plain: "Zt = Zbase * Z% / 100",
                reference: CodeReference::Iec60076 { part: 5, clause: "3.2.2" },
                variables: vec![
                    Variable::new("Zt", "Transformer impedance", "ohm"),
                    Variable::new("Z%", "Percent impedance", "%"),
                ],
                assumptions: vec!["Nominal tap position"],
                category: EquationCategory::Impedance,
                is_approximation: false,
                source_module: "equations/impedance.rs",
                source_function: "transformer_impedance",
            },

            Equation::SourceImpedance => EquationMetadata {
                name: "Source Impedance",
                description: "Upstream network impedance referred to the secondary voltage",
                formula_plain: "Zs = Vs^2 / (Ssc * 10^6)",
                reference: CodeReference::Iec60909 { part: 0, clause: "6.2" },
                variables: vec![
                    Variable::new("Zs", "Source impedance", "ohm"),
                    Variable::new("Ssc", "Source fault level", "MVA"),
                ],
                assumptions: vec!["Voltage factor c = 1.0", "Magnitudes added in series"],
                category: EquationCategory::Impedance,
                is_approximation: false,
                source_module: "equations/impedance.rs",
                source_function: "source_impedance",
            },

            Equation::ImpedanceComponents => EquationMetadata {
                name: "Impedance Components",
                description: "Resistive and reactive parts of percent impedance from an assumed X/R ratio",
                formula_plain: "R% = Z% / sqrt(1 + (X/R)^2), X% = R% * X/R",
                reference: CodeReference::Iec60076 { part: 5, clause: "4.2.3" },
                variables: vec![
                    Variable::new("R%", "Percent resistance", "%"),
                    Variable::new("X%", "Percent reactance", "%"),
                    Variable::new("X/R", "Reactance to resistance ratio", "-"),
                ],
                assumptions: vec!["X/R taken from a typical-by-rating table (3, 6 or 10)"],
                category: EquationCategory::Impedance,
                is_approximation: true,
                source_module: "equations/impedance.rs",
                source_function: "impedance_components",
            },

            Equation::ThreePhaseFaultCurrent => EquationMetadata {
                name: "Three-Phase Fault Current",
                description: "Prospective symmetrical current for a bolted three-phase fault at the secondary terminals",
                formula_plain: "Isc = Vs / (sqrt(3) * (Zt + Zs))",
                reference: CodeReference::Iec60909 { part: 0, clause: "4.2.1" },
                variables: vec![
                    Variable::new("Isc", "Prospective fault current", "A"),
                    Variable::new("Vs", "Secondary line voltage", "V"),
                    Variable::new("Zt + Zs", "Total impedance", "ohm"),
                ],
                assumptions: vec!["Zs = 0 when the source fault level is unknown (infinite bus)"],
                category: EquationCategory::FaultCurrent,
                is_approximation: false,
                source_module: "equations/impedance.rs",
                source_function: "three_phase_fault_current",
            },

            Equation::SinglePhaseFaultCurrent => EquationMetadata {
                name: "Single-Phase Fault Current",
                description: "Prospective current for a fault across a single-phase secondary",
                formula_plain: "Isc = Vs / (Zt + Zs)",
                reference: CodeReference::CircuitTheory,
                variables: vec![
                    Variable::new("Isc", "Prospective fault current", "A"),
                    Variable::new("Vs", "Secondary voltage", "V"),
                ],
                assumptions: vec!["Zs = 0 when the source fault level is unknown (infinite bus)"],
                category: EquationCategory::FaultCurrent,
                is_approximation: false,
                source_module: "equations/impedance.rs",
                source_function: "single_phase_fault_current",
            },

            Equation::VoltageRegulation => EquationMetadata {
                name: "Voltage Regulation",
                description: "Full-load drop in secondary voltage as a fraction of no-load voltage",
                formula_plain: "VR = (R% * cos(phi) + X% * sin(phi)) / 100",
                reference: CodeReference::Iec60076 { part: 1, clause: "Annex A" },
                variables: vec![
                    Variable::new("VR", "Voltage regulation", "-"),
                    Variable::new("phi", "Load power factor angle", "rad"),
                ],
                assumptions: vec!["First-order approximation; quadrature term neglected"],
                category: EquationCategory::Regulation,
                is_approximation: true,
                source_module: "equations/impedance.rs",
                source_function: "voltage_regulation",
            },

            Equation::TemperatureDerating => EquationMetadata {
                name: "Ambient Temperature Derating",
                description: "Capacity reduction above the 40 °C reference ambient",
                formula_plain: "k_theta = max(0.5, 1 - 0.01 * (theta - 40))",
                reference: CodeReference::Iec60076 { part: 2, clause: "6.3" },
                variables: vec![
                    Variable::new("k_theta", "Temperature factor", "-"),
                    Variable::new("theta", "Maximum ambient temperature", "°C"),
                ],
                assumptions: vec!["Applies only when theta > 40 °C", "1 % per °C is a rule of thumb"],
                category: EquationCategory::Derating,
                is_approximation: true,
                source_module: "derating.rs",
                source_function: "temperature_derating",
            },

            Equation::AltitudeDerating => EquationMetadata {
                name: "Altitude Derating",
                description: "Capacity reduction for reduced cooling above 1000 m",
                formula_plain: "k_h = max(0.5, 1 - 0.004 * (h - 1000) / 100)",
                reference: CodeReference::Iec60076 { part: 2, clause: "6.3" },
                variables: vec![
                    Variable::new("k_h", "Altitude factor", "-"),
                    Variable::new("h", "Installation altitude", "m"),
                ],
                assumptions: vec!["Applies only when h > 1000 m", "ONAN cooling"],
                category: EquationCategory::Derating,
                is_approximation: true,
                source_module: "derating.rs",
                source_function: "altitude_derating",
            },

            Equation::HarmonicDerating => EquationMetadata {
                name: "Harmonic Derating",
                description: "Capacity reduction for non-linear loads on a standard (non K-rated) transformer",
                formula_plain: "k_H = 0.85",
                reference: CodeReference::IeeeC57 { number: "110", clause: "5" },
                variables: vec![Variable::new("k_H", "Harmonic factor", "-")],
                assumptions: vec!["Roughly a K-4 load spectrum", "Replace with a measured K-factor calculation"],
                category: EquationCategory::Derating,
                is_approximation: true,
                source_module: "derating.rs",
                source_function: "harmonic_derating",
            },

            Equation::ProtectiveDeviceSizing => EquationMetadata {
                name: "Protective Device Sizing",
                description: "Smallest standard device rating at or above 125 % of secondary rated current",
                formula_plain: "In >= 1.25 * Is",
                reference: CodeReference::Bs7671 { regulation: "433.1.1" },
                variables: vec![
                    Variable::new("In", "Device rated current", "A"),
                    Variable::new("Is", "Secondary rated current", "A"),
                ],
                assumptions: vec!["Ratings from the standard device series", "Cable coordination checked separately"],
                category: EquationCategory::Protection,
                is_approximation: false,
                source_module: "calculations/compliance.rs",
                source_function: "recommended_device_rating",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories in display order
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![
            RatedQuantities,
            PowerTriangle,
            LossesAndInrush,
            Impedance,
            FaultCurrent,
            Regulation,
            Derating,
            Protection,
        ];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }

    /// Equations whose results are estimates rather than exact relations
    pub fn approximations() -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().is_approximation)
            .copied()
            .collect()
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Rated quantities
    Equation::VoltageRatio,
    Equation::ThreePhaseRatedCurrent,
    Equation::SinglePhaseRatedCurrent,
    // Power triangle
    Equation::RealPower,
    Equation::ReactivePower,
    // Losses and inrush
    Equation::IronLoss,
    Equation::CopperLoss,
    Equation::Efficiency,
    Equation::InrushCurrent,
    // Impedance
    Equation::BaseImpedance,
    Equation::TransformerImpedance,
    Equation::SourceImpedance,
    Equation::ImpedanceComponents,
    // Fault current
    Equation::ThreePhaseFaultCurrent,
    Equation::SinglePhaseFaultCurrent,
    // Regulation
    Equation::VoltageRegulation,
    // Derating
    Equation::TemperatureDerating,
    Equation::AltitudeDerating,
    Equation::HarmonicDerating,
    // Protection
    Equation::ProtectiveDeviceSizing,
];

/// Equations applied by a single transformer calculation.
///
/// Three-phase and single-phase variants are both listed; the engine picks
/// one of each pair from the input's phase arrangement.
pub fn transformer_calculation_equations() -> Vec<Equation> {
    vec![
        Equation::VoltageRatio,
        Equation::ThreePhaseRatedCurrent,
        Equation::SinglePhaseRatedCurrent,
        Equation::RealPower,
        Equation::ReactivePower,
        Equation::IronLoss,
        Equation::CopperLoss,
        Equation::Efficiency,
        Equation::BaseImpedance,
        Equation::TransformerImpedance,
        Equation::SourceImpedance,
        Equation::ThreePhaseFaultCurrent,
        Equation::SinglePhaseFaultCurrent,
        Equation::ImpedanceComponents,
        Equation::VoltageRegulation,
        Equation::InrushCurrent,
        Equation::TemperatureDerating,
        Equation::AltitudeDerating,
        Equation::HarmonicDerating,
    ]
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the complete equations reference as markdown.
///
/// ```rust
/// use calc_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Transformer Equations Reference"));
/// assert!(markdown.contains("Fault Current"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);

    output.push_str(r#"# Transformer Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists all formulas used by the transformer calculation engine.
Each equation includes its formula, standard reference, source location, and assumptions.
Equations marked **Estimate** are simplified engineering approximations; results
derived from them are not manufacturer-certified figures.

## Conventions

| Quantity | Convention |
|----------|------------|
| Voltage | Line-to-line for three-phase, winding voltage for single-phase |
| Impedance | Referred to the secondary winding, magnitudes added in series |
| Regulation | Fraction of no-load secondary voltage |
| Derating | Multiplier <= 1, absent at reference conditions |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            if meta.is_approximation {
                output.push_str(&format!("### {} (Estimate)\n\n", meta.name));
            } else {
                output.push_str(&format!("### {}\n\n", meta.name));
            }

            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!(
                        "| {} | {} | {} |\n",
                        var.symbol, var.description, var.units
                    ));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`]({})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Estimates:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        Equation::approximations().len(),
        categories.len()
    ));

    output.push_str(r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** for the original source (IEC 60076, IEC 60909, etc.)
3. Click the **Source** link to view the implementation code
4. Run `cargo test` to verify equations against known values
"#);

    output
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 20);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
        }

        let fault = Equation::ThreePhaseFaultCurrent.metadata();
        assert!(fault.formula_plain.contains("sqrt(3)"), "Fault current formula wrong");
    }

    #[test]
    fn test_code_reference_citation() {
        let iec = CodeReference::Iec60076 { part: 5, clause: "3.2.2" };
        assert_eq!(iec.citation(), "IEC 60076-5 Clause 3.2.2");

        let bs = CodeReference::Bs7671 { regulation: "433.1.1" };
        assert_eq!(bs.citation(), "BS 7671 Regulation 433.1.1");
        assert_eq!(bs.short_form(), "BS 7671");
    }

    #[test]
    fn test_approximations_are_flagged() {
        let approx = Equation::approximations();
        assert!(approx.contains(&Equation::CopperLoss));
        assert!(approx.contains(&Equation::InrushCurrent));
        assert!(approx.contains(&Equation::VoltageRegulation));
        assert!(!approx.contains(&Equation::ThreePhaseRatedCurrent));
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        for pair in cats.windows(2) {
            assert!(pair[0].sort_order() < pair[1].sort_order());
        }
    }

    #[test]
    fn test_every_category_populated() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_transformer_calculation_equations_registered() {
        for eq in transformer_calculation_equations() {
            assert!(ALL_EQUATIONS.contains(&eq));
        }
    }

    #[test]
    fn test_generate_equations_markdown() {
        let md = generate_equations_markdown();
        assert!(md.contains("## Rated Quantities"));
        assert!(md.contains("### Load Loss Estimate (Estimate)"));
        assert!(md.contains("IEC 60909-0 Clause 4.2.1"));
        assert!(md.contains("**Total Equations:** 20"));
        // Rated quantities come before protection
        let rated = md.find("## Rated Quantities").unwrap();
        let protection = md.find("## Protection").unwrap();
        assert!(rated < protection);
    }
}
