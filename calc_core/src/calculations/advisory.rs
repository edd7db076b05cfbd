//! # Advisory Rules
//!
//! Warnings and recommendations attached to a transformer result. Each rule
//! is a `(predicate, message)` pair in a static table; tables are evaluated
//! in order and every matching rule contributes its message once.
//!
//! Warnings count toward the compliance status (see
//! [`super::compliance::compliance_status`]). Recommendations are purely
//! informational.

use crate::calculations::transformer::{Phase, TransformerInput, TransformerResult, TransformerType};
use crate::presets::VectorGroup;

/// Voltage regulation above which a warning is raised (fraction)
pub const MAX_REGULATION: f64 = 0.05;

/// Efficiency below which a warning is raised (fraction)
pub const MIN_EFFICIENCY: f64 = 0.90;

/// Fault current above which a warning is raised (A)
pub const VERY_HIGH_FAULT_CURRENT_A: f64 = 35_000.0;

/// Fault current above which breaking capacity should be checked explicitly (A)
pub const HIGH_FAULT_CURRENT_A: f64 = 10_000.0;

/// Typical nameplate impedance band (%)
pub const TYPICAL_IMPEDANCE_RANGE: (f64, f64) = (2.0, 10.0);

/// Source fault level should be at least this multiple of the transformer rating
pub const MIN_SOURCE_STRENGTH_RATIO: f64 = 10.0;

/// A single advisory rule
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRule {
    /// Stable identifier for tests and consumers
    pub id: &'static str,
    /// Whether the rule fires for this input/result pair
    pub applies: fn(&TransformerInput, &TransformerResult) -> bool,
    /// Message emitted when the rule fires
    pub message: &'static str,
}

fn vector_group(input: &TransformerInput) -> Option<VectorGroup> {
    input.connection_type.parse().ok()
}

fn is_standard_frequency(hz: f64) -> bool {
    (hz - 50.0).abs() < 0.5 || (hz - 60.0).abs() < 0.5
}

/// Warning rules, in report order
pub static WARNING_RULES: &[AdvisoryRule] = &[
    AdvisoryRule {
        id: "high-regulation",
        applies: |_, r| r.voltage_regulation > MAX_REGULATION,
        message: "High voltage regulation (>5%) - check voltage at remote loads or consider a lower-impedance unit",
    },
    AdvisoryRule {
        id: "low-efficiency",
        applies: |_, r| r.efficiency < MIN_EFFICIENCY,
        message: "Low efficiency (<90%) - verify losses against manufacturer data",
    },
    AdvisoryRule {
        id: "very-high-fault-current",
        applies: |_, r| r.transformer_fault_current > VERY_HIGH_FAULT_CURRENT_A,
        message: "Very high fault current (>35 kA) - switchgear and busbars need high short-circuit ratings",
    },
    AdvisoryRule {
        id: "atypical-impedance",
        applies: |i, _| {
            i.percent_impedance < TYPICAL_IMPEDANCE_RANGE.0 || i.percent_impedance > TYPICAL_IMPEDANCE_RANGE.1
        },
        message: "Percent impedance outside the typical 2-10% range - confirm the nameplate value",
    },
    AdvisoryRule {
        id: "weak-source",
        applies: |i, _| {
            i.source_fault_level
                .is_some_and(|mva| mva * 1000.0 < MIN_SOURCE_STRENGTH_RATIO * i.kva_rating)
        },
        message: "Weak upstream supply - source fault level is less than 10 times the transformer rating",
    },
    AdvisoryRule {
        id: "non-standard-frequency",
        applies: |i, _| !is_standard_frequency(i.frequency),
        message: "Non-standard supply frequency - ratings and impedances assume 50 Hz or 60 Hz",
    },
    AdvisoryRule {
        id: "derated",
        applies: |_, r| r.derating_factors().any(),
        message: "Operating outside reference conditions - available capacity is reduced by derating",
    },
];

/// Recommendation rules, in report order
pub static RECOMMENDATION_RULES: &[AdvisoryRule] = &[
    AdvisoryRule {
        id: "estimates",
        applies: |_, _| true,
        message: "Loss, efficiency, inrush and regulation figures are engineering estimates - confirm against manufacturer test data",
    },
    AdvisoryRule {
        id: "temperature",
        applies: |_, r| r.temperature_derating.is_some(),
        message: "Ambient above 40 °C - derate per IEC 60076-2 or specify a reduced temperature-rise design",
    },
    AdvisoryRule {
        id: "altitude",
        applies: |_, r| r.altitude_derating.is_some(),
        message: "Installation above 1000 m - apply altitude correction per IEC 60076-2 or specify enhanced cooling",
    },
    AdvisoryRule {
        id: "harmonics",
        applies: |i, _| i.harmonics,
        message: "Non-linear loading - consider a K-rated transformer (IEEE C57.110) and a full-size neutral",
    },
    AdvisoryRule {
        id: "delta-triplen",
        applies: |i, _| i.harmonics && vector_group(i).is_some_and(|vg| vg.has_delta()),
        message: "Delta winding will circulate triplen harmonics - allow for additional winding heating",
    },
    AdvisoryRule {
        id: "no-secondary-neutral",
        applies: |i, _| {
            i.phase == Phase::Three && vector_group(i).is_some_and(|vg| !vg.secondary_earthable())
        },
        message: "Secondary has no neutral point - provide an earthing transformer or alternative earthing arrangement",
    },
    AdvisoryRule {
        id: "unknown-connection",
        applies: |i, _| vector_group(i).is_none(),
        message: "Connection type not recognised - confirm the vector group with the manufacturer",
    },
    AdvisoryRule {
        id: "breaking-capacity",
        applies: |_, r| r.transformer_fault_current > HIGH_FAULT_CURRENT_A,
        message: "Confirm protective devices are rated for the prospective fault current (BS 7671 Regulation 434.5.1)",
    },
    AdvisoryRule {
        id: "infinite-source",
        applies: |i, _| i.source_fault_level.is_none(),
        message: "Source fault level not supplied - fault current assumes an infinite upstream supply (worst case)",
    },
    AdvisoryRule {
        id: "inrush",
        applies: |_, _| true,
        message: "Select primary protection to ride through magnetising inrush (about 10 x rated current for 0.1 s)",
    },
    AdvisoryRule {
        id: "step-up",
        applies: |_, r| r.transformer_type == TransformerType::StepUp,
        message: "Step-up operation - confirm the unit is designed to be energised from the lower-voltage side",
    },
    AdvisoryRule {
        id: "isolation",
        applies: |_, r| r.transformer_type == TransformerType::Isolation,
        message: "Isolation transformer - verify the earthing arrangement of the separated system (BS 7671 Section 413)",
    },
];

fn evaluate(rules: &[AdvisoryRule], input: &TransformerInput, result: &TransformerResult) -> Vec<String> {
    rules
        .iter()
        .filter(|rule| (rule.applies)(input, result))
        .map(|rule| rule.message.to_string())
        .collect()
}

/// Warnings triggered by this input/result pair
pub fn warnings(input: &TransformerInput, result: &TransformerResult) -> Vec<String> {
    evaluate(WARNING_RULES, input, result)
}

/// Recommendations triggered by this input/result pair
pub fn recommendations(input: &TransformerInput, result: &TransformerResult) -> Vec<String> {
    evaluate(RECOMMENDATION_RULES, input, result)
}
