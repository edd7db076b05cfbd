//! Text and JSON rendering of calculation reports.

use std::fmt::{self, Write};

use anyhow::{Context, Result};
use calc_core::calculations::{ComplianceReport, ComplianceStatus, TransformerInput, TransformerResult};
use calc_core::presets::format_voltage;
use calc_core::VectorGroup;
use serde::Serialize;

const RULE: &str = "═══════════════════════════════════════════════";

/// Everything `calculate` reports, in one serializable value
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub input: &'a TransformerInput,
    pub result: &'a TransformerResult,
    pub compliance: &'a ComplianceReport,
}

fn status_icon(pass: bool) -> &'static str {
    if pass {
        "[OK]"
    } else {
        "[WARN]"
    }
}

/// Pretty-printed JSON
pub fn json(report: &Report<'_>) -> Result<String> {
    serde_json::to_string_pretty(report).context("failed to serialize report")
}

/// Human-readable report
pub fn text(report: &Report<'_>) -> Result<String> {
    let mut out = String::new();
    write_text(&mut out, report).context("failed to render report")?;
    Ok(out)
}

fn write_text(out: &mut String, report: &Report<'_>) -> fmt::Result {
    let Report {
        input,
        result,
        compliance,
    } = report;

    writeln!(out, "{RULE}")?;
    writeln!(out, "  TRANSFORMER CALCULATION RESULTS")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;

    let vector_group = input
        .connection_type
        .parse::<VectorGroup>()
        .map(|vg| format!("{} ({}°)", vg, vg.phase_shift_degrees()))
        .unwrap_or_else(|_| format!("{} (unrecognised)", input.connection_type));

    writeln!(out, "Input:")?;
    writeln!(
        out,
        "  Voltages:   {} / {} ({})",
        format_voltage(input.primary_voltage),
        format_voltage(input.secondary_voltage),
        input.phase
    )?;
    writeln!(out, "  Rating:     {} kVA, pf {:.2}, {} Hz", input.kva_rating, input.power_factor, input.frequency)?;
    writeln!(out, "  Impedance:  {}%", input.percent_impedance)?;
    writeln!(out, "  Connection: {}", vector_group)?;
    match input.source_fault_level {
        Some(mva) => writeln!(out, "  Source:     {} MVA", mva)?,
        None => writeln!(out, "  Source:     infinite bus")?,
    }
    writeln!(
        out,
        "  Site:       {} °C, {} m{}",
        input.ambient_temp,
        input.altitude,
        if input.harmonics { ", non-linear load" } else { "" }
    )?;
    writeln!(out)?;

    writeln!(out, "Ratings:")?;
    writeln!(out, "  Ratio:      {:.3} ({})", result.voltage_ratio, result.transformer_type)?;
    writeln!(out, "  I_primary   = {:.2} A", result.primary_rated_current)?;
    writeln!(out, "  I_secondary = {:.2} A", result.secondary_rated_current)?;
    writeln!(out, "  P = {:.1} kW, Q = {:.1} kVAr", result.kw, result.kvar)?;
    writeln!(out)?;

    writeln!(out, "Performance (estimates):")?;
    writeln!(out, "  Losses:     {:.2} kW", result.total_loss)?;
    writeln!(
        out,
        "  Efficiency: {:.2}% {}",
        result.efficiency * 100.0,
        status_icon(result.efficiency >= calc_core::calculations::advisory::MIN_EFFICIENCY)
    )?;
    writeln!(
        out,
        "  Regulation: {:.2}% {}",
        result.voltage_regulation * 100.0,
        status_icon(result.voltage_regulation <= calc_core::calculations::advisory::MAX_REGULATION)
    )?;
    writeln!(out, "  Inrush:     {:.0} A for {} s", result.inrush_current, result.inrush_duration)?;
    writeln!(out)?;

    writeln!(out, "Fault level:")?;
    writeln!(out, "  I_sc = {:.0} A ({:.1} kA)", result.transformer_fault_current, result.transformer_fault_current / 1000.0)?;
    writeln!(out, "  Breaking capacity: {}", compliance.breaking_capacity)?;
    writeln!(out, "  Protective device: {}", compliance.protective_device)?;

    let derating = result.derating_factors();
    if derating.any() {
        writeln!(out)?;
        writeln!(out, "Derating:")?;
        if let Some(k) = derating.temperature {
            writeln!(out, "  Temperature: {:.3}", k)?;
        }
        if let Some(k) = derating.altitude {
            writeln!(out, "  Altitude:    {:.3}", k)?;
        }
        if let Some(k) = derating.harmonic {
            writeln!(out, "  Harmonics:   {:.3}", k)?;
        }
        writeln!(
            out,
            "  Combined:    {:.3} ({:.0} kVA available)",
            derating.combined(),
            input.kva_rating * derating.combined()
        )?;
    }

    if !result.warnings.is_empty() {
        writeln!(out)?;
        writeln!(out, "Warnings:")?;
        for warning in &result.warnings {
            writeln!(out, "  [WARN] {}", warning)?;
        }
    }

    if !result.recommendations.is_empty() {
        writeln!(out)?;
        writeln!(out, "Recommendations:")?;
        for recommendation in &result.recommendations {
            writeln!(out, "  - {}", recommendation)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "  STATUS: {} {}",
        compliance.status,
        status_icon(compliance.status == ComplianceStatus::Compliant)
    )?;
    writeln!(out, "{RULE}")
}
