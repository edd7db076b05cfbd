//! # Reference Tables and Presets
//!
//! Static lookup tables consumed by input forms and the compliance lookups:
//! standard voltages, kVA ratings, vector groups, protective device ratings,
//! typical impedances, and a handful of named transformer presets.
//!
//! ## Vector Groups
//!
//! Connection codes follow IEC 60076-1 Clause 7: an upper-case letter for the
//! HV winding (`D`, `Y`, `Z`), optional `N` for an HV neutral, a lower-case
//! letter for the LV winding, optional `n` for an LV neutral, and the clock
//! number (phase displacement in 30° steps).
//!
//! ```rust
//! use calc_core::presets::{VectorGroup, Winding};
//!
//! let vg: VectorGroup = "Dyn11".parse().unwrap();
//! assert_eq!(vg.primary, Winding::Delta);
//! assert_eq!(vg.secondary, Winding::Star);
//! assert!(vg.secondary_neutral);
//! assert_eq!(vg.phase_shift_degrees(), 330);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calculations::transformer::{Phase, TransformerInput};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Kilovolts, Volts};

// ============================================================================
// Standard Values
// ============================================================================

/// Common HV (primary) system voltages in the UK/IEC world (V)
pub const STANDARD_PRIMARY_VOLTAGES: [f64; 7] = [400.0, 3300.0, 6600.0, 11_000.0, 20_000.0, 33_000.0, 66_000.0];

/// Common LV (secondary) voltages (V)
pub const STANDARD_SECONDARY_VOLTAGES: [f64; 7] = [110.0, 230.0, 400.0, 415.0, 433.0, 690.0, 3300.0];

/// Standard kVA ratings (IEC 60076 preferred series plus small single-phase sizes)
pub const STANDARD_KVA_RATINGS: [f64; 22] = [
    5.0, 10.0, 15.0, 25.0, 50.0, 100.0, 160.0, 200.0, 250.0, 315.0, 400.0,
    500.0, 630.0, 800.0, 1000.0, 1250.0, 1600.0, 2000.0, 2500.0, 3150.0, 4000.0, 5000.0,
];

/// Standard protective device ratings (A), ascending
pub const STANDARD_DEVICE_RATINGS: [u32; 29] = [
    6, 10, 16, 20, 25, 32, 40, 50, 63, 80, 100, 125, 160, 200, 250, 315, 400,
    500, 630, 800, 1000, 1250, 1600, 2000, 2500, 3200, 4000, 5000, 6300,
];

/// Commonly specified connection codes with a short description
pub const CONNECTION_TYPES: [(&str, &str); 9] = [
    ("Dyn11", "Delta HV, star LV with neutral, -30° (UK distribution standard)"),
    ("Dyn1", "Delta HV, star LV with neutral, +30°"),
    ("Dyn5", "Delta HV, star LV with neutral, 150°"),
    ("Yyn0", "Star HV, star LV with neutral, 0°"),
    ("Yd1", "Star HV, delta LV, +30°"),
    ("Yd11", "Star HV, delta LV, -30°"),
    ("Dd0", "Delta HV, delta LV, 0°"),
    ("Yzn11", "Star HV, zigzag LV with neutral, -30°"),
    ("Ii0", "Single-phase, 0°"),
];

/// Display a voltage the way nameplates do ("400 V", "11 kV")
pub fn format_voltage(volts: f64) -> String {
    if volts >= 1000.0 {
        let kv: Kilovolts = Volts(volts).into();
        format!("{} kV", kv.value())
    } else {
        format!("{} V", volts)
    }
}

/// Typical (minimum) percent impedance by rating per IEC 60076-5 Table 1
pub fn typical_percent_impedance(kva: f64) -> f64 {
    match kva {
        k if k <= 630.0 => 4.0,
        k if k <= 1250.0 => 5.0,
        k if k <= 2500.0 => 6.0,
        k if k <= 6300.0 => 7.0,
        k if k <= 25_000.0 => 8.0,
        _ => 10.0,
    }
}

// ============================================================================
// Vector Groups
// ============================================================================

/// Winding connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// D / d
    Delta,
    /// Y / y
    Star,
    /// Z / z
    Zigzag,
    /// I / i - single-phase winding
    Single,
}

impl Winding {
    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'd' => Some(Winding::Delta),
            'y' => Some(Winding::Star),
            'z' => Some(Winding::Zigzag),
            'i' => Some(Winding::Single),
            _ => None,
        }
    }

    fn letter(&self) -> char {
        match self {
            Winding::Delta => 'd',
            Winding::Star => 'y',
            Winding::Zigzag => 'z',
            Winding::Single => 'i',
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Winding::Delta => "Delta",
            Winding::Star => "Star",
            Winding::Zigzag => "Zigzag",
            Winding::Single => "Single-phase",
        }
    }
}

/// Parsed vector group code (e.g. "Dyn11")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorGroup {
    pub primary: Winding,
    pub primary_neutral: bool,
    pub secondary: Winding,
    pub secondary_neutral: bool,
    /// Clock number 0-11
    pub clock: u8,
}

impl VectorGroup {
    /// Phase displacement of LV behind HV, in degrees
    pub fn phase_shift_degrees(&self) -> u16 {
        u16::from(self.clock) * 30
    }

    /// True if either winding is delta (circulates triplen harmonics)
    pub fn has_delta(&self) -> bool {
        self.primary == Winding::Delta || self.secondary == Winding::Delta
    }

    /// True if the secondary provides a neutral point for earthing
    pub fn secondary_earthable(&self) -> bool {
        self.secondary_neutral || self.secondary == Winding::Single
    }
}

impl FromStr for VectorGroup {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let code = s.trim();
        let invalid = |reason: &str| CalcError::invalid_input("connection_type", code, reason);

        let chars: Vec<char> = code.chars().collect();
        let mut idx = 0;

        let primary = chars
            .get(idx)
            .and_then(|c| Winding::from_letter(*c))
            .ok_or_else(|| invalid("Expected HV winding letter D, Y, Z or I"))?;
        idx += 1;

        // An 'N' here is the HV neutral only if a winding letter follows it
        let primary_neutral = matches!(chars.get(idx), Some('N') | Some('n'))
            && chars.get(idx + 1).and_then(|c| Winding::from_letter(*c)).is_some();
        if primary_neutral {
            idx += 1;
        }

        let secondary = chars
            .get(idx)
            .and_then(|c| Winding::from_letter(*c))
            .ok_or_else(|| invalid("Expected LV winding letter d, y, z or i"))?;
        idx += 1;

        let secondary_neutral = matches!(chars.get(idx), Some('n') | Some('N'));
        if secondary_neutral {
            idx += 1;
        }

        let digits: String = chars[idx..].iter().collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("Expected clock number 0-11"));
        }
        let clock: u8 = digits.parse().map_err(|_| invalid("Expected clock number 0-11"))?;
        if clock > 11 {
            return Err(invalid("Clock number must be 0-11"));
        }

        if (primary == Winding::Single) != (secondary == Winding::Single) {
            return Err(invalid("Single-phase windings cannot be mixed with three-phase"));
        }

        Ok(VectorGroup {
            primary,
            primary_neutral,
            secondary,
            secondary_neutral,
            clock,
        })
    }
}

impl fmt::Display for VectorGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary.letter().to_ascii_uppercase())?;
        if self.primary_neutral {
            write!(f, "N")?;
        }
        write!(f, "{}", self.secondary.letter())?;
        if self.secondary_neutral {
            write!(f, "n")?;
        }
        write!(f, "{}", self.clock)
    }
}

// ============================================================================
// Named Presets
// ============================================================================

/// A named, ready-to-calculate transformer configuration
#[derive(Debug, Clone, Copy)]
pub struct TransformerPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub primary_voltage: f64,
    pub secondary_voltage: f64,
    pub kva_rating: f64,
    pub phase: Phase,
    pub percent_impedance: f64,
    pub connection_type: &'static str,
}

impl TransformerPreset {
    /// All built-in presets
    pub const ALL: [TransformerPreset; 5] = [
        TransformerPreset {
            name: "distribution-500",
            description: "11 kV / 400 V 500 kVA ground-mounted distribution transformer",
            primary_voltage: 11_000.0,
            secondary_voltage: 400.0,
            kva_rating: 500.0,
            phase: Phase::Three,
            percent_impedance: 6.0,
            connection_type: "Dyn11",
        },
        TransformerPreset {
            name: "distribution-1000",
            description: "11 kV / 433 V 1000 kVA package substation",
            primary_voltage: 11_000.0,
            secondary_voltage: 433.0,
            kva_rating: 1000.0,
            phase: Phase::Three,
            percent_impedance: 5.0,
            connection_type: "Dyn11",
        },
        TransformerPreset {
            name: "site-110v",
            description: "230 V / 110 V 5 kVA centre-tapped site transformer",
            primary_voltage: 230.0,
            secondary_voltage: 110.0,
            kva_rating: 5.0,
            phase: Phase::Single,
            percent_impedance: 4.0,
            connection_type: "Ii0",
        },
        TransformerPreset {
            name: "isolation-400",
            description: "400 V / 400 V 100 kVA isolation transformer",
            primary_voltage: 400.0,
            secondary_voltage: 400.0,
            kva_rating: 100.0,
            phase: Phase::Three,
            percent_impedance: 4.0,
            connection_type: "Dyn11",
        },
        TransformerPreset {
            name: "data-centre-2500",
            description: "11 kV / 400 V 2500 kVA data-centre supply transformer",
            primary_voltage: 11_000.0,
            secondary_voltage: 400.0,
            kva_rating: 2500.0,
            phase: Phase::Three,
            percent_impedance: 6.0,
            connection_type: "Dyn11",
        },
    ];

    /// Look up a preset by name (case-insensitive)
    pub fn by_name(name: &str) -> CalcResult<TransformerPreset> {
        Self::ALL
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| CalcError::preset_not_found(name))
    }

    /// Build a calculation input from this preset at reference site conditions
    pub fn to_input(&self) -> TransformerInput {
        TransformerInput {
            primary_voltage: self.primary_voltage,
            secondary_voltage: self.secondary_voltage,
            kva_rating: self.kva_rating,
            phase: self.phase,
            percent_impedance: self.percent_impedance,
            connection_type: self.connection_type.to_string(),
            ..TransformerInput::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_ratings_ascending() {
        for pair in STANDARD_DEVICE_RATINGS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_parse_common_groups() {
        let yyn0: VectorGroup = "Yyn0".parse().unwrap();
        assert_eq!(yyn0.primary, Winding::Star);
        assert!(!yyn0.primary_neutral);
        assert!(yyn0.secondary_neutral);
        assert_eq!(yyn0.clock, 0);
        assert!(!yyn0.has_delta());

        let ynd1: VectorGroup = "YNd1".parse().unwrap();
        assert!(ynd1.primary_neutral);
        assert_eq!(ynd1.secondary, Winding::Delta);
        assert!(!ynd1.secondary_earthable());
    }

    #[test]
    fn test_every_listed_connection_type_parses() {
        for (code, _) in CONNECTION_TYPES {
            let vg: VectorGroup = code.parse().unwrap();
            assert_eq!(vg.to_string(), code);
        }
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<VectorGroup>().is_err());
        assert!("Dyn".parse::<VectorGroup>().is_err());
        assert!("Dyn12".parse::<VectorGroup>().is_err());
        assert!("Xyn11".parse::<VectorGroup>().is_err());
        assert!("Dyn11x".parse::<VectorGroup>().is_err());
        assert!("Di0".parse::<VectorGroup>().is_err());

        let err = "Qd1".parse::<VectorGroup>().unwrap_err();
        assert_eq!(err.field(), Some("connection_type"));
    }

    #[test]
    fn test_typical_percent_impedance() {
        assert_eq!(typical_percent_impedance(500.0), 4.0);
        assert_eq!(typical_percent_impedance(1000.0), 5.0);
        assert_eq!(typical_percent_impedance(2500.0), 6.0);
        assert_eq!(typical_percent_impedance(40_000.0), 10.0);
    }

    #[test]
    fn test_format_voltage() {
        assert_eq!(format_voltage(400.0), "400 V");
        assert_eq!(format_voltage(11_000.0), "11 kV");
        assert_eq!(format_voltage(3300.0), "3.3 kV");
    }

    #[test]
    fn test_preset_lookup() {
        let preset = TransformerPreset::by_name("Distribution-500").unwrap();
        let input = preset.to_input();
        assert_eq!(input.kva_rating, 500.0);
        assert_eq!(input.frequency, 50.0);
        assert_eq!(input.source_fault_level, None);

        let err = TransformerPreset::by_name("nope").unwrap_err();
        assert_eq!(err.error_code(), "PRESET_NOT_FOUND");
    }

    #[test]
    fn test_all_presets_are_valid() {
        for preset in TransformerPreset::ALL {
            assert!(preset.to_input().validate().is_ok(), "{} invalid", preset.name);
            assert!(preset.connection_type.parse::<VectorGroup>().is_ok());
        }
    }
}
