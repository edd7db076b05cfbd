//! # Unit Types
//!
//! Type-safe wrappers for electrical units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Transformer calculations use a small, consistent set of SI units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Nameplate data mixes scales (kVA ratings, MVA fault levels, kA breaking
//! capacities), so the wrappers mostly exist to make those conversions explicit.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Kva, Mva, VoltAmps};
//!
//! let rating = Kva(500.0);
//! let va: VoltAmps = rating.into();
//! assert_eq!(va.0, 500_000.0);
//!
//! let fault_level: VoltAmps = Mva(250.0).into();
//! assert_eq!(fault_level.0, 250_000_000.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Voltage Units
// ============================================================================

/// Potential in volts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Volts(pub f64);

/// Potential in kilovolts
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilovolts(pub f64);

impl From<Kilovolts> for Volts {
    fn from(kv: Kilovolts) -> Self {
        Volts(kv.0 * 1000.0)
    }
}

impl From<Volts> for Kilovolts {
    fn from(v: Volts) -> Self {
        Kilovolts(v.0 / 1000.0)
    }
}

// ============================================================================
// Current Units
// ============================================================================

/// Current in amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amps(pub f64);

/// Current in kiloamperes (breaking capacities are quoted in kA)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kiloamps(pub f64);

impl From<Amps> for Kiloamps {
    fn from(a: Amps) -> Self {
        Kiloamps(a.0 / 1000.0)
    }
}

impl From<Kiloamps> for Amps {
    fn from(ka: Kiloamps) -> Self {
        Amps(ka.0 * 1000.0)
    }
}

// ============================================================================
// Apparent Power Units
// ============================================================================

/// Apparent power in volt-amperes
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoltAmps(pub f64);

/// Apparent power in kilovolt-amperes (nameplate rating)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kva(pub f64);

/// Apparent power in megavolt-amperes (fault levels)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mva(pub f64);

impl From<Kva> for VoltAmps {
    fn from(kva: Kva) -> Self {
        VoltAmps(kva.0 * 1000.0)
    }
}

impl From<VoltAmps> for Kva {
    fn from(va: VoltAmps) -> Self {
        Kva(va.0 / 1000.0)
    }
}

impl From<Mva> for VoltAmps {
    fn from(mva: Mva) -> Self {
        VoltAmps(mva.0 * 1_000_000.0)
    }
}

impl From<Mva> for Kva {
    fn from(mva: Mva) -> Self {
        Kva(mva.0 * 1000.0)
    }
}

impl From<Kva> for Mva {
    fn from(kva: Kva) -> Self {
        Mva(kva.0 / 1000.0)
    }
}

// ============================================================================
// Impedance
// ============================================================================

/// Impedance in ohms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ohms(pub f64);

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Volts);
impl_arithmetic!(Kilovolts);
impl_arithmetic!(Amps);
impl_arithmetic!(Kiloamps);
impl_arithmetic!(VoltAmps);
impl_arithmetic!(Kva);
impl_arithmetic!(Mva);
impl_arithmetic!(Ohms);
