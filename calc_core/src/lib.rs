//! # calc_core - Transformer Calculation Engine
//!
//! `calc_core` derives the electrical parameters of a power transformer
//! (rated currents, power, losses, fault level, regulation, inrush and
//! derating) with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it easy to drive from scripts, a CLI or an AI
//! assistant.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every formula is registered with its reference
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{calculate, ComplianceReport, TransformerInput};
//!
//! // 11 kV / 400 V, 500 kVA, 6 % Dyn11
//! let input = TransformerInput::default();
//! let result = calculate(&input).unwrap();
//! let report = ComplianceReport::from_result(&result);
//!
//! println!("Secondary current: {:.1} A", result.secondary_rated_current);
//! println!("Protective device: {}", report.protective_device);
//!
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Engine, advisory rules and compliance lookups
//! - [`equations`] - Closed-form formulas and the equation registry
//! - [`derating`] - Site-condition derating factors
//! - [`presets`] - Standard values, vector groups and named transformers
//! - [`form`] - Text form parsing at the input boundary
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod derating;
pub mod equations;
pub mod errors;
pub mod form;
pub mod presets;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, TransformerInput, TransformerResult};
pub use errors::{CalcError, CalcResult};
pub use presets::{TransformerPreset, VectorGroup};
