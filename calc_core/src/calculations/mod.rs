//! # Transformer Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Modules
//!
//! - [`transformer`] - Electrical parameter engine
//! - [`advisory`] - Warning and recommendation rule tables
//! - [`compliance`] - Status, protective device and breaking capacity lookups

pub mod advisory;
pub mod compliance;
pub mod transformer;

// Re-export commonly used types
pub use compliance::{
    compliance_status, recommended_breaking_capacity, recommended_device_rating, BreakingCapacity,
    ComplianceReport, ComplianceStatus, DeviceSelection,
};
pub use transformer::{calculate, Phase, TransformerInput, TransformerResult, TransformerType};
