//! CLI configuration file (TOML).
//!
//! ```toml
//! format = "json"
//!
//! [site]
//! frequency = 60.0
//! ambient_temp = 45.0
//! altitude = 1500.0
//! ```
//!
//! Every key is optional; unknown keys are rejected so typos surface early.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use calc_core::TransformerInput;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Report format for `calculate`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Output format when `--format` is not given
    pub format: OutputFormat,
    /// Site defaults applied when building input from flags
    pub site: SiteDefaults,
}

/// Site conditions used when the user does not supply them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteDefaults {
    pub frequency: f64,
    pub ambient_temp: f64,
    pub altitude: f64,
}

impl Default for SiteDefaults {
    fn default() -> Self {
        let input = TransformerInput::default();
        Self {
            frequency: input.frequency,
            ambient_temp: input.ambient_temp,
            altitude: input.altitude,
        }
    }
}

impl SiteDefaults {
    /// Overlay these defaults onto an input
    pub fn apply(&self, input: &mut TransformerInput) {
        input.frequency = self.frequency;
        input.ambient_temp = self.ambient_temp;
        input.altitude = self.altitude;
    }
}

impl CliConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("invalid configuration")
    }

    /// Load from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&contents).with_context(|| format!("in {}", path.display()))
    }
}
