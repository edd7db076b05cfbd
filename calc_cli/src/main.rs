//! # Sparkline CLI
//!
//! Terminal front end for `calc_core`.
//!
//! ```text
//! calc_cli calculate --preset distribution-500
//! calc_cli calculate --input transformer.json --format json
//! calc_cli calculate --primary-voltage 11000 --secondary-voltage 400 --kva 500 \
//!     --power-factor 0.85 --phase three --impedance 6
//! calc_cli presets
//! calc_cli equations
//! ```

mod config;
mod render;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use calc_core::calculations::{calculate, ComplianceReport, TransformerInput};
use calc_core::equations::generate_equations_markdown;
use calc_core::form::TransformerForm;
use calc_core::presets::{
    format_voltage, typical_percent_impedance, CONNECTION_TYPES, STANDARD_DEVICE_RATINGS, STANDARD_KVA_RATINGS,
    STANDARD_PRIMARY_VOLTAGES, STANDARD_SECONDARY_VOLTAGES,
};
use calc_core::{CalcError, TransformerPreset};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, OutputFormat};
use crate::render::Report;

#[derive(Debug, Parser)]
#[command(name = "calc_cli", version, about = "Transformer electrical calculations")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Calculate a transformer from a preset, a JSON file or flags
    Calculate(CalculateArgs),
    /// List named presets and standard values
    Presets,
    /// Print the equation reference as markdown
    Equations {
        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
struct CalculateArgs {
    /// Start from a named preset
    #[arg(long, conflicts_with = "input")]
    preset: Option<String>,

    /// Start from a JSON input file
    #[arg(long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Primary voltage (V)
    #[arg(long)]
    primary_voltage: Option<String>,

    /// Secondary voltage (V)
    #[arg(long)]
    secondary_voltage: Option<String>,

    /// Rating (kVA)
    #[arg(long)]
    kva: Option<String>,

    /// Load power factor
    #[arg(long)]
    power_factor: Option<String>,

    /// single or three
    #[arg(long)]
    phase: Option<String>,

    /// Supply frequency (Hz)
    #[arg(long)]
    frequency: Option<String>,

    /// Percent impedance (with --kva and no preset or file, defaults to the typical value)
    #[arg(long)]
    impedance: Option<String>,

    /// Upstream fault level (MVA)
    #[arg(long)]
    source_fault_level: Option<String>,

    /// Ambient temperature (°C)
    #[arg(long)]
    ambient_temp: Option<String>,

    /// Altitude (m)
    #[arg(long)]
    altitude: Option<String>,

    /// Non-linear load present
    #[arg(long)]
    harmonics: bool,

    /// Vector group, e.g. Dyn11
    #[arg(long)]
    connection_type: Option<String>,

    /// Output format (defaults to the config file, then text)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl CalculateArgs {
    /// Overlay any flags given on the command line onto the form
    fn apply_to(&self, form: &mut TransformerForm) {
        let overrides = [
            (&self.primary_voltage, &mut form.primary_voltage),
            (&self.secondary_voltage, &mut form.secondary_voltage),
            (&self.kva, &mut form.kva_rating),
            (&self.power_factor, &mut form.power_factor),
            (&self.phase, &mut form.phase),
            (&self.frequency, &mut form.frequency),
            (&self.impedance, &mut form.percent_impedance),
            (&self.source_fault_level, &mut form.source_fault_level),
            (&self.ambient_temp, &mut form.ambient_temp),
            (&self.altitude, &mut form.altitude),
            (&self.connection_type, &mut form.connection_type),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
        if self.harmonics {
            form.harmonics = "yes".to_string();
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the calculation input: preset or file, then site defaults, then flags
fn build_input(args: &CalculateArgs, config: &CliConfig) -> Result<TransformerInput> {
    let base = if let Some(name) = &args.preset {
        info!(preset = %name, "starting from preset");
        let mut input = TransformerPreset::by_name(name)?.to_input();
        config.site.apply(&mut input);
        input
    } else if let Some(path) = &args.input {
        info!(path = %path.display(), "reading input file");
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display()))?;
        TransformerInput::from_json(&json)
            .with_context(|| format!("invalid transformer input in {}", path.display()))?
    } else {
        debug!("no preset or input file, starting from defaults");
        let mut input = TransformerInput::default();
        config.site.apply(&mut input);
        input
    };

    let mut form = TransformerForm::from_input(&base);
    args.apply_to(&mut form);

    let from_flags = args.preset.is_none() && args.input.is_none();
    if from_flags && args.kva.is_some() && args.impedance.is_none() {
        if let Ok(kva) = form.kva_rating.trim().parse::<f64>() {
            let typical = typical_percent_impedance(kva);
            info!(kva, percent_impedance = typical, "no impedance given, using typical value for rating");
            form.percent_impedance = typical.to_string();
        }
    }

    Ok(form.parse()?)
}

fn run_calculate(args: &CalculateArgs, config: &CliConfig) -> Result<()> {
    let input = build_input(args, config)?;
    debug!(?input, "resolved input");

    let result = calculate(&input).context("calculation failed")?;
    let compliance = ComplianceReport::from_result(&result);
    info!(
        status = %compliance.status,
        warnings = result.warnings.len(),
        "calculation complete"
    );

    let report = Report {
        input: &input,
        result: &result,
        compliance: &compliance,
    };
    match args.format.unwrap_or(config.format) {
        OutputFormat::Text => print!("{}", render::text(&report)?),
        OutputFormat::Json => println!("{}", render::json(&report)?),
    }
    Ok(())
}

fn join_voltages(values: &[f64]) -> String {
    values.iter().map(|v| format_voltage(*v)).collect::<Vec<_>>().join(", ")
}

fn run_presets() {
    println!("Named presets:");
    for preset in TransformerPreset::ALL {
        println!("  {:<18} {}", preset.name, preset.description);
    }

    println!();
    println!("Primary voltages:   {}", join_voltages(&STANDARD_PRIMARY_VOLTAGES));
    println!("Secondary voltages: {}", join_voltages(&STANDARD_SECONDARY_VOLTAGES));
    println!(
        "kVA ratings:        {}",
        STANDARD_KVA_RATINGS.iter().map(|k| k.to_string()).collect::<Vec<_>>().join(", ")
    );
    println!(
        "Device ratings (A): {}",
        STANDARD_DEVICE_RATINGS.iter().map(|a| a.to_string()).collect::<Vec<_>>().join(", ")
    );

    println!();
    println!("Connection types:");
    for (code, description) in CONNECTION_TYPES {
        println!("  {:<6} {}", code, description);
    }
}

fn run_equations(output: Option<&PathBuf>) -> Result<()> {
    let markdown = generate_equations_markdown();
    match output {
        Some(path) => {
            fs::write(path, &markdown).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = markdown.len(), "wrote equation reference");
        }
        None => print!("{}", markdown),
    }
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    debug!(?config, "loaded configuration");

    match &cli.command {
        Commands::Calculate(args) => run_calculate(args, &config),
        Commands::Presets => {
            run_presets();
            Ok(())
        }
        Commands::Equations { output } => run_equations(output.as_ref()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            if let Some(calc) = err.downcast_ref::<CalcError>() {
                if let Ok(json) = serde_json::to_string_pretty(calc) {
                    eprintln!();
                    eprintln!("Error JSON:");
                    eprintln!("{}", json);
                }
            }
            ExitCode::FAILURE
        }
    }
}
