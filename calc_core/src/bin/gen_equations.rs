//! Generate EQUATIONS.md from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations              # default location
//! cargo run --bin gen-equations -- out.md    # custom path
//! ```
//!
//! The default output is `calc_core/src/equations/EQUATIONS.md`, relative to
//! the workspace root.

use std::env;
use std::fs;
use std::path::PathBuf;

use calc_core::equations::{generate_equations_markdown, Equation, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "calc_core/src/equations/EQUATIONS.md";

fn main() {
    let output_path = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    println!(
        "Generating equation reference ({} equations, {} estimates)...",
        ALL_EQUATIONS.len(),
        Equation::approximations().len()
    );

    let markdown = generate_equations_markdown();

    if let Err(e) = fs::write(&output_path, &markdown) {
        eprintln!("Error writing {}: {}", output_path.display(), e);
        std::process::exit(1);
    }

    println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
}
