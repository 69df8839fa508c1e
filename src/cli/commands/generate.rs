//! Generate command handler
//!
//! Loads configuration, scans the target directory and writes the
//! interface text. Nothing is written unless the whole scan succeeds.

use crate::cli::args::Cli;
use crate::config::{discover_config, load_config_from, GoifaceConfig};
use crate::extraction::extract_directory;
use crate::generation::InterfaceGenerator;
use crate::io::OutputDestination;
use anyhow::{Context, Result};

/// Resolve the effective configuration for this invocation
pub fn resolve_config(cli: &Cli) -> Result<GoifaceConfig> {
    let base = match &cli.config {
        Some(path) => load_config_from(path)?,
        None => discover_config(&cli.target),
    };
    Ok(cli.apply_overrides(base))
}

/// Produce the interface text for `cli.target`
pub fn generate_text(cli: &Cli) -> Result<String> {
    let config = resolve_config(cli)?;
    let set = extract_directory(&cli.target, &config)?;
    Ok(InterfaceGenerator::new(config.indent).generate(&set))
}

pub fn handle_generate_command(cli: Cli) -> Result<()> {
    let text = generate_text(&cli)?;
    let destination = OutputDestination::from_option(cli.output);
    destination
        .write(&text)
        .with_context(|| format!("Failed to write output to {:?}", destination))
}
