//! Print command implementation.

use anyhow::Result;
use flatlint::FlatConfigBuilder;
use std::path::Path;

use crate::OutputFormat;

/// Runs the print command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    ignore: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut options = crate::config_resolver::load(path, config_path)?;

    // Command-line ignores replace configured ones
    if !ignore.is_empty() {
        options.ignores = ignore;
    }

    let flat = FlatConfigBuilder::from_options(options).build();
    tracing::debug!("Printing {} layers", flat.len());

    super::output::print_config(&flat, format)
}
