//! Ignores command implementation.

use anyhow::Result;
use flatlint::FlatConfigBuilder;
use std::path::Path;

use crate::OutputFormat;

/// Runs the ignores command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    ignore: Vec<String>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut options = crate::config_resolver::load(path, config_path)?;
    if !ignore.is_empty() {
        options.ignores = ignore;
    }

    let globs = FlatConfigBuilder::from_options(options)
        .ignores_layer()
        .map(|layer| layer.ignores)
        .unwrap_or_default();

    if globs.is_empty() {
        tracing::info!("No ignore patterns found for {}", path.display());
    }

    super::output::print_globs(&globs, format)
}
