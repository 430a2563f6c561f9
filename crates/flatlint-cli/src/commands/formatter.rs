//! Formatter command implementation.

use anyhow::Result;
use flatlint::FormatterConfig;

use crate::OutputFormat;

/// Runs the formatter command.
pub fn run(format: OutputFormat) -> Result<()> {
    super::output::print_formatter(&FormatterConfig::default(), format)
}
