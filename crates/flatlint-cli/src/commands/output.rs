//! Shared output formatting for printed configs.

use anyhow::Result;
use flatlint::{FlatConfig, FormatterConfig};
use serde::Serialize;

use crate::OutputFormat;

/// Print the flat config in the specified format.
///
/// Text output lists one layer per line with its scope and rule count.
pub fn print_config(config: &FlatConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for layer in config {
                let name = layer.name.as_deref().unwrap_or("(unnamed)");
                let scope = if layer.is_global_ignore() {
                    format!("ignores {} glob(s)", layer.ignores.len())
                } else if layer.files.is_empty() {
                    "all files".to_string()
                } else {
                    layer.files.join(", ")
                };
                println!("{name:<22} {scope} [{} rule(s)]", layer.rules.len());
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Compact => print_json(config, format),
    }
}

/// Print ignore globs in the specified format.
pub fn print_globs(globs: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for glob in globs {
                println!("{glob}");
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Compact => print_json(globs, format),
    }
}

/// Print the formatter options in the specified format.
pub fn print_formatter(config: &FormatterConfig, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            let value = serde_json::to_value(config)?;
            if let Some(map) = value.as_object() {
                for (key, value) in map {
                    println!("{key}: {value}");
                }
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Compact => print_json(config, format),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<()> {
    let json = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        _ => serde_json::to_string_pretty(value)?,
    };
    println!("{json}");
    Ok(())
}
