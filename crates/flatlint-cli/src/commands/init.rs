//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# flatlint configuration
# Options for the generated ESLint flat config.

# Project root (default: directory of this file)
# root = "."

# Ignore globs. When set, .gitignore files are not scanned.
# ignores = ["dist/**", "coverage/**"]

# Ignore file read in the root and every parent directory
ignore_file = ".gitignore"

# Stop scanning for ignore files after this many parent directories
# max_ignore_depth = 3

# Directories whose exported declarations must have doc comments
docs = ["src"]

# Extra layers, appended after the built-in ones
# Rule settings use ESLint's shape: "off" | "warn" | "error",
# or [level, options...]

# [[layers]]
# name = "scripts"
# files = ["scripts/**/*.ts"]
#
# [layers.rules]
# "no-console" = "off"
# "unicorn/filename-case" = ["warn", { case = "kebabCase" }]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("flatlint.toml"), force)?;

    println!("Created flatlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit flatlint.toml to adjust ignores, docs and layers");
    println!("  2. Run: flatlint print > eslint.config.json");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
