//! # flatlint-core
//!
//! Core types for building ESLint flat configs.
//!
//! This crate provides:
//!
//! - [`ConfigLayer`] and [`FlatConfig`] for the flat config array
//! - [`RuleLevel`] and [`RuleEntry`] for rule settings
//! - [`IgnoreResolver`] for turning `.gitignore` files into ignore globs
//! - [`Options`] loaded from `flatlint.toml`
//! - [`FormatterConfig`] with the shared Prettier options
//!
//! ## Example
//!
//! ```no_run
//! use flatlint_core::IgnoreResolver;
//! use std::path::Path;
//!
//! let globs = IgnoreResolver::new().scan(Path::new("."));
//! for glob in globs {
//!     println!("{glob}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod formatter;
mod fs;
mod ignores;
mod types;

pub use config::{ConfigError, Options};
pub use formatter::{ArrowParens, EndOfLine, FormatterConfig, ProseWrap, QuoteProps, TrailingComma};
pub use fs::{Filesystem, OsFilesystem};
pub use ignores::{
    parse_ignore_file, resolve_ignores, ExclusionEntry, IgnoreResolver, DEFAULT_IGNORE_FILE,
    IGNORES_LAYER_NAME,
};
pub use types::{ConfigLayer, FlatConfig, RuleEntry, RuleLevel, RuleTable};
