//! # flatlint
//!
//! Opinionated, shareable ESLint flat config and Prettier options for
//! TypeScript projects.
//!
//! This is the main facade crate that re-exports core types and rule tables
//! and assembles the complete config.
//!
//! ## Quick Start
//!
//! ```no_run
//! use flatlint::{config, ConfigLayer, Options, RuleEntry, RuleLevel};
//!
//! let scripts = ConfigLayer::named("scripts")
//!     .files(["scripts/**/*.ts"])
//!     .rules([("no-console".to_string(), RuleEntry::new(RuleLevel::Off))].into());
//!
//! let flat = config(Options::default(), [scripts]);
//! println!("{}", flat.to_json_pretty()?);
//! # Ok::<(), serde_json::Error>(())
//! ```
//!
//! ## Ignores
//!
//! Unless explicit ignores are given, every `.gitignore` from the project
//! root up to the filesystem root is translated into ignore globs. See
//! [`IgnoreResolver`].
//!
//! ## Programmatic Usage
//!
//! ```no_run
//! use flatlint::FlatConfigBuilder;
//!
//! let flat = FlatConfigBuilder::new()
//!     .root("./web")
//!     .docs(["src", "lib"])
//!     .ignore("dist/**")
//!     .build();
//! assert!(flat.len() > 3);
//! ```

#![forbid(unsafe_code)]

// Re-export core types
pub use flatlint_core::*;

/// Rule tables and preset references.
pub mod rules {
    pub use flatlint_rules::*;
}

mod builder;

pub use builder::{
    config, docs_layer, FlatConfigBuilder, BASE_LAYER, DOCS_LAYER, JSX_LAYER, PRETTIER_LAYER,
    TYPESCRIPT_LAYER,
};
