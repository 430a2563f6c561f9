//! # flatlint-rules
//!
//! Curated rule tables and preset references for flatlint.
//!
//! ## Tables
//!
//! | Table | Applies to | Contents |
//! |-------|------------|----------|
//! | `base` | `**/*.{ts,js,tsx,jsx}` | import sorting, deprecation, `@typescript-eslint` overrides, jsdoc, unicorn |
//! | `typescript` | `**/*.{ts,tsx}` | type-aware `@typescript-eslint` rules |
//! | `docs` | docs directories | `jsdoc/require-jsdoc` on exports |
//!
//! ## Usage
//!
//! ```
//! use flatlint_rules::{base_rules, Preset};
//!
//! let rules = base_rules();
//! assert!(rules.contains_key("imports/imports"));
//! assert_eq!(Preset::TsStrict.reference(), "typescript-eslint:strict");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod base;
mod jsdoc;
mod presets;
mod unicorn;

pub use base::{base_rules, typescript_adjustments, typescript_rules};
pub use jsdoc::{docs_rules, jsdoc_rules, jsdoc_settings};
pub use presets::{Plugin, Preset, BASE_PLUGINS};
pub use unicorn::unicorn_rules;

/// Re-export core types for convenience.
pub use flatlint_core::{RuleEntry, RuleLevel, RuleTable};

/// Every named rule table, for listing.
#[must_use]
pub fn all_rule_tables() -> Vec<(&'static str, RuleTable)> {
    vec![
        ("base", base_rules()),
        ("typescript", typescript_rules()),
        ("docs", docs_rules()),
    ]
}

pub(crate) fn rule_name(plugin: Plugin, rule: &str) -> String {
    format!("{}/{rule}", plugin.alias())
}

pub(crate) fn table(plugin: Plugin, entries: &[(&str, RuleLevel)]) -> RuleTable {
    entries
        .iter()
        .map(|(rule, level)| (rule_name(plugin, rule), RuleEntry::new(*level)))
        .collect()
}
