//! Subcommand implementations.

pub mod formatter;
pub mod ignores;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod print;
