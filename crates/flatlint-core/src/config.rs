//! Configuration types for flatlint.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ignores::DEFAULT_IGNORE_FILE;
use crate::types::ConfigLayer;

/// Options controlling how the flat config is assembled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Project root, used for ignore scanning and `tsconfigRootDir`.
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Ignore globs. When non-empty, replaces `.gitignore` scanning.
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Ignore file read in the root and each ancestor.
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    /// Maximum ancestors above the root to scan for ignore files.
    #[serde(default)]
    pub max_ignore_depth: Option<usize>,

    /// Directories whose exported declarations must be documented.
    #[serde(default = "default_docs")]
    pub docs: Vec<String>,

    /// Extra layers appended after the baseline.
    #[serde(default)]
    pub layers: Vec<ConfigLayer>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root: None,
            ignores: Vec::new(),
            ignore_file: default_ignore_file(),
            max_ignore_depth: None,
            docs: default_docs(),
            layers: Vec::new(),
        }
    }
}

impl Options {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads options from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses options from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// The project root, defaulting to the current directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_deref().unwrap_or_else(|| Path::new("."))
    }

    /// Explicit ignores, if any were configured.
    #[must_use]
    pub fn explicit_ignores(&self) -> Option<&[String]> {
        if self.ignores.is_empty() {
            None
        } else {
            Some(&self.ignores)
        }
    }
}

fn default_ignore_file() -> String {
    DEFAULT_IGNORE_FILE.to_string()
}

fn default_docs() -> Vec<String> {
    vec!["src".to_string()]
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RuleLevel;

    #[test]
    fn test_default_options() {
        let options = Options::default();
        assert_eq!(options.root(), Path::new("."));
        assert_eq!(options.ignore_file, ".gitignore");
        assert_eq!(options.docs, vec!["src"]);
        assert!(options.explicit_ignores().is_none());
    }

    #[test]
    fn test_parse_options() {
        let toml = r#"
root = "./web"
ignores = ["dist/**"]
docs = ["src", "lib"]
max_ignore_depth = 2

[[layers]]
files = ["scripts/**/*.ts"]

[layers.rules]
"no-console" = "off"
"unicorn/filename-case" = ["warn", { case = "kebabCase" }]
"#;

        let options = Options::parse(toml).expect("Failed to parse");
        assert_eq!(options.root(), Path::new("./web"));
        assert_eq!(options.explicit_ignores(), Some(&["dist/**".to_string()][..]));
        assert_eq!(options.docs, vec!["src", "lib"]);
        assert_eq!(options.max_ignore_depth, Some(2));
        assert_eq!(options.ignore_file, ".gitignore");

        let layer = &options.layers[0];
        assert_eq!(layer.files, vec!["scripts/**/*.ts"]);
        assert_eq!(layer.rules["no-console"].level, RuleLevel::Off);
        let filename_case = &layer.rules["unicorn/filename-case"];
        assert_eq!(filename_case.level, RuleLevel::Warn);
        assert_eq!(filename_case.options[0]["case"], "kebabCase");
    }

    #[test]
    fn test_parse_error() {
        let err = Options::parse("docs = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_rule_level() {
        let toml = r#"
[[layers]]
[layers.rules]
"no-console" = "loud"
"#;
        assert!(Options::parse(toml).is_err());
    }
}
