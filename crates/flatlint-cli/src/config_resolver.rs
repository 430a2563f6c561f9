//! Configuration file resolution with global fallback.
//!
//! Resolves the options file using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. nearest `flatlint.toml` or `.flatlint.toml`, from the project
//!    directory upwards
//! 3. `~/.flatlint/config.toml` (global fallback)
//! 4. No config found → defaults

use anyhow::{Context, Result};
use flatlint::Options;
use std::path::{Path, PathBuf};

/// Where the options were found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.flatlint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }
}

/// Project-level config file names, checked in order within each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["flatlint.toml", ".flatlint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the options file.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    let start = std::fs::canonicalize(project_dir).unwrap_or_else(|_| project_dir.to_path_buf());
    for dir in start.ancestors() {
        if let Some(candidate) = PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    if let Some(candidate) = global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
    {
        tracing::debug!("Found global config: {}", candidate.display());
        return ConfigSource::Global(candidate);
    }

    ConfigSource::Default
}

/// Loads options for a project.
///
/// A relative `root` in a project or explicit config file is taken relative
/// to that file. Without a configured root, `project_dir` is the root. The
/// resulting root is always absolute.
///
/// # Errors
///
/// Returns an error if the resolved file cannot be read or parsed.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Options> {
    let source = resolve(project_dir, explicit);
    match source.path() {
        Some(p) => tracing::debug!("Loading options from {}", p.display()),
        None => tracing::debug!("No config file found, using defaults"),
    }
    load_from(&source, project_dir)
}

fn load_from(source: &ConfigSource, project_dir: &Path) -> Result<Options> {
    let mut options = match source {
        ConfigSource::Default => Options::default(),
        ConfigSource::Global(p) => {
            tracing::info!("Using global config: {}", p.display());
            let mut options = Options::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?;
            // A global root would point every project at the same directory.
            options.root = None;
            options
        }
        ConfigSource::Explicit(p) | ConfigSource::Project(p) => {
            let mut options = Options::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?;
            if let (Some(root), Some(base)) = (options.root.as_ref(), p.parent()) {
                if root.is_relative() {
                    options.root = Some(base.join(root));
                }
            }
            options
        }
    };

    let root = options.root.take().unwrap_or_else(|| project_dir.to_path_buf());
    options.root = Some(absolute(&root));
    Ok(options)
}

/// `tsconfigRootDir` must be absolute; missing paths are joined onto the cwd.
fn absolute(path: &Path) -> PathBuf {
    std::fs::canonicalize(path)
        .or_else(|_| std::env::current_dir().map(|cwd| cwd.join(path)))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Returns the global config directory path.
///
/// Resolution: `$FLATLINT_CONFIG_DIR` > `~/.flatlint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("FLATLINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".flatlint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flatlint::{FlatConfigBuilder, BASE_LAYER};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").unwrap();
        fs::write(tmp.path().join("flatlint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn flatlint_toml_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("flatlint.toml"), "").unwrap();
        fs::write(tmp.path().join(".flatlint.toml"), "").unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        let expected = fs::canonicalize(tmp.path()).unwrap().join("flatlint.toml");
        assert_eq!(result, ConfigSource::Project(expected));
    }

    #[test]
    fn nearest_ancestor_config_wins() {
        let tmp = TempDir::new().unwrap();
        let app = tmp.path().join("packages").join("app");
        fs::create_dir_all(&app).unwrap();
        fs::write(tmp.path().join("flatlint.toml"), "").unwrap();
        fs::write(tmp.path().join("packages").join(".flatlint.toml"), "").unwrap();

        let result = resolve_inner(&app, None, None);
        let expected = fs::canonicalize(tmp.path())
            .unwrap()
            .join("packages")
            .join(".flatlint.toml");
        assert_eq!(result, ConfigSource::Project(expected));
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(
            result,
            ConfigSource::Global(global.path().join("config.toml"))
        );
    }

    #[test]
    fn global_dir_missing_config_file_returns_default() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
    }

    #[test]
    fn default_options_use_project_dir_as_root() {
        let tmp = TempDir::new().unwrap();
        let options = load_from(&ConfigSource::Default, tmp.path()).unwrap();
        assert_eq!(options.root, Some(fs::canonicalize(tmp.path()).unwrap()));
        assert_eq!(options.docs, vec!["src"]);
    }

    #[test]
    fn current_dir_root_becomes_absolute_tsconfig_root() {
        let options = load_from(&ConfigSource::Default, Path::new(".")).unwrap();
        let flat = FlatConfigBuilder::from_options(options)
            .max_ignore_depth(0)
            .build();

        let base = flat.layer(BASE_LAYER).unwrap();
        let language_options = base.language_options.as_ref().unwrap();
        let dir = language_options["parserOptions"]["tsconfigRootDir"]
            .as_str()
            .unwrap();
        assert!(Path::new(dir).is_absolute());
        let cwd = fs::canonicalize(std::env::current_dir().unwrap()).unwrap();
        assert_eq!(Path::new(dir), cwd);
    }

    #[test]
    fn relative_root_is_resolved_against_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = tmp.path().join("flatlint.toml");
        fs::write(&config, "root = \"app\"\ndocs = [\"lib\"]\n").unwrap();

        let options = load_from(&ConfigSource::Project(config), Path::new(".")).unwrap();
        assert_eq!(options.root, Some(tmp.path().join("app")));
        assert_eq!(options.docs, vec!["lib"]);
    }

    #[test]
    fn global_root_is_ignored() {
        let global = TempDir::new().unwrap();
        let config = global.path().join("config.toml");
        fs::write(&config, "root = \"/somewhere\"\n").unwrap();

        let project = TempDir::new().unwrap();
        let options = load_from(&ConfigSource::Global(config), project.path()).unwrap();
        assert_eq!(options.root, Some(fs::canonicalize(project.path()).unwrap()));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let source = ConfigSource::Explicit(PathBuf::from("/nonexistent/flatlint.toml"));
        assert!(load_from(&source, Path::new(".")).is_err());
    }

    #[test]
    fn config_source_path_returns_none_for_default() {
        assert!(ConfigSource::Default.path().is_none());
        let p = PathBuf::from("/tmp/test.toml");
        assert_eq!(ConfigSource::Global(p.clone()).path(), Some(p.as_path()));
    }
}
