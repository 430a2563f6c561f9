//! Ignore globs derived from `.gitignore` files.
//!
//! The resolver walks from a start directory up to the filesystem root,
//! reading the ignore file in each directory and rewriting every pattern into
//! a glob relative to the start directory:
//!
//! | Line in `.gitignore` | Depth | Emitted globs |
//! |---|---|---|
//! | `build/` | 0 | `**/build/`, `**/build/**` |
//! | `/dist` | 0 | `dist`, `dist/**` |
//! | `/dist` | 1 | `../dist`, `../dist/**` |
//! | `!keep.log` | 0 | `!**/keep.log`, `!**/keep.log/**` |
//!
//! Globs keep the order their lines were collected in, closest directory
//! first, so negations still apply after the patterns they re-include.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::fs::{Filesystem, OsFilesystem};
use crate::types::ConfigLayer;

/// Ignore file read in each directory unless configured otherwise.
pub const DEFAULT_IGNORE_FILE: &str = ".gitignore";

/// Name given to the ignores layer.
pub const IGNORES_LAYER_NAME: &str = "flatlint/ignores";

const PARENT_SEGMENT: &str = "../";
const ANY_DEPTH_PREFIX: &str = "**/";
const EVERYTHING_BENEATH: &str = "**";

/// One pattern line from an ignore file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionEntry {
    /// The line as read, without its line terminator.
    pub raw_text: String,
    /// Leading `!`: re-includes a path excluded earlier.
    pub negated: bool,
    /// Leading `/`: relative to the ignore file's own directory.
    pub anchored: bool,
    /// Trailing `/`: matches directories only.
    pub directory_only: bool,
    /// Levels above the start directory the ignore file was found at.
    pub source_depth: usize,
    pattern: String,
}

impl ExclusionEntry {
    /// Parses one line, returning `None` for blank and comment lines.
    #[must_use]
    pub fn parse(line: &str, source_depth: usize) -> Option<Self> {
        let raw_text = line.trim_end_matches(['\n', '\r']);
        let body = raw_text.trim_end();
        if body.trim_start().is_empty() || body.trim_start().starts_with('#') {
            return None;
        }

        let (negated, body) = match body.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        let (anchored, body) = match body.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, body),
        };
        if anchored && body.is_empty() {
            // "/" alone would become "" and "/**", an absolute glob.
            debug!("Skipping ignore line {raw_text:?} with an empty anchored pattern");
            return None;
        }

        Some(Self {
            raw_text: raw_text.to_string(),
            negated,
            anchored,
            directory_only: body.ends_with('/'),
            source_depth,
            pattern: body.to_string(),
        })
    }

    /// The pattern with negation and anchor markers removed.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Rewrites the entry into globs relative to the start directory.
    ///
    /// Always returns two globs: the path itself and everything beneath it.
    /// A plain name may refer to a directory, so the second form is emitted
    /// for files too.
    #[must_use]
    pub fn to_globs(&self) -> Vec<String> {
        let mut base = String::with_capacity(
            self.pattern.len() + self.source_depth * PARENT_SEGMENT.len() + 4,
        );
        if self.negated {
            base.push('!');
        }
        for _ in 0..self.source_depth {
            base.push_str(PARENT_SEGMENT);
        }
        if !self.anchored {
            base.push_str(ANY_DEPTH_PREFIX);
        }
        base.push_str(&self.pattern);

        let beneath = if self.directory_only {
            format!("{base}{EVERYTHING_BENEATH}")
        } else {
            format!("{base}/{EVERYTHING_BENEATH}")
        };
        vec![base, beneath]
    }
}

/// Parses the contents of one ignore file found `depth` levels up.
#[must_use]
pub fn parse_ignore_file(content: &str, depth: usize) -> Vec<ExclusionEntry> {
    content
        .lines()
        .filter_map(|line| ExclusionEntry::parse(line, depth))
        .collect()
}

/// Resolves the ignores layer for a project.
///
/// # Example
///
/// ```no_run
/// use flatlint_core::IgnoreResolver;
/// use std::path::Path;
///
/// let layer = IgnoreResolver::new().resolve(Path::new("./web"), None);
/// if let Some(layer) = layer {
///     println!("{} ignore globs", layer.ignores.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct IgnoreResolver<F = OsFilesystem> {
    fs: F,
    file_name: String,
    max_depth: Option<usize>,
}

impl IgnoreResolver<OsFilesystem> {
    /// Creates a resolver over the real filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::with_filesystem(OsFilesystem)
    }
}

impl Default for IgnoreResolver<OsFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> IgnoreResolver<F> {
    /// Creates a resolver over the given filesystem.
    #[must_use]
    pub fn with_filesystem(fs: F) -> Self {
        Self {
            fs,
            file_name: DEFAULT_IGNORE_FILE.to_string(),
            max_depth: None,
        }
    }

    /// Sets the ignore file name read in each directory.
    #[must_use]
    pub fn file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    /// Limits how many ancestors above the start directory are visited.
    ///
    /// `0` reads only the start directory.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Computes the ignores layer.
    ///
    /// A non-empty `explicit` list is used verbatim and no file is read.
    /// Otherwise the ancestor chain of `start` is scanned. Returns `None`
    /// when no pattern was found.
    #[must_use]
    pub fn resolve(&self, start: &Path, explicit: Option<&[String]>) -> Option<ConfigLayer> {
        if let Some(patterns) = explicit.filter(|p| !p.is_empty()) {
            debug!("Using {} explicit ignore patterns", patterns.len());
            return Some(ignores_layer(patterns.to_vec()));
        }

        let globs = self.scan(start);
        if globs.is_empty() {
            None
        } else {
            Some(ignores_layer(globs))
        }
    }

    /// Scans `start` and its ancestors, returning the translated globs.
    #[must_use]
    pub fn scan(&self, start: &Path) -> Vec<String> {
        let globs: Vec<String> = self
            .collect_entries(start)
            .iter()
            .flat_map(ExclusionEntry::to_globs)
            .collect();

        for pattern in &globs {
            if let Err(e) = glob::Pattern::new(pattern.trim_start_matches('!')) {
                debug!("Ignore glob {pattern:?} may not match as intended: {e}");
            }
        }
        globs
    }

    /// Collects the parsed entries of every ignore file from `start` upwards.
    #[must_use]
    pub fn collect_entries(&self, start: &Path) -> Vec<ExclusionEntry> {
        let mut current = self.scan_root(start);
        let mut depth = 0;
        let mut entries = Vec::new();

        loop {
            let path = current.join(&self.file_name);
            match self.fs.read_to_string(&path) {
                Ok(content) => {
                    let found = parse_ignore_file(&content, depth);
                    debug!(
                        "Read {} ignore patterns from {}",
                        found.len(),
                        path.display()
                    );
                    entries.extend(found);
                }
                Err(e) => trace!("No ignore file at {}: {}", path.display(), e),
            }

            if self.max_depth.is_some_and(|max| depth >= max) {
                break;
            }
            match current.parent() {
                Some(parent) if parent != current => {
                    current = parent.to_path_buf();
                    depth += 1;
                }
                _ => break,
            }
        }

        entries
    }

    fn scan_root(&self, start: &Path) -> PathBuf {
        if let Ok(path) = self.fs.canonicalize(start) {
            return path;
        }
        if start.is_absolute() {
            return start.to_path_buf();
        }
        self.fs
            .current_dir()
            .map_or_else(|_| start.to_path_buf(), |cwd| cwd.join(start))
    }
}

fn ignores_layer(ignores: Vec<String>) -> ConfigLayer {
    ConfigLayer {
        name: Some(IGNORES_LAYER_NAME.to_string()),
        ..ConfigLayer::ignores_only(ignores)
    }
}

/// Resolves the ignores layer using the real filesystem and `.gitignore`.
#[must_use]
pub fn resolve_ignores(start: &Path, explicit: Option<&[String]>) -> Option<ConfigLayer> {
    IgnoreResolver::new().resolve(start, explicit)
}
