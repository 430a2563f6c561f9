//! Filesystem access used by the ignore resolver.

use std::io;
use std::path::{Path, PathBuf};

/// Read-only filesystem operations the resolver depends on.
pub trait Filesystem {
    /// Reads a whole file as text. Invalid UTF-8 is replaced, not rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Resolves a path to its canonical absolute form.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not exist or cannot be resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    /// The directory relative paths are resolved against.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is gone or inaccessible.
    fn current_dir(&self) -> io::Result<PathBuf>;
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = std::fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }
}

impl<F: Filesystem + ?Sized> Filesystem for &F {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).canonicalize(path)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }
}
