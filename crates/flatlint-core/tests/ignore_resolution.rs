//! Integration test: `.gitignore` files on disk → ignore globs.
//!
//! Each test builds a directory tree under a temp dir and caps the ancestor
//! walk with `max_depth` so ignore files outside the temp dir cannot leak in.

use flatlint_core::{IgnoreResolver, IGNORES_LAYER_NAME};
use glob::Pattern;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Applies globs in order the way a flat config matcher does.
fn is_ignored(globs: &[String], path: &str) -> bool {
    let mut ignored = false;
    for glob in globs {
        let (negated, pattern) = match glob.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, glob.as_str()),
        };
        if Pattern::new(pattern).unwrap().matches(path) {
            ignored = !negated;
        }
    }
    ignored
}

fn write(dir: &Path, content: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join(".gitignore"), content).unwrap();
}

#[test]
fn directory_pattern_matches_at_any_depth() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "build/\n");

    let globs = IgnoreResolver::new().max_depth(0).scan(tmp.path());
    assert_eq!(globs, vec!["**/build/", "**/build/**"]);
    assert!(is_ignored(&globs, "build/out.js"));
    assert!(is_ignored(&globs, "packages/app/build/out.js"));
    assert!(!is_ignored(&globs, "src/builder.ts"));
}

#[test]
fn anchored_pattern_only_matches_at_root() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "/dist\n");

    let globs = IgnoreResolver::new().max_depth(0).scan(tmp.path());
    assert_eq!(globs, vec!["dist", "dist/**"]);
    assert!(is_ignored(&globs, "dist/index.js"));
    assert!(!is_ignored(&globs, "foo/dist"));
    assert!(!is_ignored(&globs, "foo/dist/index.js"));
}

#[test]
fn parent_ignore_file_is_depth_prefixed() {
    let tmp = TempDir::new().unwrap();
    let project = tmp.path().join("project");
    write(tmp.path(), "/dist\n");
    fs::create_dir_all(&project).unwrap();

    let globs = IgnoreResolver::new().max_depth(1).scan(&project);
    assert_eq!(globs, vec!["../dist", "../dist/**"]);
}

#[test]
fn negation_follows_the_pattern_it_overrides() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "# logs\n*.log\n\n   \n!keep.log\n");

    let globs = IgnoreResolver::new().max_depth(0).scan(tmp.path());
    assert_eq!(
        globs,
        vec!["**/*.log", "**/*.log/**", "!**/keep.log", "!**/keep.log/**"]
    );
    assert!(is_ignored(&globs, "debug.log"));
    assert!(is_ignored(&globs, "logs/debug.log"));
    assert!(!is_ignored(&globs, "keep.log"));
}

#[test]
fn nested_files_are_collected_closest_first() {
    let tmp = TempDir::new().unwrap();
    let app = tmp.path().join("packages").join("app");
    write(tmp.path(), "node_modules/\n");
    write(&app, "/coverage\n");

    let layer = IgnoreResolver::new()
        .max_depth(2)
        .resolve(&app, None)
        .unwrap();

    assert_eq!(layer.name.as_deref(), Some(IGNORES_LAYER_NAME));
    assert!(layer.is_global_ignore());
    assert_eq!(
        layer.ignores,
        vec![
            "coverage",
            "coverage/**",
            "../../**/node_modules/",
            "../../**/node_modules/**",
        ]
    );
}

#[test]
fn explicit_ignores_win_over_gitignore() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "build/\n");

    let explicit = vec!["generated/**".to_string()];
    let layer = IgnoreResolver::new()
        .max_depth(0)
        .resolve(tmp.path(), Some(&explicit))
        .unwrap();
    assert_eq!(layer.ignores, explicit);
}

#[test]
fn missing_start_directory_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("does-not-exist");

    assert!(IgnoreResolver::new()
        .max_depth(0)
        .resolve(&missing, None)
        .is_none());
}

#[test]
fn unreadable_ignore_file_is_skipped() {
    let tmp = TempDir::new().unwrap();
    // A directory named .gitignore cannot be read as a file.
    fs::create_dir(tmp.path().join(".gitignore")).unwrap();

    assert!(IgnoreResolver::new()
        .max_depth(0)
        .resolve(tmp.path(), None)
        .is_none());
}

#[test]
fn crlf_line_endings() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "target/\r\n# comment\r\n/out\r\n");

    let globs = IgnoreResolver::new().max_depth(0).scan(tmp.path());
    assert_eq!(globs, vec!["**/target/", "**/target/**", "out", "out/**"]);
}

#[test]
fn non_utf8_bytes_do_not_drop_the_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".gitignore"), b"# caf\xe9 output\nbuild/\n").unwrap();

    let globs = IgnoreResolver::new().max_depth(0).scan(tmp.path());
    assert_eq!(globs, vec!["**/build/", "**/build/**"]);
}
