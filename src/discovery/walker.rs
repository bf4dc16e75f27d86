//! Recursive listing of source files by extension

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::{DirEntry, WalkBuilder};

use super::config::DiscoveryConfig;

/// Lists source files under a root directory.
pub struct SourceWalker {
    config: DiscoveryConfig,
}

impl SourceWalker {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    /// Every file under `root` whose name ends with `.<extension>`, depth
    /// first, siblings sorted by file name.
    ///
    /// Fails when `root` does not exist or is not a directory. Unreadable
    /// entries below the root are skipped.
    pub fn walk(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root)?;
        if !metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("'{}' is not a directory", root.display()),
            ));
        }

        let respect_ignores = !self.config.show_all;
        let ignore_patterns = self.config.ignore_patterns.clone();

        let walker = WalkBuilder::new(root)
            .hidden(respect_ignores)
            .ignore(respect_ignores)
            .git_ignore(respect_ignores)
            .git_global(respect_ignores)
            .git_exclude(respect_ignores)
            .require_git(false)
            .sort_by_file_name(|a: &OsStr, b: &OsStr| -> Ordering { a.cmp(b) })
            .filter_entry(move |entry: &DirEntry| !should_ignore_entry(entry, &ignore_patterns))
            .build();

        let mut files = Vec::new();
        for entry in walker.flatten() {
            let is_file = entry.file_type().is_some_and(|t| t.is_file());
            if is_file && has_extension(entry.path(), &self.config.extension) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

/// List every `.<extension>` file under `root`, including hidden and
/// gitignored ones. `.git` directories are still skipped.
pub fn discover(root: &Path, extension: &str) -> io::Result<Vec<PathBuf>> {
    SourceWalker::new(DiscoveryConfig {
        extension: extension.to_string(),
        show_all: true,
        ..Default::default()
    })
    .walk(root)
}

/// Check whether a file name ends with `.` followed by `extension`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(extension))
        .is_some_and(|stem| stem.ends_with('.'))
}

fn should_ignore_entry(entry: &DirEntry, ignore_patterns: &[String]) -> bool {
    let name = entry.file_name().to_string_lossy();

    if name == ".git" {
        return true;
    }

    ignore_patterns
        .iter()
        .any(|pattern| name == pattern.as_str() || glob_match(pattern, &name))
}

/// Match a glob pattern against a name. Invalid patterns match nothing.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
