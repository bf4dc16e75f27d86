//! Test utilities for creating temporary PureScript projects.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the project root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Write `src/A/B.purs` declaring `A.B` and importing `imports`.
    pub fn add_module(&self, name: &str, imports: &[&str]) -> PathBuf {
        let path = format!("src/{}.purs", name.replace('.', "/"));
        self.add_file(&path, &module_source(name, imports))
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Source text for a module with the given imports.
pub fn module_source(name: &str, imports: &[&str]) -> String {
    let mut source = format!("module {} where\n\nimport Prelude\n", name);
    for import in imports {
        source.push_str("import ");
        source.push_str(import);
        source.push_str(" (class Show, show)\n");
    }
    source.push_str("\n-- | Entry point\nmain :: Effect Unit\nmain = log \"(hello)\"\n");
    source
}
