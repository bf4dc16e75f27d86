//! Selection of discovered files by declared module name

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::declarations::{extract_dependencies, extract_module_name};
use crate::diagnostics::Diagnostic;
use crate::file_utils::{ReadError, read_source_file};
use crate::sanitize::sanitized_lines;

use super::config::DiscoveryConfig;
use super::selector::ModuleSelector;

/// A source file whose module name matched the selector.
///
/// Keeps the sanitized lines so the tree builder can read imports without
/// touching the file again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    pub path: PathBuf,
    pub name: String,
    pub lines: Vec<String>,
}

impl SourceModule {
    /// Parse already-read source text. `None` when there is no declaration.
    pub fn from_source(path: impl Into<PathBuf>, source: &str) -> Option<Self> {
        let lines = sanitized_lines(source);
        let name = extract_module_name(&lines)?;
        Some(Self {
            path: path.into(),
            name,
            lines,
        })
    }

    /// Imported module names in file order, duplicates included.
    pub fn dependencies(&self) -> Vec<String> {
        extract_dependencies(&self.lines)
    }
}

/// Result of the selection pass.
#[derive(Debug, Default)]
pub struct Selection {
    /// Selected modules, in discovery order.
    pub modules: Vec<SourceModule>,
    /// One entry per file that could not take part.
    pub diagnostics: Vec<Diagnostic>,
    /// Files whose module name did not match the selector.
    pub filtered: usize,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Outcome for one candidate file.
enum Inspected {
    Selected(SourceModule),
    Filtered,
    Skipped(Diagnostic),
}

/// Keep the files whose declared module name matches `selector`.
pub fn select_modules(files: &[PathBuf], selector: &ModuleSelector) -> Selection {
    select_modules_with(files, selector, &DiscoveryConfig::default())
}

/// Like [`select_modules`], honoring the worker count and size limit from
/// `config`. Output order follows `files` regardless of parallelism.
pub fn select_modules_with(
    files: &[PathBuf],
    selector: &ModuleSelector,
    config: &DiscoveryConfig,
) -> Selection {
    let max_size = config.max_file_size;
    let inspect_all = || -> Vec<Inspected> {
        files
            .par_iter()
            .map(|path| inspect(path, selector, max_size))
            .collect()
    };

    let outcomes = match config.parallel_workers {
        1 => files
            .iter()
            .map(|path| inspect(path, selector, max_size))
            .collect(),
        // Auto-detect: use rayon's default thread pool
        0 => inspect_all(),
        workers => match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(inspect_all),
            // Fall back to rayon's global pool if custom pool creation fails
            Err(_) => inspect_all(),
        },
    };

    let mut selection = Selection::default();
    for outcome in outcomes {
        match outcome {
            Inspected::Selected(module) => selection.modules.push(module),
            Inspected::Filtered => selection.filtered += 1,
            Inspected::Skipped(diagnostic) => selection.diagnostics.push(diagnostic),
        }
    }
    selection
}

fn inspect(path: &Path, selector: &ModuleSelector, max_size: u64) -> Inspected {
    let source = match read_source_file(path, max_size) {
        Ok(source) => source,
        Err(ReadError::TooLarge { size, limit }) => {
            return Inspected::Skipped(Diagnostic::TooLarge {
                path: path.to_path_buf(),
                size,
                limit,
            });
        }
        Err(ReadError::Io(e)) => {
            return Inspected::Skipped(Diagnostic::Unreadable {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    match SourceModule::from_source(path, &source) {
        Some(module) if selector.is_selected(&module.name) => Inspected::Selected(module),
        Some(_) => Inspected::Filtered,
        None => Inspected::Skipped(Diagnostic::MissingModuleName {
            path: path.to_path_buf(),
        }),
    }
}
