//! Configuration for source discovery

use crate::file_utils::DEFAULT_MAX_FILE_SIZE;

/// Extension of PureScript source files.
pub const DEFAULT_EXTENSION: &str = "purs";

/// Configuration for discovery and module selection.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// File extension without the leading dot.
    pub extension: String,
    /// Visit hidden and .gitignore'd entries too.
    pub show_all: bool,
    /// Glob patterns over file and directory names to skip.
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers for reading and extraction.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
    /// Files larger than this are skipped with a diagnostic.
    pub max_file_size: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extension: DEFAULT_EXTENSION.to_string(),
            show_all: false,
            ignore_patterns: Vec::new(),
            parallel_workers: 0,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}
