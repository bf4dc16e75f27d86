//! pursgraph - Draw the module dependency graph of a PureScript project
//!
//! Pipeline: discover source files, select them by declared module name,
//! build a namespace tree with import edges, render it as Mermaid.

pub mod declarations;
pub mod diagnostics;
pub mod discovery;
pub mod file_utils;
pub mod module_tree;
pub mod output;
pub mod sanitize;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use declarations::{extract_dependencies, extract_module_name};
pub use diagnostics::{Diagnostic, Reporter};
pub use discovery::{
    DiscoveryConfig, ModuleSelector, Selection, SourceModule, SourceWalker, discover,
    select_modules, select_modules_with,
};
pub use module_tree::{ModuleTree, build};
pub use output::{print_json, render, write_diagram};
pub use sanitize::sanitize;
