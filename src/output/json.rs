//! JSON output formatting

use std::io;

use crate::module_tree::ModuleTree;

/// Serialize the module tree as pretty-printed JSON.
pub fn to_json(tree: &ModuleTree) -> io::Result<String> {
    serde_json::to_string_pretty(tree).map_err(io::Error::other)
}

/// Print the module tree as pretty-printed JSON to stdout.
pub fn print_json(tree: &ModuleTree) -> io::Result<()> {
    let json = to_json(tree)?;
    println!("{}", json);
    Ok(())
}
