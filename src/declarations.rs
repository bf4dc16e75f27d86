//! Module and import declaration extraction
//!
//! Works on sanitized lines (see [`crate::sanitize`]). A declaration is a line
//! whose trimmed text starts with the keyword followed by whitespace; the name
//! is the second whitespace-separated token on that line.

/// Keyword introducing the module declaration.
pub const MODULE_KEYWORD: &str = "module";

/// Keyword introducing an import.
pub const IMPORT_KEYWORD: &str = "import";

/// Return the declared module name, if any. The first declaration wins.
///
/// ```
/// use pursgraph::declarations::extract_module_name;
///
/// assert_eq!(extract_module_name(&["module A.B.C where"]), Some("A.B.C".to_string()));
/// assert_eq!(extract_module_name(&["import A"]), None);
/// ```
pub fn extract_module_name<S: AsRef<str>>(lines: &[S]) -> Option<String> {
    lines
        .iter()
        .find_map(|line| declared_name(line.as_ref(), MODULE_KEYWORD))
}

/// Return every imported module name in file order, duplicates included.
pub fn extract_dependencies<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|line| declared_name(line.as_ref(), IMPORT_KEYWORD))
        .collect()
}

/// Second token of a line starting with `keyword` and whitespace.
fn declared_name(line: &str, keyword: &str) -> Option<String> {
    let rest = line.trim().strip_prefix(keyword)?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    rest.split_whitespace().next().map(str::to_string)
}
