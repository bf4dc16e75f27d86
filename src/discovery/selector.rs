//! Module-name selection pattern

use std::fmt;
use std::str::FromStr;

use regex::Regex;

/// Pattern deciding which modules take part in the graph.
///
/// A thin wrapper around a [`Regex`] searched anywhere in the full dotted
/// module name, so `^Data\.` selects everything under `Data` and `Parser`
/// selects any module with `Parser` somewhere in its name.
#[derive(Debug, Clone)]
pub struct ModuleSelector(Regex);

impl ModuleSelector {
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }

    /// Selector accepting every module name.
    pub fn all() -> Self {
        Self(Regex::new(".*").expect("match-all regex is invalid"))
    }

    pub fn is_selected(&self, module_name: &str) -> bool {
        self.0.is_match(module_name)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ModuleSelector {
    fn default() -> Self {
        Self::all()
    }
}

impl FromStr for ModuleSelector {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ModuleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
