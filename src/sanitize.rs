//! Source text sanitization
//!
//! Declarations are found with plain line matching, so anything that could
//! look like a declaration without being one has to go first:
//!
//! 1. String literals `"..."`
//! 2. Block comments `{- ... -}`
//! 3. Line comments `-- ...`
//! 4. Parenthesized groups `( ... )` (export and import lists)
//!
//! The first three are removed in one left-to-right pass, so whichever opens
//! first wins: a `"` inside a comment never starts a string and a `--` inside
//! a string never starts a comment. Parentheses go last so that one inside a
//! string or comment never pairs with a real one.
//!
//! Removed spans become a single space (line comments become nothing) so the
//! tokens around them stay apart.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// String literal (with `\` escapes), block comment or line comment,
/// whichever starts first.
static LEXEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)"(?:[^"\\]|\\.)*"|\{-.*?-\}|--[^\r\n]*"#).expect("LEXEME regex is invalid")
});

/// Innermost group only; applied until nothing matches so nested lists like
/// `(Maybe(..), fromMaybe)` disappear without leaving a stray `)`.
static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^()]*\)").expect("PAREN_GROUP regex is invalid"));

/// Strip strings, comments and parenthesized groups from raw source text.
///
/// Never grows the input. Unterminated constructs are left in place.
///
/// ```
/// use pursgraph::sanitize::sanitize;
///
/// let cleaned = sanitize("import Data.Maybe(Maybe(..))as M -- maybes");
/// assert_eq!(cleaned.trim_end(), "import Data.Maybe as M");
/// ```
pub fn sanitize(raw: &str) -> String {
    let mut text = LEXEME
        .replace_all(raw, |caps: &Captures| {
            if caps[0].starts_with("--") { "" } else { " " }
        })
        .into_owned();

    // Each pass turns at least two characters into one, so this terminates.
    while PAREN_GROUP.is_match(&text) {
        text = PAREN_GROUP.replace_all(&text, " ").into_owned();
    }
    text
}

/// Sanitize and split into owned lines, ready for declaration extraction.
pub fn sanitized_lines(raw: &str) -> Vec<String> {
    sanitize(raw).lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize(&sanitize("")), "");
    }

    #[test]
    fn test_plain_text_untouched() {
        let src = "module Main where\n\nimport Prelude\n";
        assert_eq!(sanitize(src), src);
    }

    #[test]
    fn test_removes_line_comment() {
        let src = "import Prelude -- the prelude\nimport Effect\n";
        assert_eq!(sanitize(src), "import Prelude \nimport Effect\n");
    }

    #[test]
    fn test_removes_block_comment_across_lines() {
        let src = "{- header\nimport Fake.Module\n-}\nimport Real.Module\n";
        let cleaned = sanitize(src);
        assert!(!cleaned.contains("Fake"));
        assert!(cleaned.contains("import Real.Module"));
    }

    #[test]
    fn test_block_comment_is_non_greedy() {
        let src = "{- a -}\nimport Kept\n{- b -}\n";
        assert_eq!(sanitize(src), " \nimport Kept\n \n");
    }

    #[test]
    fn test_removes_string_literals() {
        let src = "x = \"import Not.A.Module\"\nimport Real\n";
        let cleaned = sanitize(src);
        assert!(!cleaned.contains("Not.A.Module"));
        assert!(cleaned.contains("import Real"));
    }

    #[test]
    fn test_string_with_comment_marker() {
        // The `--` lives inside a string, so the rest of the line survives.
        let src = "x = \"--\" <> y\n";
        assert_eq!(sanitize(src), "x =   <> y\n");
    }

    #[test]
    fn test_paren_inside_string_does_not_pair() {
        let src = "s = \"(\"\nimport A (foo)\n";
        assert_eq!(sanitize(src), "s =  \nimport A  \n");
    }

    #[test]
    fn test_paren_inside_comment_does_not_pair() {
        let src = "-- (\nimport A (foo)\n{- ) -}\nimport B\n";
        assert_eq!(sanitize(src), "\nimport A  \n \nimport B\n");
    }

    #[test]
    fn test_removes_nested_import_list() {
        let src = "import Data.Maybe (Maybe(..), fromMaybe)\n";
        assert_eq!(sanitize(src), "import Data.Maybe  \n");
    }

    #[test]
    fn test_removes_multiline_export_list() {
        let src = "module Foo.Bar\n  ( baz\n  , Qux(..)\n  ) where\n\nimport Prelude\n";
        let cleaned = sanitize(src);
        assert_eq!(cleaned, "module Foo.Bar\n    where\n\nimport Prelude\n");
    }

    #[test]
    fn test_quote_inside_line_comment_is_not_a_string() {
        let src = "module A where\n-- | Escapes \" characters\nimport B\nimport C\n\nx = \"done\"\n";
        let cleaned = sanitize(src);
        assert!(cleaned.contains("import B\nimport C\n"));
        assert!(!cleaned.contains("done"));
    }

    #[test]
    fn test_quote_inside_block_comment_is_not_a_string() {
        let src = "{- say \"hi -}\nimport B\ny = \"z\"\n";
        assert_eq!(sanitize(src), " \nimport B\ny =  \n");
    }

    #[test]
    fn test_escaped_quote_does_not_end_string() {
        let src = "q = \"\\\"import Fake\\\"\"\nimport Real\n";
        assert_eq!(sanitize(src), "q =  \nimport Real\n");
    }

    #[test]
    fn test_removed_spans_keep_tokens_apart() {
        assert_eq!(sanitize("module Main(main)where"), "module Main where");
        assert_eq!(sanitize("import{- x -}Foo"), "import Foo");
    }

    #[test]
    fn test_unterminated_block_comment_is_kept() {
        let src = "{- never closed\nimport A\n";
        assert_eq!(sanitize(src), src);
    }

    #[test]
    fn test_never_grows() {
        let samples = [
            "",
            "module A where",
            "\"unterminated",
            "((()))",
            "{- -} -- \"x\" (y)",
            "import A (b, C(..))\nimport D as E\n",
        ];
        for src in samples {
            assert!(sanitize(src).len() <= src.len(), "grew: {:?}", src);
        }
    }

    #[test]
    fn test_sanitized_lines() {
        let lines = sanitized_lines("module A where\n-- note\nimport B (c)\n");
        assert_eq!(lines, vec!["module A where", "", "import B  "]);
    }
}
