//! Per-file diagnostics and stderr reporting
//!
//! Discovery never aborts on a single bad file. Problems are collected as
//! [`Diagnostic`] values and handed to the caller, which decides how to show
//! them. [`Reporter`] is the binary's way: one colored line per message on
//! stderr, prefixed with the program name.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// A non-fatal problem with one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// No `module` declaration could be found.
    MissingModuleName { path: PathBuf },
    /// The file could not be read.
    Unreadable { path: PathBuf, reason: String },
    /// The file exceeds the configured size limit.
    TooLarge { path: PathBuf, size: u64, limit: u64 },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MissingModuleName { path } => {
                write!(f, "{}: no module declaration found, skipping", path.display())
            }
            Diagnostic::Unreadable { path, reason } => {
                write!(f, "{}: cannot read file: {}", path.display(), reason)
            }
            Diagnostic::TooLarge { path, size, limit } => write!(
                f,
                "{}: skipping file of {} bytes (limit {} bytes)",
                path.display(),
                size,
                limit
            ),
        }
    }
}

/// Message severity, which picks the label and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl Level {
    fn label(self) -> Option<&'static str> {
        match self {
            Level::Info => None,
            Level::Warning => Some("warning"),
            Level::Error => Some("error"),
        }
    }

    fn color(self) -> Color {
        match self {
            Level::Info => Color::Cyan,
            Level::Warning => Color::Yellow,
            Level::Error => Color::Red,
        }
    }
}

/// Writes user-facing messages to stderr.
pub struct Reporter {
    stderr: StandardStream,
    quiet: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(use_color: bool) -> Self {
        let choice = if use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stderr: StandardStream::stderr(choice),
            quiet: false,
            verbose: false,
        }
    }

    /// Suppress per-file warnings. Errors are always shown.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Show progress messages.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn diagnostic(&mut self, diagnostic: &Diagnostic) {
        if !self.quiet {
            self.emit(Level::Warning, &diagnostic.to_string());
        }
    }

    pub fn progress(&mut self, message: &str) {
        if self.verbose {
            self.emit(Level::Info, message);
        }
    }

    pub fn warning(&mut self, message: &str) {
        if !self.quiet {
            self.emit(Level::Warning, message);
        }
    }

    pub fn error(&mut self, message: &str) {
        self.emit(Level::Error, message);
    }

    fn emit(&mut self, level: Level, message: &str) {
        // Nothing sensible to do if stderr itself is gone.
        let _ = self.write_line(level, message);
    }

    fn write_line(&mut self, level: Level, message: &str) -> io::Result<()> {
        write!(self.stderr, "pursgraph: ")?;
        if let Some(label) = level.label() {
            self.stderr
                .set_color(ColorSpec::new().set_fg(Some(level.color())).set_bold(true))?;
            write!(self.stderr, "{}", label)?;
            self.stderr.reset()?;
            write!(self.stderr, ": ")?;
        } else {
            self.stderr.set_color(ColorSpec::new().set_fg(Some(level.color())))?;
        }
        write!(self.stderr, "{}", message)?;
        self.stderr.reset()?;
        writeln!(self.stderr)
    }
}
