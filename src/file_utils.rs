//! Shared file reading utilities
//!
//! Source files are read whole, as bytes, and decoded lossily so that a stray
//! invalid byte sequence degrades one file instead of failing the run.

use std::fs;
use std::io;
use std::path::Path;

/// Default maximum file size for extraction (1MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// Why a source file could not be read.
#[derive(Debug)]
pub enum ReadError {
    /// File is larger than the configured limit.
    TooLarge { size: u64, limit: u64 },
    Io(io::Error),
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

/// Read a source file as text if it is at most `max_size` bytes.
pub fn read_source_file(path: &Path, max_size: u64) -> Result<String, ReadError> {
    let size = path.metadata()?.len();
    if size > max_size {
        return Err(ReadError::TooLarge {
            size,
            limit: max_size,
        });
    }

    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3).
/// Without suffix, interprets as bytes.
pub fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}
