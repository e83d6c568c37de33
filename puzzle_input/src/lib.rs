//! Locating and loading puzzle input files.
//!
//! Every day binary works the same way: the input path is the first CLI
//! argument, falling back to a conventional location under `input/`, and the
//! whole file is read up front before any parsing happens.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Path of the puzzle input: the first CLI argument if one was given,
/// otherwise `default`.
pub fn input_path(default: &str) -> PathBuf {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Read the whole input file as one string.
pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read puzzle input {}", path.display()))
}

/// Trimmed, non-blank lines of the puzzle text.
pub fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
