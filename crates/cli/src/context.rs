// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Source locations attached to configuration tokens.

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a token came from: file, 1-based line number, and the raw line.
///
/// Carried alongside tokens for diagnostics only. Nothing about matching
/// depends on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseContext {
    pub file: PathBuf,
    pub line: u32,
    pub input: String,
}

impl ParseContext {
    pub fn new(file: impl Into<PathBuf>, line: u32, input: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            input: input.into(),
        }
    }

    /// Context for the `line`-th line of an included file.
    pub fn included(file: &Path, line: u32, input: &str) -> Self {
        Self::new(file, line, input)
    }

    /// True when no location is known (tokens built in memory).
    pub fn is_unknown(&self) -> bool {
        self.file.as_os_str().is_empty() && self.line == 0
    }
}

impl fmt::Display for ParseContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unknown() {
            return write!(f, "<memory>");
        }
        if self.line == 0 {
            return write!(f, "{}: {}", self.file.display(), self.input);
        }
        write!(f, "{} line {}: {}", self.file.display(), self.line, self.input)
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
