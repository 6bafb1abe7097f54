// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled regex patterns and the single-pattern compile step.

use bitflags::bitflags;
use regex::{Regex, RegexBuilder};

bitflags! {
    /// Flags a pattern is compiled with.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PatternFlags: u8 {
        /// Extended syntax: alternation, grouping and repetition need no escapes.
        const EXTENDED = 1 << 0;
        /// Only success is reported; capture groups are never extracted.
        const NO_CAPTURE = 1 << 1;
        /// Letters match regardless of case.
        const CASE_INSENSITIVE = 1 << 2;
    }
}

impl PatternFlags {
    /// Flags every pattern starts with (case-sensitive).
    pub const BASE: Self = Self::EXTENDED.union(Self::NO_CAPTURE);

    pub fn is_case_insensitive(self) -> bool {
        self.contains(Self::CASE_INSENSITIVE)
    }

    /// Base flags with case-insensitivity set as given.
    pub fn with_case_insensitive(insensitive: bool) -> Self {
        let mut flags = Self::BASE;
        flags.set(Self::CASE_INSENSITIVE, insensitive);
        flags
    }
}

impl Default for PatternFlags {
    fn default() -> Self {
        Self::BASE
    }
}

/// A pattern that compiled successfully, along with its source text.
///
/// There is no way to build one without a compiled regex, so every entry in a
/// pattern list can be evaluated.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    source: String,
    flags: PatternFlags,
    regex: Regex,
}

/// Error during pattern compilation.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),

    #[error("empty regular expression")]
    EmptyPattern,
}

impl CompiledPattern {
    /// Compile `source` with `flags`.
    pub fn compile(source: &str, flags: PatternFlags) -> Result<Self, PatternError> {
        if source.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        let regex = RegexBuilder::new(source)
            .case_insensitive(flags.is_case_insensitive())
            .build()?;
        tracing::trace!("compiled '{}' with flags {:?}", source, flags);

        Ok(Self {
            source: source.to_string(),
            flags: flags | PatternFlags::BASE,
            regex,
        })
    }

    /// The pattern text this entry was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn flags(&self) -> PatternFlags {
        self.flags
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.flags.is_case_insensitive()
    }

    /// Whether `word` contains a match. Capture groups are ignored.
    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

/// Check that `source` is a complete expression on its own.
///
/// Text that only parses once wrapped in a group, such as `x)|(.*`, is
/// rejected here even though `(x)|(.*)` would compile.
pub fn check_syntax(source: &str) -> Result<(), PatternError> {
    RegexBuilder::new(source).build()?;
    Ok(())
}

/// Compile `source` and append the result to `list`.
///
/// An empty `source` is accepted as a no-op only while `list` is still empty,
/// and is a [`PatternError::EmptyPattern`] otherwise. The alternation builder
/// relies on this when it flushes an empty buffer: a leading case toggle is
/// harmless, but an empty flush after something was already compiled fails
/// the merge and sends the caller to the one-by-one path. Keep it that way
/// unless the load behavior is meant to change.
pub fn compile_into(
    list: &mut Vec<CompiledPattern>,
    source: &str,
    flags: PatternFlags,
) -> Result<(), PatternError> {
    if source.is_empty() {
        return if list.is_empty() {
            Ok(())
        } else {
            Err(PatternError::EmptyPattern)
        };
    }

    list.push(CompiledPattern::compile(source, flags)?);
    Ok(())
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
