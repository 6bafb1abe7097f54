// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! One-pattern-per-entry compilation, used when merging fails.

use crate::context::ParseContext;
use crate::pattern::{CompiledPattern, PatternFlags, compile_into};

use super::token::RawToken;

/// Compile each pattern in `tokens` on its own and append it to `dest`.
///
/// A pattern that fails to compile is reported and skipped; the rest are
/// still compiled. Returns the number of entries appended.
pub fn compile_each(
    dest: &mut Vec<CompiledPattern>,
    tokens: &[RawToken],
    ctx: &ParseContext,
) -> usize {
    let before = dest.len();
    let mut flags = PatternFlags::BASE;

    for token in tokens {
        match token {
            RawToken::CaseInsensitiveOn => flags.insert(PatternFlags::CASE_INSENSITIVE),
            RawToken::CaseInsensitiveOff => flags.remove(PatternFlags::CASE_INSENSITIVE),
            RawToken::Pattern(pattern) => {
                if let Err(e) = compile_into(dest, pattern, flags) {
                    tracing::error!(
                        context = %ctx,
                        "skipping regular expression '{}': {}",
                        pattern,
                        e
                    );
                }
            }
        }
    }

    dest.len() - before
}

#[cfg(test)]
#[path = "fallback_tests.rs"]
mod tests;
