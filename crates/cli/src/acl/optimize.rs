// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merging of consecutive same-case patterns into alternations.
//!
//! Every compiled entry costs one engine call per request, so runs of
//! patterns sharing a case flag are joined as `(a)|(b)|(c)` until the
//! alternation would outgrow `max_buffer`. Each pattern must parse on its
//! own before it is appended. The pass is all-or-nothing: any compile
//! failure discards everything it built.

use crate::config::RegexOptions;
use crate::context::ParseContext;
use crate::pattern::{CompiledPattern, PatternError, PatternFlags, check_syntax, compile_into};

use super::token::RawToken;

/// Bytes reserved per append for `|`, `(`, `)`.
pub const APPEND_OVERHEAD: usize = 3;

/// Why an optimized compile was abandoned.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Compile(#[from] PatternError),

    #[error("pattern of {len} bytes does not fit an alternation of {max_buffer} bytes")]
    PatternTooLarge { len: usize, max_buffer: usize },
}

/// Result of a successful optimized compile.
#[derive(Debug)]
pub struct Optimized {
    /// Compiled alternations, in token order.
    pub patterns: Vec<CompiledPattern>,
    /// Number of source patterns folded into `patterns`.
    pub merged: usize,
}

/// Growable alternation text with a fixed capacity.
#[derive(Debug)]
struct Alternation {
    text: String,
    capacity: usize,
}

impl Alternation {
    fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Whether `pattern` can be appended without reaching capacity.
    fn fits(&self, pattern: &str) -> bool {
        self.text.len() + pattern.len() + APPEND_OVERHEAD < self.capacity.saturating_sub(1)
    }

    fn push(&mut self, pattern: &str) {
        if !self.text.is_empty() {
            self.text.push('|');
        }
        self.text.push('(');
        self.text.push_str(pattern);
        self.text.push(')');
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Compile the current text into `out` and start over.
    fn flush(
        &mut self,
        out: &mut Vec<CompiledPattern>,
        flags: PatternFlags,
    ) -> Result<(), PatternError> {
        compile_into(out, &self.text, flags)?;
        self.text.clear();
        Ok(())
    }
}

/// Compile `tokens` into as few alternations as `options.max_buffer` allows.
///
/// On error nothing is returned; the caller's list was never touched.
pub fn compile_optimized(
    tokens: &[RawToken],
    options: &RegexOptions,
    ctx: &ParseContext,
) -> Result<Optimized, OptimizeError> {
    let mut out = Vec::new();
    let mut flags = PatternFlags::BASE;
    let mut acc = Alternation::new(options.max_buffer);
    let mut merged = 0;

    for token in tokens {
        match token {
            RawToken::CaseInsensitiveOn | RawToken::CaseInsensitiveOff => {
                let insensitive = matches!(token, RawToken::CaseInsensitiveOn);
                if flags.is_case_insensitive() == insensitive {
                    tracing::trace!("repeated {} ignored", token);
                    continue;
                }
                tracing::trace!("{}: flushing alternation", token);
                acc.flush(&mut out, flags)?;
                flags.set(PatternFlags::CASE_INSENSITIVE, insensitive);
            }
            RawToken::Pattern(pattern) => {
                // A fragment must parse alone or it can escape its group.
                check_syntax(pattern)?;
                if !acc.fits(pattern) {
                    if acc.is_empty() {
                        return Err(OptimizeError::PatternTooLarge {
                            len: pattern.len(),
                            max_buffer: options.max_buffer,
                        });
                    }
                    tracing::trace!("alternation full, starting a new one");
                    acc.flush(&mut out, flags)?;
                    if !acc.fits(pattern) {
                        return Err(OptimizeError::PatternTooLarge {
                            len: pattern.len(),
                            max_buffer: options.max_buffer,
                        });
                    }
                }
                tracing::trace!("adding '{}'", pattern);
                acc.push(pattern);
                merged += 1;
            }
        }
    }

    acc.flush(&mut out, flags)?;

    tracing::debug!(
        "{} patterns merged into {} alternation(s)",
        merged,
        out.len()
    );
    if merged > options.merge_warning_threshold {
        warn_many_patterns(merged, options, ctx);
    }

    Ok(Optimized {
        patterns: out,
        merged,
    })
}

fn warn_many_patterns(merged: usize, options: &RegexOptions, ctx: &ParseContext) {
    if options.parse_only {
        tracing::warn!(
            context = %ctx,
            "{} regular expressions in one list (more than {}); consider fewer patterns or a rule type without regular expressions",
            merged,
            options.merge_warning_threshold
        );
    } else {
        tracing::debug!(
            context = %ctx,
            "{} regular expressions in one list (more than {}); consider fewer patterns or a rule type without regular expressions",
            merged,
            options.merge_warning_threshold
        );
    }
}

#[cfg(test)]
#[path = "optimize_tests.rs"]
mod tests;
