// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Removal of redundant leading wildcards.
//!
//! Matching is unanchored, so a leading `^.*` or `.*` adds nothing but
//! engine work. A lone leading `.` is kept: it still requires one character.

use crate::context::ParseContext;

/// Pattern that matches every string.
pub const CATCH_ALL: &str = ".*";

/// Strip one leading `^.*`, then any number of leading `.*` pairs.
///
/// Returns an empty string when the pattern was nothing but wildcards.
pub fn strip_wildcards(pattern: &str) -> &str {
    let mut rest = pattern.strip_prefix("^.*").unwrap_or(pattern);
    while let Some(tail) = rest.strip_prefix(".*") {
        rest = tail;
    }
    rest
}

/// Strip redundant wildcards from `pattern`, warning when anything changed.
///
/// A pattern that is empty or only wildcards becomes [`CATCH_ALL`].
pub fn trim_wildcards<'a>(pattern: &'a str, ctx: &ParseContext) -> &'a str {
    let trimmed = strip_wildcards(pattern);

    if trimmed.is_empty() {
        tracing::warn!(
            context = %ctx,
            "regular expression '{}' has only wildcards and matches all strings; using '{}' instead",
            pattern,
            CATCH_ALL
        );
        return CATCH_ALL;
    }

    if trimmed.len() != pattern.len() {
        tracing::warn!(
            context = %ctx,
            "regular expression '{}' has unnecessary wildcard(s); using '{}' instead",
            pattern,
            trimmed
        );
    }

    trimmed
}

#[cfg(test)]
#[path = "trim_tests.rs"]
mod tests;
