// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for match results and dumps.

use std::io::Write;

use serde::Serialize;

/// Result of matching one word against the selected ACLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordResult {
    pub word: String,
    /// Names of the ACLs that matched, in name order.
    pub acls: Vec<String>,
}

impl WordResult {
    pub fn matched(&self) -> bool {
        !self.acls.is_empty()
    }
}

#[derive(Serialize)]
struct JsonWordResult<'a> {
    word: &'a str,
    matched: bool,
    acls: &'a [String],
}

/// One line per word: `WORD: match (acl, ...)` or `WORD: no match`.
pub fn write_text(out: &mut impl Write, results: &[WordResult]) -> std::io::Result<()> {
    for result in results {
        if result.matched() {
            writeln!(out, "{}: match ({})", result.word, result.acls.join(", "))?;
        } else {
            writeln!(out, "{}: no match", result.word)?;
        }
    }
    Ok(())
}

/// A JSON array of `{word, matched, acls}` objects.
pub fn write_json(out: &mut impl Write, results: &[WordResult]) -> std::io::Result<()> {
    let rows: Vec<_> = results
        .iter()
        .map(|r| JsonWordResult {
            word: &r.word,
            matched: r.matched(),
            acls: &r.acls,
        })
        .collect();
    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)
}

/// `NAME TOKEN...` in configuration syntax.
pub fn write_dump(out: &mut impl Write, name: &str, tokens: &[String]) -> std::io::Result<()> {
    if tokens.is_empty() {
        writeln!(out, "{}", name)
    } else {
        writeln!(out, "{} {}", name, tokens.join(" "))
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
