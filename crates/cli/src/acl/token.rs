// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw tokens of a regex ACL directive.

use std::fmt;

/// Reserved token turning case-insensitive matching on.
pub const CASE_INSENSITIVE_ON: &str = "-i";

/// Reserved token turning case-insensitive matching off.
pub const CASE_INSENSITIVE_OFF: &str = "+i";

/// One token after tokenizing and wildcard trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawToken {
    /// Pattern text, passed to the regex engine unchanged.
    Pattern(String),
    /// `-i`
    CaseInsensitiveOn,
    /// `+i`
    CaseInsensitiveOff,
}

impl RawToken {
    /// Classify configuration text as a flag toggle or pattern.
    pub fn parse(text: &str) -> Self {
        match text {
            CASE_INSENSITIVE_ON => RawToken::CaseInsensitiveOn,
            CASE_INSENSITIVE_OFF => RawToken::CaseInsensitiveOff,
            _ => RawToken::Pattern(text.to_string()),
        }
    }

    /// The configuration text for this token.
    pub fn as_str(&self) -> &str {
        match self {
            RawToken::Pattern(text) => text,
            RawToken::CaseInsensitiveOn => CASE_INSENSITIVE_ON,
            RawToken::CaseInsensitiveOff => CASE_INSENSITIVE_OFF,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, RawToken::Pattern(_))
    }
}

impl From<&str> for RawToken {
    fn from(text: &str) -> Self {
        RawToken::parse(text)
    }
}

impl fmt::Display for RawToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a token list from configuration strings.
pub fn tokens<'a>(texts: impl IntoIterator<Item = &'a str>) -> Vec<RawToken> {
    texts.into_iter().map(RawToken::parse).collect()
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
