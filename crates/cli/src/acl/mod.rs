// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex ACL data: an ordered list of compiled patterns.
//!
//! Loading happens once per directive during configuration, merging patterns
//! into alternations where possible ([`optimize`]) and compiling them one by
//! one otherwise ([`fallback`]). After loading, [`RegexMatcher::matches`] is
//! read-only and safe to call from many threads.

pub mod fallback;
pub mod optimize;
pub mod set;
pub mod token;
pub mod tokenizer;

use std::fmt;

use crate::config::RegexOptions;
use crate::context::ParseContext;
use crate::error::Result;
use crate::pattern::{CompiledPattern, trim_wildcards};

pub use set::AclSet;
pub use token::{CASE_INSENSITIVE_OFF, CASE_INSENSITIVE_ON, RawToken};
pub use tokenizer::{DirectiveTokens, SourceToken, TokenList, TokenSource};

/// An operation this kind of ACL data does not support.
#[derive(Debug, thiserror::Error)]
pub enum AclError {
    #[error("regex acl data cannot be cloned once loaded ({patterns} compiled patterns)")]
    CloneUnsupported { patterns: usize },
}

/// What one [`RegexMatcher::load`] call did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Compiled entries appended to the list.
    pub added: usize,
    /// Patterns dropped for exceeding the length limit.
    pub dropped: usize,
    /// Whether patterns were merged (false: compiled one by one).
    pub optimized: bool,
}

/// Data behind one ACL: loaded from configuration, then matched per request.
pub trait AclData: Send + Sync + fmt::Debug {
    /// Load one directive's tokens, appending to existing data.
    fn load(&mut self, source: &mut dyn TokenSource) -> Result<LoadSummary>;

    /// Whether `word` matches. `None` never matches.
    fn matches(&self, word: Option<&str>) -> bool;

    /// Configuration tokens that reload to equivalent data.
    fn dump(&self) -> Vec<String>;

    fn is_empty(&self) -> bool;

    /// A fresh instance of the same kind, if this data can be cloned.
    fn try_clone(&self) -> std::result::Result<Box<dyn AclData>, AclError>;
}

/// Ordered compiled patterns; the first match wins.
#[derive(Debug, Default)]
pub struct RegexMatcher {
    patterns: Vec<CompiledPattern>,
    options: RegexOptions,
}

impl RegexMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: RegexOptions) -> Self {
        Self {
            patterns: Vec::new(),
            options,
        }
    }

    pub fn options(&self) -> &RegexOptions {
        &self.options
    }

    /// Compiled entries in match order.
    pub fn patterns(&self) -> &[CompiledPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Drain `source`, trim and filter its patterns, and append the compiled result.
    ///
    /// Errors only come from `source` itself (e.g. an unreadable include);
    /// bad patterns are reported and handled here.
    pub fn load(&mut self, source: &mut dyn TokenSource) -> Result<LoadSummary> {
        tracing::debug!("new regex directive or file");

        let limit = self.options.max_pattern_len();
        let mut tokens = Vec::new();
        let mut dropped = 0;

        while let Some(token) = source.next_token()? {
            match RawToken::parse(&token.text) {
                RawToken::Pattern(text) => {
                    let clean = trim_wildcards(&text, &token.context);
                    if clean.len() > limit {
                        tracing::error!(
                            context = %token.context,
                            "skipping regular expression larger than {} bytes: '{}'",
                            limit,
                            clean
                        );
                        dropped += 1;
                        continue;
                    }
                    tracing::trace!("buffering '{}'", clean);
                    tokens.push(RawToken::Pattern(clean.to_string()));
                }
                flag => tokens.push(flag),
            }
        }

        let ctx = source.context().clone();
        let mut summary = self.compile_tokens(&tokens, &ctx);
        summary.dropped = dropped;
        Ok(summary)
    }

    /// Compile already-trimmed tokens, merging when possible.
    pub fn compile_tokens(&mut self, tokens: &[RawToken], ctx: &ParseContext) -> LoadSummary {
        match optimize::compile_optimized(tokens, &self.options, ctx) {
            Ok(optimized) => {
                let added = optimized.patterns.len();
                self.patterns.extend(optimized.patterns);
                LoadSummary {
                    added,
                    dropped: 0,
                    optimized: true,
                }
            }
            Err(e) => {
                tracing::warn!(
                    context = %ctx,
                    "optimisation of regular expressions failed ({}); using fallback method without optimisation",
                    e
                );
                let added = fallback::compile_each(&mut self.patterns, tokens, ctx);
                LoadSummary {
                    added,
                    dropped: 0,
                    optimized: false,
                }
            }
        }
    }

    /// Whether any pattern matches `word`, checked in list order.
    pub fn matches(&self, word: Option<&str>) -> bool {
        let Some(word) = word else {
            return false;
        };
        tracing::trace!("checking '{}'", word);

        match self.patterns.iter().find(|p| p.is_match(word)) {
            Some(pattern) => {
                tracing::debug!("'{}' found in '{}'", pattern.source(), word);
                true
            }
            None => false,
        }
    }

    /// Serialize to configuration tokens, inserting `-i`/`+i` where the case flag changes.
    pub fn dump(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.patterns.len());
        let mut insensitive = false;

        for pattern in &self.patterns {
            if pattern.is_case_insensitive() != insensitive {
                insensitive = pattern.is_case_insensitive();
                let toggle = if insensitive {
                    CASE_INSENSITIVE_ON
                } else {
                    CASE_INSENSITIVE_OFF
                };
                out.push(toggle.to_string());
            }
            out.push(pattern.source().to_string());
        }

        out
    }

    /// A new empty matcher with the same options.
    ///
    /// Compiled patterns are not shared between instances, so only an empty
    /// matcher can be cloned.
    pub fn try_clone_empty(&self) -> std::result::Result<Self, AclError> {
        if !self.is_empty() {
            return Err(AclError::CloneUnsupported {
                patterns: self.patterns.len(),
            });
        }
        Ok(Self::with_options(self.options.clone()))
    }
}

impl AclData for RegexMatcher {
    fn load(&mut self, source: &mut dyn TokenSource) -> Result<LoadSummary> {
        RegexMatcher::load(self, source)
    }

    fn matches(&self, word: Option<&str>) -> bool {
        RegexMatcher::matches(self, word)
    }

    fn dump(&self) -> Vec<String> {
        RegexMatcher::dump(self)
    }

    fn is_empty(&self) -> bool {
        RegexMatcher::is_empty(self)
    }

    fn try_clone(&self) -> std::result::Result<Box<dyn AclData>, AclError> {
        Ok(Box::new(self.try_clone_empty()?))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
