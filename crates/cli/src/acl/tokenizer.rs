// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Token sources feeding [`RegexMatcher::load`](super::RegexMatcher::load).
//!
//! A directive is split on whitespace. A double-quoted token names a file
//! whose non-comment lines are split the same way.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::context::ParseContext;
use crate::error::{Error, Result};

/// Token text plus where it was read from. The text is already unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceToken {
    pub text: String,
    pub context: ParseContext,
}

/// Yields the raw tokens of one directive or included file.
pub trait TokenSource {
    /// Next token, or `None` once the directive is exhausted.
    fn next_token(&mut self) -> Result<Option<SourceToken>>;

    /// Location of the most recently returned token (or the directive itself).
    fn context(&self) -> &ParseContext;
}

/// Tokens held in memory, all sharing one context.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: VecDeque<String>,
    context: ParseContext,
}

impl TokenList {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_context(tokens, ParseContext::default())
    }

    pub fn with_context<I, S>(tokens: I, context: ParseContext) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            context,
        }
    }
}

impl TokenSource for TokenList {
    fn next_token(&mut self) -> Result<Option<SourceToken>> {
        Ok(self.tokens.pop_front().map(|text| SourceToken {
            text,
            context: self.context.clone(),
        }))
    }

    fn context(&self) -> &ParseContext {
        &self.context
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Word {
    Text(String),
    Include(String),
}

/// Tokens of one configuration directive, expanding quoted include files.
#[derive(Debug)]
pub struct DirectiveTokens {
    words: VecDeque<Word>,
    pending: VecDeque<SourceToken>,
    base_dir: PathBuf,
    directive: ParseContext,
    current: ParseContext,
}

impl DirectiveTokens {
    /// Split `directive`; include paths resolve against `base_dir`.
    pub fn new(directive: &str, context: ParseContext, base_dir: impl Into<PathBuf>) -> Result<Self> {
        let words = split_words(directive).map_err(|message| Error::Config {
            message: format!("{}: {}", context, message),
            path: Some(context.file.clone()),
        })?;

        Ok(Self {
            words: words.into(),
            pending: VecDeque::new(),
            base_dir: base_dir.into(),
            current: context.clone(),
            directive: context,
        })
    }

    fn read_include(&mut self, name: &str) -> Result<()> {
        let path = resolve_include(&self.base_dir, name);
        tracing::debug!("reading regex patterns from {}", path.display());

        let content = std::fs::read_to_string(&path).map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?;
        self.pending.extend(file_tokens(&path, &content));
        Ok(())
    }
}

impl TokenSource for DirectiveTokens {
    fn next_token(&mut self) -> Result<Option<SourceToken>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                self.current = token.context.clone();
                return Ok(Some(token));
            }

            match self.words.pop_front() {
                None => return Ok(None),
                Some(Word::Include(name)) => self.read_include(&name)?,
                Some(Word::Text(text)) => {
                    self.current = self.directive.clone();
                    return Ok(Some(SourceToken {
                        text,
                        context: self.directive.clone(),
                    }));
                }
            }
        }
    }

    fn context(&self) -> &ParseContext {
        &self.current
    }
}

fn resolve_include(base_dir: &Path, name: &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Whitespace-separated tokens of every line; lines starting with `#` are comments.
///
/// Lines split the same way directives do, so no token ever holds whitespace
/// and a dump always reloads to the same patterns.
fn file_tokens(path: &Path, content: &str) -> Vec<SourceToken> {
    content
        .lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim_start().starts_with('#'))
        .flat_map(|(idx, raw)| {
            let context = ParseContext::included(path, idx as u32 + 1, raw);
            raw.split_whitespace().map(move |text| SourceToken {
                text: text.to_string(),
                context: context.clone(),
            })
        })
        .collect()
}

fn split_words(directive: &str) -> std::result::Result<Vec<Word>, String> {
    let mut words = Vec::new();
    let mut chars = directive.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if c == '"' {
            chars.next();
            let mut name = String::new();
            let mut closed = false;
            for (_, c) in chars.by_ref() {
                if c == '"' {
                    closed = true;
                    break;
                }
                name.push(c);
            }
            if !closed {
                return Err(format!("unterminated quote at byte {}", start));
            }
            if name.is_empty() {
                return Err("empty include file name".to_string());
            }
            words.push(Word::Include(name));
            continue;
        }

        let mut end = directive.len();
        while let Some(&(idx, c)) = chars.peek() {
            if c.is_whitespace() {
                end = idx;
                break;
            }
            chars.next();
        }
        words.push(Word::Text(directive[start..end].to_string()));
    }

    Ok(words)
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
