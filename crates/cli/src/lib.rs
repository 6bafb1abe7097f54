// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regular-expression ACL data for proxy access rules.
//!
//! Administrator patterns are trimmed, merged into as few alternations as
//! possible, and matched per request in configuration order.

pub mod acl;
pub mod cli;
pub mod config;
pub mod context;
pub mod env;
pub mod error;
pub mod output;
pub mod pattern;

pub use acl::{AclData, AclError, AclSet, LoadSummary, RawToken, RegexMatcher, TokenList, TokenSource};
pub use cli::{CheckArgs, Cli, Command, DumpArgs, OutputFormat};
pub use config::{Config, RegexOptions};
pub use context::ParseContext;
pub use error::{Error, ExitCode, Result};
pub use pattern::{CompiledPattern, PatternError, PatternFlags};

#[cfg(test)]
pub mod test_utils;
