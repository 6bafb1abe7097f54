// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pattern handling: wildcard trimming and compilation.
//!
//! Both the alternation builder and the one-by-one fallback compile through
//! [`matcher::compile_into`]; neither touches the `regex` crate directly.

pub mod matcher;
pub mod trim;

pub use matcher::{CompiledPattern, PatternError, PatternFlags, check_syntax, compile_into};
pub use trim::{CATCH_ALL, strip_wildcards, trim_wildcards};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
