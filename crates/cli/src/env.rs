// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by rxacl.

include!(concat!(env!("OUT_DIR"), "/env_names.rs"));

/// Log filter from `RXACL_LOG`, if set.
pub fn log_filter() -> Option<String> {
    std::env::var(RXACL_LOG).ok()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
