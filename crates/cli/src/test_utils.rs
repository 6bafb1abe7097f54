// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the rxacl crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use tempfile::TempDir;

/// Creates a temp directory holding an rxacl.toml with `config` as content.
pub fn temp_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("rxacl.toml"), config).unwrap();
    dir
}

/// Creates a temp directory with a minimal rxacl.toml.
pub fn temp_minimal_config() -> TempDir {
    temp_config("version = 1\n")
}
