// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles rxacl.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "rxacl.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Regex compilation tuning.
    #[serde(default)]
    pub regex: RegexOptions,

    /// Named regex ACLs, in name order.
    #[serde(default)]
    pub acl: BTreeMap<String, AclConfig>,
}

/// Tuning for how pattern lists are compiled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegexOptions {
    /// Capacity of one merged alternation, in bytes (default: 8192).
    ///
    /// Patterns longer than `max_buffer - 1` are dropped at load time.
    #[serde(default = "RegexOptions::default_max_buffer")]
    pub max_buffer: usize,

    /// Warn when more than this many patterns are merged in one load (default: 100).
    #[serde(default = "RegexOptions::default_merge_warning_threshold")]
    pub merge_warning_threshold: usize,

    /// Parse-only mode: raise operational warnings to warn level.
    #[serde(skip)]
    pub parse_only: bool,
}

impl Default for RegexOptions {
    fn default() -> Self {
        Self {
            max_buffer: Self::default_max_buffer(),
            merge_warning_threshold: Self::default_merge_warning_threshold(),
            parse_only: false,
        }
    }
}

impl RegexOptions {
    /// Smallest usable `max_buffer`: room for `(x)`, the separator and margin.
    pub const MIN_MAX_BUFFER: usize = 8;

    fn default_max_buffer() -> usize {
        8192
    }

    fn default_merge_warning_threshold() -> usize {
        100
    }

    /// Longest single pattern accepted at load time.
    pub fn max_pattern_len(&self) -> usize {
        self.max_buffer.saturating_sub(1)
    }
}

/// One named ACL.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AclConfig {
    /// Directive lines; each is loaded in order and appends to the ACL.
    #[serde(default)]
    pub directives: Vec<String>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "regex", "acl"];

/// Known keys in the `[regex]` table.
const KNOWN_REGEX_KEYS: &[&str] = &["max_buffer", "merge_warning_threshold"];

/// Known keys in each `[acl.<name>]` table.
const KNOWN_ACL_KEYS: &[&str] = &["directives"];

/// Resolve the config path from an explicit argument or the working directory.
pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => cwd.join(DEFAULT_CONFIG_FILE),
    };

    if path.exists() {
        Ok(path)
    } else {
        Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path),
        })
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade rxacl to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    let config: Config = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    validate(&config, path)?;
    Ok(config)
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;

    // Strict parse succeeded, so the content is a valid table.
    if let Ok(table) = toml::from_str::<toml::Table>(content) {
        for key in unknown_keys(&table) {
            warn_unknown_key(path, &key);
        }
    }

    Ok(config)
}

fn validate(config: &Config, path: &Path) -> Result<()> {
    if config.regex.max_buffer < RegexOptions::MIN_MAX_BUFFER {
        return Err(Error::Config {
            message: format!(
                "regex.max_buffer must be at least {} (got {})",
                RegexOptions::MIN_MAX_BUFFER,
                config.regex.max_buffer
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

/// Dotted paths of keys the config does not recognize.
fn unknown_keys(table: &toml::Table) -> Vec<String> {
    let mut unknown = Vec::new();

    for (key, value) in table {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown.push(key.clone());
            continue;
        }

        match (key.as_str(), value) {
            ("regex", toml::Value::Table(regex)) => {
                for key in regex.keys() {
                    if !KNOWN_REGEX_KEYS.contains(&key.as_str()) {
                        unknown.push(format!("regex.{}", key));
                    }
                }
            }
            ("acl", toml::Value::Table(acls)) => {
                for (name, acl) in acls {
                    let Some(acl) = acl.as_table() else { continue };
                    for key in acl.keys() {
                        if !KNOWN_ACL_KEYS.contains(&key.as_str()) {
                            unknown.push(format!("acl.{}.{}", name, key));
                        }
                    }
                }
            }
            _ => {}
        }
    }

    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "rxacl: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
