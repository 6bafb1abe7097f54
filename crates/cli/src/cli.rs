// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Regular-expression ACL matching for proxy access rules
#[derive(Parser)]
#[command(name = "rxacl")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file (default: ./rxacl.toml)
    #[arg(short = 'C', long = "config", global = true, env = "RXACL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match words against the configured ACLs
    Check(CheckArgs),
    /// Print the compiled ACLs in configuration syntax
    Dump(DumpArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Words to match (read from stdin, one per line, when omitted)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Only match against this ACL
    #[arg(long, value_name = "NAME")]
    pub acl: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Validate config and exit without matching
    #[arg(long = "config-only")]
    pub config_only: bool,
}

#[derive(clap::Args)]
pub struct DumpArgs {
    /// Only dump this ACL
    #[arg(long, value_name = "NAME")]
    pub acl: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
