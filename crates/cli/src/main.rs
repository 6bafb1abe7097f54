// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rxacl CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use rxacl::cli::{Cli, Command};
use rxacl::env;
use rxacl::error::ExitCode;

mod cmd_check;
mod cmd_dump;

fn init_logging() {
    let filter = env::log_filter()
        .and_then(|spec| EnvFilter::try_new(spec).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rxacl: {}", e);
            match e.downcast_ref::<rxacl::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check::run(&cli, args),
        Some(Command::Dump(args)) => {
            cmd_dump::run(&cli, args)?;
            Ok(ExitCode::Success)
        }
    }
}
