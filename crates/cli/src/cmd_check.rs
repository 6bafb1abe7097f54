// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::io::{BufRead, Write};

use rayon::prelude::*;

use rxacl::acl::AclSet;
use rxacl::cli::{CheckArgs, Cli, OutputFormat};
use rxacl::config;
use rxacl::error::ExitCode;
use rxacl::output::{self, WordResult};

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = config::resolve_path(cli.config.as_deref(), &cwd)?;

    tracing::debug!("loading config from {}", path.display());
    let mut config = config::load_with_warnings(&path)?;
    config.regex.parse_only = args.config_only;

    let acls = AclSet::from_config(&config, &path)?;
    if args.config_only {
        tracing::debug!("config ok: {} acl(s)", acls.len());
        return Ok(ExitCode::Success);
    }

    let selected = acls.select(args.acl.as_deref())?;
    let words = if args.words.is_empty() {
        read_stdin_words()?
    } else {
        args.words.clone()
    };

    let results: Vec<WordResult> = words
        .into_par_iter()
        .map(|word| {
            let acls = selected
                .iter()
                .filter(|(_, data)| data.matches(Some(word.as_str())))
                .map(|(name, _)| name.to_string())
                .collect();
            WordResult { word, acls }
        })
        .collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output {
        OutputFormat::Text => output::write_text(&mut out, &results)?,
        OutputFormat::Json => output::write_json(&mut out, &results)?,
    }
    out.flush()?;

    if results.iter().any(WordResult::matched) {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatch)
    }
}

fn read_stdin_words() -> std::io::Result<Vec<String>> {
    std::io::stdin()
        .lock()
        .lines()
        .filter(|line| !matches!(line, Ok(l) if l.is_empty()))
        .collect()
}
