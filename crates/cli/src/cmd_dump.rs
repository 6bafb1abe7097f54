// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `rxacl dump` command implementation.

use std::io::Write;

use rxacl::acl::AclSet;
use rxacl::cli::{Cli, DumpArgs};
use rxacl::config;
use rxacl::output;

/// Print each selected ACL as `NAME TOKEN...`.
pub fn run(cli: &Cli, args: &DumpArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let path = config::resolve_path(cli.config.as_deref(), &cwd)?;
    let config = config::load_with_warnings(&path)?;
    let acls = AclSet::from_config(&config, &path)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (name, data) in acls.select(args.acl.as_deref())? {
        output::write_dump(&mut out, name, &data.dump())?;
    }
    out.flush()?;
    Ok(())
}
