// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Collect and compare F* verification times
//!
//! Scans F* output files (.vfst, .vfsti) for `Verified ... (N milliseconds)`
//! reports, prints per-file totals and stores them as a labelled snapshot.
//! Two snapshots can then be compared file by file.
//!
//! Usage:
//!   veritime-collect-times -d proofs -d ulib -l before
//!   veritime-collect-times --t1 times.after.json --t2 times.before.json
//!
//! Binary: veritime-collect-times

use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use veritime::args::USAGE_HINT;
use veritime::{
    absolute_table, collect_times, compute_diff, diff_table, load, store, StoreOutcome, TimesArgs,
    TimesCommand,
};

/// Send tracing to stderr; warnings always, everything with --debug
fn init_tracing(debug: bool) {
    let level = if debug { tracing::Level::DEBUG } else { tracing::Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn run_collect(dirs: &[PathBuf], label: &str, snapshot_dir: &Path) -> Result<()> {
    let times = collect_times(dirs)?;
    print!("{}", absolute_table(&times));

    if let StoreOutcome::Written(path) = store(&times, label, snapshot_dir)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_compare(t1: &Path, t2: &Path) -> Result<()> {
    let times1 = load(t1)?.times;
    let times2 = load(t2)?.times;
    let deltas = compute_diff(&times1, &times2);
    print!("{}", diff_table(&times1, &deltas));
    Ok(())
}

fn main() -> Result<()> {
    let args = TimesArgs::parse();
    init_tracing(args.debug);

    match args.command() {
        TimesCommand::Collect {
            dirs,
            label,
            snapshot_dir,
        } => run_collect(&dirs, &label, &snapshot_dir),
        TimesCommand::Compare { t1, t2 } => run_compare(&t1, &t2),
        TimesCommand::Usage => {
            println!("{USAGE_HINT}");
            Ok(())
        }
    }
}
