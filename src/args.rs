// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Command line arguments for veritime-collect-times
//!
//! Two invocation shapes are accepted:
//! - `--dir DIR [--dir DIR...] --label LABEL`: collect, report and store
//! - `--t1 FILE --t2 FILE`: compare two stored snapshots
//!
//! Anything else resolves to `TimesCommand::Usage`.

use clap::Parser;
use std::path::PathBuf;

/// Printed when the flags match neither invocation shape
pub const USAGE_HINT: &str = "Invalid or insufficient arguments supplied.  Try running with -h";

#[derive(Parser, Debug, Clone)]
#[command(name = "veritime-collect-times", version)]
#[command(about = "Collect and summarize F* verification times")]
pub struct TimesArgs {
    /// Collect all results in this folder and its subfolders. May be repeated.
    #[arg(short, long, value_name = "DIR")]
    pub dir: Vec<PathBuf>,

    /// Label for the snapshot file holding the results
    #[arg(short, long)]
    pub label: Option<String>,

    /// Snapshot file of times to compare to t2
    #[arg(long, value_name = "FILE")]
    pub t1: Option<PathBuf>,

    /// Snapshot file of times to compare to t1
    #[arg(long, value_name = "FILE")]
    pub t2: Option<PathBuf>,

    /// Directory snapshots are written to
    #[arg(short = 'o', long, value_name = "DIR", env = "VERITIME_SNAPSHOT_DIR", default_value = ".")]
    pub snapshot_dir: PathBuf,

    /// Verbose tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

/// What an invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimesCommand {
    Collect {
        dirs: Vec<PathBuf>,
        label: String,
        snapshot_dir: PathBuf,
    },
    Compare {
        t1: PathBuf,
        t2: PathBuf,
    },
    Usage,
}

impl TimesArgs {
    /// Resolve flags to a command; collect wins when both shapes are given
    pub fn command(&self) -> TimesCommand {
        if let Some(label) = self.label.as_ref().filter(|_| !self.dir.is_empty()) {
            return TimesCommand::Collect {
                dirs: self.dir.clone(),
                label: label.clone(),
                snapshot_dir: self.snapshot_dir.clone(),
            };
        }
        if let (Some(t1), Some(t2)) = (&self.t1, &self.t2) {
            return TimesCommand::Compare {
                t1: t1.clone(),
                t2: t2.clone(),
            };
        }
        TimesCommand::Usage
    }
}
