// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Extract verification times from F* output
//!
//! F* reports each successfully verified unit on a line such as
//! `Verified module: FStar.List (1234 milliseconds)`. A file's time is the
//! sum of every such report in it.

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static VERIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Verified.*\(([0-9]+) milliseconds\)").expect("verified-line pattern is valid")
});

/// Parse the millisecond count from a single line, if it is a verification report
pub fn parse_verified_line(line: &str) -> Option<u64> {
    let cap = VERIFIED_RE.captures(line)?;
    cap[1].parse().ok()
}

/// Sum the verification times reported in `text`
///
/// Returns `None` when no line matches, so an unverified file is never
/// confused with one that verified in zero milliseconds.
pub fn scan_times(text: &str) -> Option<u64> {
    let mut total: Option<u64> = None;
    for ms in text.lines().filter_map(parse_verified_line) {
        total = Some(total.unwrap_or(0).saturating_add(ms));
    }
    total
}

/// Read an F* output file and sum its verification times
pub fn parse_fstar_output(path: &Path) -> Result<Option<u64>> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read F* output: {}", path.display()))?;
    let time = scan_times(&String::from_utf8_lossy(&bytes));
    tracing::debug!(path = %path.display(), ?time, "scanned");
    Ok(time)
}
