// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Collect verification times across directories

use crate::discover::find_fstar_output_files;
use crate::extract::parse_fstar_output;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File path -> verification time in milliseconds (`None` = no timing data)
pub type TimeMapping = BTreeMap<String, Option<u64>>;

/// Collect the time of every F* output file under `dir`
pub fn collect_times_dir(dir: &Path) -> Result<TimeMapping> {
    let files = find_fstar_output_files(dir)?;
    tracing::debug!(dir = %dir.display(), files = files.len(), "collecting");

    let mut times = TimeMapping::new();
    for file in files {
        let time = parse_fstar_output(&file)?;
        times.insert(file.display().to_string(), time);
    }
    Ok(times)
}

/// Collect times from every directory; later directories win on duplicate paths
pub fn collect_times(dirs: &[PathBuf]) -> Result<TimeMapping> {
    let mut times = TimeMapping::new();
    for dir in dirs {
        times.extend(collect_times_dir(dir)?);
    }
    Ok(times)
}

/// Sum of all defined times; files without data are skipped, not counted as zero
pub fn total_time(times: &TimeMapping) -> u64 {
    times
        .values()
        .flatten()
        .fold(0u64, |acc, t| acc.saturating_add(*t))
}
