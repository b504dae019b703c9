// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Labelled snapshots of collected verification times.
//!
//! A snapshot is a versioned JSON document named `times.<label>.json`.
//! Snapshots are write-once: storing under a label that already has a file
//! leaves that file untouched and reports `StoreOutcome::Skipped`.

use crate::collect::TimeMapping;
use anyhow::{bail, Context, Result};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Format tag written into every snapshot
pub const SNAPSHOT_FORMAT: &str = "veritime-snapshot";

/// Current snapshot encoding version
pub const SNAPSHOT_VERSION: u32 = 1;

/// A persisted set of verification times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Always `SNAPSHOT_FORMAT`
    pub format: String,
    pub version: u32,
    /// Label the snapshot was stored under
    pub label: String,
    /// RFC 3339 UTC timestamp of when the snapshot was written
    pub created: String,
    /// File path -> milliseconds, `null` when the file had no timing data
    pub times: TimeMapping,
}

impl Snapshot {
    /// Wrap collected times as a snapshot stamped with the current time
    pub fn new(label: &str, times: TimeMapping) -> Self {
        Snapshot {
            format: SNAPSHOT_FORMAT.to_string(),
            version: SNAPSHOT_VERSION,
            label: label.to_string(),
            created: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            times,
        }
    }

    /// Parse a snapshot from JSON, rejecting unknown formats and versions
    pub fn from_str(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json).context("Failed to parse snapshot JSON")?;
        if snapshot.format != SNAPSHOT_FORMAT {
            bail!("Not a veritime snapshot (format \"{}\")", snapshot.format);
        }
        if snapshot.version != SNAPSHOT_VERSION {
            bail!(
                "Unsupported snapshot version {} (expected {SNAPSHOT_VERSION})",
                snapshot.version
            );
        }
        Ok(snapshot)
    }
}

/// Result of a `store` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The snapshot was written to this path
    Written(PathBuf),
    /// A snapshot already existed at this path; nothing was written
    Skipped(PathBuf),
}

/// File name backing a label: `times.<label>.json`
pub fn snapshot_file_name(label: &str) -> String {
    format!("times.{label}.json")
}

fn validate_label(label: &str) -> Result<()> {
    if label.is_empty() {
        bail!("Snapshot label must not be empty");
    }
    if label.contains('/') || label.contains('\\') || label.contains("..") {
        bail!("Snapshot label must not contain path separators or \"..\": {label}");
    }
    Ok(())
}

/// Store `times` under `label` in `dir`, unless that label already has a snapshot
pub fn store(times: &TimeMapping, label: &str, dir: &Path) -> Result<StoreOutcome> {
    validate_label(label)?;
    let path = dir.join(snapshot_file_name(label));

    if path.exists() {
        return Ok(skipped(path));
    }

    // create_new closes the gap between the check above and the write
    let file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(skipped(path)),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create snapshot: {}", path.display()))
        }
    };

    let snapshot = Snapshot::new(label, times.clone());
    write_new_snapshot(&path, BufWriter::new(file), &snapshot)?;

    tracing::info!(path = %path.display(), files = times.len(), "snapshot written");
    Ok(StoreOutcome::Written(path))
}

/// Write `snapshot` to the freshly created `path`, removing the file on failure
///
/// A partial file would otherwise hold the label forever.
fn write_new_snapshot<W: Write>(path: &Path, mut writer: W, snapshot: &Snapshot) -> Result<()> {
    let written = (|| -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, snapshot)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    })();
    // Close the file before removing it
    drop(writer);

    if let Err(e) = written {
        if let Err(remove_err) = fs::remove_file(path) {
            tracing::warn!(
                path = %path.display(),
                error = %remove_err,
                "could not remove partial snapshot"
            );
        }
        return Err(e).with_context(|| format!("Failed to write snapshot: {}", path.display()));
    }
    Ok(())
}

fn skipped(path: PathBuf) -> StoreOutcome {
    tracing::warn!(
        "Found existing snapshot {}. No data written. Consider moving or deleting it.",
        path.display()
    );
    StoreOutcome::Skipped(path)
}

/// Load a snapshot file
pub fn load(path: &Path) -> Result<Snapshot> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot: {}", path.display()))?;
    Snapshot::from_str(&content).with_context(|| format!("Invalid snapshot: {}", path.display()))
}
