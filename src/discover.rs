// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Find F* verification output files

use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions of F* output files: interface (`.vfsti`) and implementation (`.vfst`) logs
pub const FSTAR_OUTPUT_EXTENSIONS: [&str; 2] = ["vfsti", "vfst"];

/// Check whether a file name ends in one of the F* output extensions
///
/// Compares raw bytes, so names that are not valid UTF-8 still match.
pub fn is_fstar_output(file_name: &OsStr) -> bool {
    let name = file_name.as_encoded_bytes();
    FSTAR_OUTPUT_EXTENSIONS.iter().any(|ext| {
        name.strip_suffix(ext.as_bytes())
            .is_some_and(|stem| stem.ends_with(b"."))
    })
}

/// Find all F* output files recursively under `dir`
///
/// Returned paths keep `dir` as their prefix, so a relative root yields
/// relative paths. Traversal errors are returned, not skipped.
pub fn find_fstar_output_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.with_context(|| format!("Failed to walk directory: {}", dir.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if is_fstar_output(entry.file_name()) {
            files.push(entry.into_path());
        }
    }
    // Sort for deterministic, reproducible output
    files.sort();
    Ok(files)
}
