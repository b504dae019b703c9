// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Veritime - F* verification time collection
//!
//! This library finds F* verification logs, sums the per-unit verification
//! times they report, stores labelled snapshots, and renders comparison tables.

pub mod args;
pub mod collect;
pub mod discover;
pub mod extract;
pub mod report;
pub mod snapshot;

// Re-export commonly used items
pub use args::{TimesArgs, TimesCommand};
pub use collect::{collect_times, collect_times_dir, total_time, TimeMapping};
pub use discover::find_fstar_output_files;
pub use extract::{parse_fstar_output, scan_times};
pub use report::{absolute_table, compute_diff, diff_table, DeltaMapping, Table};
pub use snapshot::{load, store, Snapshot, StoreOutcome};
