// Copyright (c) 2025 Brian G. Milnes
// SPDX-License-Identifier: MIT

//! Text tables for collected times and snapshot comparisons
//!
//! Everything here is pure: builders turn mappings into a `Table`, and
//! `Table::render` turns a table into a string. Printing is left to callers.

use crate::collect::{total_time, TimeMapping};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// File path -> `t1 - t2` in milliseconds
pub type DeltaMapping = BTreeMap<String, i64>;

/// Cell shown for a file with no timing data
pub const NO_DATA: &str = "no data";

/// Cell shown where no delta could be computed
pub const NOT_AVAILABLE: &str = "n/a";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// A bordered text table with per-column alignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    aligns: Vec<Align>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: &[(&str, Align)]) -> Self {
        Table {
            headers: columns.iter().map(|(h, _)| h.to_string()).collect(),
            aligns: columns.iter().map(|(_, a)| *a).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row; missing trailing cells render empty, extra cells are dropped
    pub fn add_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_widths(&self) -> Vec<usize> {
        (0..self.headers.len())
            .map(|col| {
                std::iter::once(&self.headers[col])
                    .chain(self.rows.iter().map(|row| &row[col]))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render as text, one line per rule or row, each ending in a newline
    pub fn render(&self) -> String {
        let widths = self.column_widths();

        let mut rule = String::from("+");
        for w in &widths {
            rule.push_str(&"-".repeat(w + 2));
            rule.push('+');
        }
        rule.push('\n');

        let mut out = rule.clone();
        out.push('|');
        for (header, w) in self.headers.iter().zip(widths.iter().copied()) {
            out.push_str(&format!(" {header:^w$} |"));
        }
        out.push('\n');
        out.push_str(&rule);

        for row in &self.rows {
            out.push('|');
            for ((cell, w), align) in row.iter().zip(widths.iter().copied()).zip(&self.aligns) {
                match align {
                    Align::Left => out.push_str(&format!(" {cell:<w$} |")),
                    Align::Right => out.push_str(&format!(" {cell:>w$} |")),
                }
            }
            out.push('\n');
        }
        out.push_str(&rule);
        out
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Last path component, or the whole path if it has none
fn display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string())
}

fn time_cell(time: Option<u64>) -> String {
    time.map_or_else(|| NO_DATA.to_string(), |t| t.to_string())
}

/// Table of every file's time, sorted by path, with a trailing total
pub fn absolute_table(times: &TimeMapping) -> Table {
    let mut table = Table::new(&[
        ("Filename", Align::Left),
        ("Time", Align::Right),
        ("Full Path", Align::Left),
    ]);

    // TimeMapping iterates in path order
    for (path, time) in times {
        table.add_row(vec![display_name(path), time_cell(*time), path.clone()]);
    }

    table.add_row(vec![String::new(); 3]);
    table.add_row(vec![
        "Total".to_string(),
        total_time(times).to_string(),
        String::new(),
    ]);
    table
}

fn signed_delta(t1: u64, t2: u64) -> i64 {
    let delta = i128::from(t1) - i128::from(t2);
    delta.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
}

/// Per-file `t1 - t2` for files timed in `t1` and `t2`
///
/// Files missing from `t2`, or without data on either side, have no delta.
pub fn compute_diff(t1: &TimeMapping, t2: &TimeMapping) -> DeltaMapping {
    t1.iter()
        .filter_map(|(path, time)| {
            let base = (*time)?;
            let other = (*t2.get(path)?)?;
            Some((path.clone(), signed_delta(base, other)))
        })
        .collect()
}

/// `delta / base` as a percentage string with one decimal place
///
/// The quotient itself is unscaled; only its rendering is a percentage.
pub fn format_delta_percent(delta: i64, base: u64) -> String {
    if base == 0 {
        return NOT_AVAILABLE.to_string();
    }
    let ratio = delta as f64 / base as f64;
    format!("{:.1}", ratio * 100.0)
}

/// Comparison table of `t1` times against computed deltas, sorted by delta
///
/// Files without a delta show `n/a` and are listed after all files with one.
pub fn diff_table(t1: &TimeMapping, deltas: &DeltaMapping) -> Table {
    let mut table = Table::new(&[
        ("Filename", Align::Left),
        ("t1 time", Align::Right),
        ("delta", Align::Right),
        ("delta %", Align::Right),
        ("Full Path", Align::Left),
    ]);

    let mut rows: Vec<(&String, Option<u64>, Option<i64>)> = t1
        .iter()
        .map(|(path, time)| (path, *time, deltas.get(path).copied()))
        .collect();
    // Stable sort over path-ordered input, so equal deltas stay in path order
    rows.sort_by_key(|(_, _, delta)| (delta.is_none(), *delta));

    for (path, time, delta) in rows {
        let (delta_cell, percent_cell) = match (delta, time) {
            (Some(d), Some(t)) => (d.to_string(), format_delta_percent(d, t)),
            _ => (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string()),
        };
        table.add_row(vec![
            display_name(path),
            time_cell(time),
            delta_cell,
            percent_cell,
            path.clone(),
        ]);
    }
    table
}
