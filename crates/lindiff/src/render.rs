//! Text and JSON output for a diff result

use std::fmt::Write;

use anyhow::Result;
use lindiff_core::{ChangeRange, DiffOp, DiffResult, EditScript, Statistics};
use serde::Serialize;

/// One line per op: `- Line N: text`, `+ Line N: text`, and with
/// `show_equal` also `  Line A/B: text`
pub fn simple(script: &EditScript, show_equal: bool) -> String {
    let mut out = String::new();
    for op in script {
        match op {
            DiffOp::Delete { pos_a, text } => {
                let _ = writeln!(out, "- Line {}: {}", pos_a, text);
            }
            DiffOp::Insert { pos_b, text } => {
                let _ = writeln!(out, "+ Line {}: {}", pos_b, text);
            }
            DiffOp::Equal { pos_a, pos_b, text } if show_equal => {
                let _ = writeln!(out, "  Line {}/{}: {}", pos_a, pos_b, text);
            }
            DiffOp::Equal { .. } => {}
        }
    }
    out
}

pub fn unified(result: &DiffResult, name_a: &str, name_b: &str) -> String {
    result.unified(name_a, name_b).to_string()
}

pub fn stats(stats: &Statistics) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lines in A:     {:>6}", stats.lines_a());
    let _ = writeln!(out, "Lines in B:     {:>6}", stats.lines_b());
    let _ = writeln!(out, "Equal lines:    {:>6}", stats.equal());
    let _ = writeln!(out, "Deleted lines:  {:>6}", stats.deleted());
    let _ = writeln!(out, "Inserted lines: {:>6}", stats.inserted());
    let _ = writeln!(out, "Total changes:  {:>6}", stats.total_changes());
    let _ = writeln!(out, "Similarity:     {:>5.1}%", stats.similarity() * 100.0);
    out
}

pub fn ranges(ranges: &[ChangeRange]) -> String {
    let mut out = String::new();
    for (i, range) in ranges.iter().enumerate() {
        let _ = writeln!(out, "Range {}:", i + 1);
        if let Some(a) = &range.a {
            let _ = writeln!(out, "  A: lines {}-{}", a.start(), a.end());
        }
        if let Some(b) = &range.b {
            let _ = writeln!(out, "  B: lines {}-{}", b.start(), b.end());
        }
    }
    out
}

#[derive(Serialize)]
struct StatsView {
    lines_a: usize,
    lines_b: usize,
    equal: usize,
    inserted: usize,
    deleted: usize,
    total_changes: usize,
    similarity: f64,
}

impl From<&Statistics> for StatsView {
    fn from(stats: &Statistics) -> Self {
        Self {
            lines_a: stats.lines_a(),
            lines_b: stats.lines_b(),
            equal: stats.equal(),
            inserted: stats.inserted(),
            deleted: stats.deleted(),
            total_changes: stats.total_changes(),
            similarity: stats.similarity(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ops: &'a EditScript,
    stats: StatsView,
    ranges: Vec<ChangeRange>,
}

pub fn json(result: &DiffResult) -> Result<String> {
    let report = JsonReport {
        ops: result.script(),
        stats: StatsView::from(&result.stats()),
        ranges: result.change_ranges(),
    };
    let mut out = serde_json::to_string_pretty(&report)?;
    out.push('\n');
    Ok(out)
}
