// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Side-by-side comparison of two results.
//!
//! Rows, top to bottom: names, iterations (warmup), average, fastest,
//! slowest, failures.
//!
//! Emphasis rules:
//! - average and fastest: when the left value is greater, the right value is
//!   painted [`Tone::Favored`]; otherwise the left one is.
//! - slowest: when the left value is greater, the left value is painted
//!   [`Tone::Unfavored`]; otherwise the right one is.
//! - failures: each side is shaded by its own severity, the two sides are
//!   not compared.
//!
//! Ties and NaN averages fall into the "otherwise" branch.

use crate::align::{align, AlignedRow};
use crate::render::{AnsiPalette, Palette, PlainPalette, Tone};
use crate::result::BenchmarkResult;

/// Returned when neither result is present.
pub const BOTH_MISSING: &str = "Both benchmark results are missing!";

/// Compare two results, styled for a terminal.
pub fn compare(a: Option<&BenchmarkResult>, b: Option<&BenchmarkResult>) -> String {
    compare_with(a, b, &AnsiPalette)
}

/// Compare two results without any styling.
pub fn compare_plain(a: Option<&BenchmarkResult>, b: Option<&BenchmarkResult>) -> String {
    compare_with(a, b, &PlainPalette)
}

/// Compare two results through `palette`.
///
/// With one result missing this is the present result's own report.
pub fn compare_with(
    a: Option<&BenchmarkResult>,
    b: Option<&BenchmarkResult>,
    palette: &dyn Palette,
) -> String {
    match (a, b) {
        (None, None) => palette.paint(BOTH_MISSING, Tone::Alert),
        (None, Some(only)) | (Some(only), None) => only.render(palette),
        (Some(a), Some(b)) => compare_both(a, b, palette),
    }
}

fn compare_both(a: &BenchmarkResult, b: &BenchmarkResult, palette: &dyn Palette) -> String {
    let paint_row = |row: AlignedRow, left: Tone, right: Tone| {
        format!(
            "{}{}{}",
            palette.paint(&row.left, left),
            palette.paint(&row.mid, Tone::Label),
            palette.paint(&row.right, right)
        )
    };

    let mut lines = Vec::with_capacity(6);

    lines.push(paint_row(
        align(a.name(), Some("vs"), b.name()),
        Tone::Heading,
        Tone::Heading,
    ));

    lines.push(paint_row(
        align(
            Some(&iterations_cell(a)),
            Some("Iters(Warmup)"),
            Some(&iterations_cell(b)),
        ),
        Tone::Count,
        Tone::Count,
    ));

    let (left, right) = favor_smaller(a.average(), b.average());
    lines.push(paint_row(
        align(
            Some(&a.average().to_string()),
            Some("...Average..."),
            Some(&b.average().to_string()),
        ),
        left,
        right,
    ));

    let (left, right) = favor_smaller(a.fastest(), b.fastest());
    lines.push(paint_row(
        align(
            Some(&a.fastest().to_string()),
            Some("...Fastest..."),
            Some(&b.fastest().to_string()),
        ),
        left,
        right,
    ));

    let (left, right) = if a.slowest() > b.slowest() {
        (Tone::Unfavored, Tone::Slow)
    } else {
        (Tone::Slow, Tone::Unfavored)
    };
    lines.push(paint_row(
        align(
            Some(&a.slowest().to_string()),
            Some("...Slowest..."),
            Some(&b.slowest().to_string()),
        ),
        left,
        right,
    ));

    lines.push(paint_row(
        align(
            Some(&failures_cell(a)),
            Some("...Failures..."),
            Some(&failures_cell(b)),
        ),
        Tone::Severity(a.severity()),
        Tone::Severity(b.severity()),
    ));

    lines.join("\n")
}

fn favor_smaller(a: f64, b: f64) -> (Tone, Tone) {
    if a > b {
        (Tone::Count, Tone::Favored)
    } else {
        (Tone::Favored, Tone::Count)
    }
}

fn iterations_cell(result: &BenchmarkResult) -> String {
    let options = result.options();
    format!(
        "{} ({})",
        options
            .iterations
            .map_or_else(|| "?".to_string(), |i| i.to_string()),
        options.warmup_iterations.unwrap_or(0)
    )
}

fn failures_cell(result: &BenchmarkResult) -> String {
    format!("{} ({}%)", result.failures(), result.failure_percent())
}
