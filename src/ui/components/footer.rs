//! List footer: result summary and quick stats.

use crate::ui::viewmodel::QuickStat;
use std::io::{self, Write};

/// Writes the "Showing X of N" line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_summary(out: &mut impl Write, summary: &str) -> io::Result<()> {
    writeln!(out, "{summary}")
}

/// Writes quick stats as `label: value` pairs on one line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_quick_stats(out: &mut impl Write, stats: &[QuickStat]) -> io::Result<()> {
    if stats.is_empty() {
        return Ok(());
    }
    let line: Vec<String> = stats.iter().map(|s| format!("{}: {}", s.label, s.value)).collect();
    writeln!(out, "{}", line.join("  |  "))
}
