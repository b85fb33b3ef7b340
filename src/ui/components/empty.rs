//! Empty state component.

use crate::ui::viewmodel::EmptyState;
use std::io::{self, Write};

/// Writes the two-line message shown when no records are visible.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_empty_state(out: &mut impl Write, empty: &EmptyState) -> io::Result<()> {
    writeln!(out, "  {}", empty.message)?;
    writeln!(out, "  {}", empty.subtitle)
}
