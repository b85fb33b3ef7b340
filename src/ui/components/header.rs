//! Page header component.

use std::io::{self, Write};

/// Writes the page title and an optional caption line.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_header(out: &mut impl Write, title: &str, caption: Option<&str>) -> io::Result<()> {
    writeln!(out, "{title}")?;
    if let Some(caption) = caption {
        writeln!(out, "{caption}")?;
    }
    Ok(())
}
