//! Record table component.
//!
//! Renders display items as fixed-width rows:
//!
//! ```text
//! > #ORD-12345 [Jo]hn Doe            Wireless Headphones   $299.99   Completed
//!              john@example.com
//! ```
//!
//! The selected row is marked with `>`, query matches in the title with
//! brackets.

use crate::ui::helpers::{mark_ranges, pad_column};
use crate::ui::viewmodel::{DisplayItem, RankedItem};
use std::io::{self, Write};

const ID_WIDTH: usize = 12;
const TITLE_WIDTH: usize = 24;
const DETAIL_WIDTH: usize = 22;
const AMOUNT_WIDTH: usize = 12;

/// Writes every item, two lines each.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_table_rows(out: &mut impl Write, items: &[DisplayItem]) -> io::Result<()> {
    for item in items {
        render_table_row(out, item)?;
    }
    Ok(())
}

fn render_table_row(out: &mut impl Write, item: &DisplayItem) -> io::Result<()> {
    let marker = if item.is_selected { '>' } else { ' ' };
    let title = mark_ranges(&item.title, &item.highlight_ranges);

    writeln!(
        out,
        "{marker} {} {} {} {:>AMOUNT_WIDTH$}  {}",
        pad_column(&item.id, ID_WIDTH),
        pad_column(&title, TITLE_WIDTH),
        pad_column(&item.detail, DETAIL_WIDTH),
        item.amount,
        item.badge,
    )?;
    writeln!(out, "  {} {}", " ".repeat(ID_WIDTH), item.subtitle)
}

/// Writes a numbered ranking, one line per item.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_ranked_rows(out: &mut impl Write, items: &[RankedItem]) -> io::Result<()> {
    for item in items {
        writeln!(
            out,
            "{:>2}. {} {} {:>AMOUNT_WIDTH$}",
            item.rank,
            pad_column(&item.name, TITLE_WIDTH + 4),
            pad_column(&item.detail, DETAIL_WIDTH - 4),
            item.amount,
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_row_is_marked_and_highlighted() {
        let item = DisplayItem {
            id: "#ORD-1".to_string(),
            title: "Jane Smith".to_string(),
            subtitle: "jane@example.com".to_string(),
            detail: "1 item: Mouse".to_string(),
            badge: "Pending".to_string(),
            amount: "$79.99".to_string(),
            is_selected: true,
            highlight_ranges: vec![(0, 4)],
        };

        let mut out = Vec::new();
        render_table_rows(&mut out, &[item]).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("> #ORD-1"));
        assert!(text.contains("[Jane] Smith"));
        assert!(text.contains("jane@example.com"));
    }
}
