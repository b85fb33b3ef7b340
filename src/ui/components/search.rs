//! Search bar and facet tab components.

use crate::ui::viewmodel::{FacetTab, SearchBarInfo};
use std::io::{self, Write};

/// Writes the search line, showing the placeholder when the query is empty.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_search_bar(out: &mut impl Write, search: &SearchBarInfo) -> io::Result<()> {
    if search.query.is_empty() {
        writeln!(out, "Search: ({})", search.placeholder)
    } else {
        writeln!(out, "Search: {}", search.query)
    }
}

/// Writes facet tabs on one line; the active tab is wrapped in `<...>`.
///
/// Nothing is written when there are no tabs.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_facet_tabs(out: &mut impl Write, tabs: &[FacetTab]) -> io::Result<()> {
    if tabs.is_empty() {
        return Ok(());
    }

    let line: Vec<String> = tabs
        .iter()
        .map(|tab| {
            if tab.is_active {
                format!("<{}>", tab.label)
            } else {
                format!(" {} ", tab.label)
            }
        })
        .collect();
    writeln!(out, "{}", line.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tab(value: &str, count: usize, is_active: bool) -> FacetTab {
        FacetTab {
            facet: "status".to_string(),
            value: value.to_string(),
            label: format!("{value} ({count})"),
            count,
            is_active,
        }
    }

    #[test]
    fn active_tab_is_bracketed() {
        let mut out = Vec::new();
        render_facet_tabs(&mut out, &[tab("all", 2, false), tab("pending", 1, true)]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), " all (2)  <pending (1)>\n");
    }
}
