//! Composable page section renderers.
//!
//! Each component writes one part of a page as plain text. The renderer
//! chooses a page layout and calls these in order.
//!
//! # Components
//!
//! - [`header`]: Page title and caption
//! - [`search`]: Search query line and facet tabs
//! - [`table`]: Record rows and ranked lists
//! - [`footer`]: Result summary and quick stats
//! - [`empty`]: Empty state message when nothing matches
//!
//! # Layouts
//!
//! - [`render_list`]: Header, search, tabs, table (or empty state), footer
//! - [`render_dashboard`]: Header, stat cards, recent orders, top products
//! - [`render_settings`]: Header, one block per settings section

mod empty;
mod footer;
mod header;
mod search;
mod table;

use crate::ui::viewmodel::{DashboardViewModel, ListViewModel, SettingsViewModel};
use std::io::{self, Write};

use empty::render_empty_state;
use footer::{render_quick_stats, render_summary};
use header::render_header;
use search::{render_facet_tabs, render_search_bar};
use table::{render_ranked_rows, render_table_rows};

/// Output width in characters.
pub const WIDTH: usize = 80;

/// Writes a horizontal rule across the output width.
fn render_border(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(WIDTH))
}

/// Renders a list page.
///
/// Layout structure:
/// ```text
/// [Header]
/// [Border]
/// [Search Bar]
/// [Facet Tabs]
/// [Table Rows | Empty State]
/// [Border]
/// [Summary]
/// [Quick Stats]
/// ```
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_list(out: &mut impl Write, vm: &ListViewModel) -> io::Result<()> {
    render_header(out, &vm.title, Some(&vm.heading))?;
    render_border(out)?;
    render_search_bar(out, &vm.search_bar)?;
    render_facet_tabs(out, &vm.facet_tabs)?;
    writeln!(out)?;

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty)?;
    } else {
        render_table_rows(out, &vm.display_items)?;
    }

    render_border(out)?;
    render_summary(out, &vm.summary)?;
    render_quick_stats(out, &vm.quick_stats)
}

/// Renders the dashboard overview.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_dashboard(out: &mut impl Write, vm: &DashboardViewModel) -> io::Result<()> {
    render_header(out, &vm.title, Some(&vm.greeting))?;
    render_border(out)?;

    for stat in &vm.stats {
        writeln!(out, "{:<24}{:>16}  {}", stat.title, stat.value, stat.change)?;
    }
    writeln!(out)?;

    render_header(out, "Recent Orders", Some(&vm.recent_orders_caption))?;
    render_table_rows(out, &vm.recent_orders)?;
    writeln!(out)?;

    render_header(out, "Top Products", Some("Best selling products this month"))?;
    render_ranked_rows(out, &vm.top_products)
}

/// Renders the settings form.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_settings(out: &mut impl Write, vm: &SettingsViewModel) -> io::Result<()> {
    let caption = if vm.is_dirty { "Unsaved changes" } else { "Manage your store settings and preferences" };
    render_header(out, &vm.title, Some(caption))?;
    render_border(out)?;

    for section in &vm.sections {
        writeln!(out, "{}", section.title)?;
        for row in &section.rows {
            writeln!(out, "  {:<28}{:<30}[{}]", row.label, row.value, row.key)?;
        }
        writeln!(out)?;
    }
    Ok(())
}
