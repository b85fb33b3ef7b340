//! Top-level rendering coordinator.
//!
//! Computes the view model of the active page and delegates to the matching
//! component layout. Output is plain text written to any [`Write`] sink, so
//! the CLI renders to stdout and tests render into a `Vec<u8>`.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{AppState, Page};
//! use storefront_console::fixtures::JsonFixtures;
//! use storefront_console::ui::render;
//!
//! let state = AppState::from_store(&JsonFixtures::embedded()?, Page::Orders)?;
//! let mut out = Vec::new();
//! render(&state, &mut out)?;
//! assert!(String::from_utf8_lossy(&out).contains("Showing 5 of 5 orders"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::viewmodel::PageViewModel;
use std::io::{self, Write};

/// Renders the current page of `state` to `out`.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render(state: &AppState, out: &mut impl Write) -> io::Result<()> {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, out)
}

/// Renders a pre-computed view model.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_viewmodel(vm: &PageViewModel, out: &mut impl Write) -> io::Result<()> {
    match vm {
        PageViewModel::Dashboard(dashboard) => components::render_dashboard(out, dashboard),
        PageViewModel::List(list) => components::render_list(out, list),
        PageViewModel::Settings(settings) => components::render_settings(out, settings),
    }
}
