//! Presentation layer.
//!
//! Turns application state into view models and view models into text.
//!
//! ```text
//! AppState → compute_viewmodel → PageViewModel → render → text
//!                                      ↓
//!                                serde_json (--json)
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready page types, serializable to JSON
//! - [`present`]: Per-record labels, badges and quick stats
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Page section renderers
//! - [`helpers`]: Casing, highlighting and column formatting

pub mod components;
pub mod helpers;
pub mod present;
pub mod renderer;
pub mod viewmodel;

pub use present::{ItemView, Present};
pub use renderer::{render, render_viewmodel};
pub use viewmodel::{
    DashboardViewModel, DisplayItem, EmptyState, FacetTab, ListViewModel, PageViewModel, QuickStat, SearchBarInfo,
    SettingsViewModel,
};
