//! View model types representing renderable UI state.
//!
//! View models are computed from application state and contain display-ready
//! data only: labels are pre-formatted, counts pre-computed and the selected
//! row pre-marked. They serialize to JSON for the `--json` CLI output.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::ui::viewmodel::{FacetTab, ListViewModel, SearchBarInfo};
//!
//! let vm = ListViewModel {
//!     title: "Orders".to_string(),
//!     heading: "Orders (0)".to_string(),
//!     summary: "Showing 0 of 0 orders".to_string(),
//!     search_bar: SearchBarInfo { query: String::new(), placeholder: "Search".to_string() },
//!     facet_tabs: vec![FacetTab {
//!         facet: "status".to_string(),
//!         value: "all".to_string(),
//!         label: "All (0)".to_string(),
//!         count: 0,
//!         is_active: true,
//!     }],
//!     display_items: vec![],
//!     selected_index: None,
//!     quick_stats: vec![],
//!     empty_state: None,
//! };
//! assert_eq!(vm.active_tab().map(|t| t.value.as_str()), Some("all"));
//! ```

use serde::Serialize;

/// View model for whichever page is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageViewModel {
    Dashboard(DashboardViewModel),
    List(ListViewModel),
    Settings(SettingsViewModel),
}

/// A filterable list page (orders, products, users).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    /// Page title, e.g. `"Orders"`.
    pub title: String,

    /// Card heading with the visible count, e.g. `"Orders (3)"`.
    pub heading: String,

    /// Result summary, e.g. `"Showing 3 of 5 orders"`.
    pub summary: String,

    pub search_bar: SearchBarInfo,

    /// Tabs for the page's primary facet, counts taken from the base collection.
    pub facet_tabs: Vec<FacetTab>,

    /// Visible records in base-collection order.
    pub display_items: Vec<DisplayItem>,

    /// Position of the selected row within `display_items`.
    pub selected_index: Option<usize>,

    /// Summary figures shown under the list.
    pub quick_stats: Vec<QuickStat>,

    /// Set when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

impl ListViewModel {
    /// The tab matching the current selection.
    #[must_use]
    pub fn active_tab(&self) -> Option<&FacetTab> {
        self.facet_tabs.iter().find(|tab| tab.is_active)
    }
}

/// One facet value button, e.g. "Pending (1)".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetTab {
    pub facet: String,
    /// Raw facet value (`"all"` for the sentinel).
    pub value: String,
    pub label: String,
    pub count: usize,
    pub is_active: bool,
}

/// Display information for a single record row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayItem {
    /// Record identifier as shown to the user.
    pub id: String,

    /// Primary text (customer, product or user name).
    pub title: String,

    /// Secondary line (email, category).
    pub subtitle: String,

    /// Tertiary detail (line items, stock, activity).
    pub detail: String,

    /// Status badge text.
    pub badge: String,

    /// Right-aligned figure (total, price, spend).
    pub amount: String,

    pub is_selected: bool,

    /// Character ranges of `title` matching the query.
    ///
    /// Each tuple is `(start, end)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search input state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,

    /// Hint shown when the query is empty.
    pub placeholder: String,
}

/// A labelled summary figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStat {
    pub label: String,
    pub value: String,
}

impl QuickStat {
    #[must_use]
    pub fn new(label: &str, value: impl ToString) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Primary message (e.g., "No orders found").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// The dashboard overview page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    pub greeting: String,
    pub stats: Vec<StatCardView>,
    /// E.g. `"You have 4 new orders today."`
    pub recent_orders_caption: String,
    pub recent_orders: Vec<DisplayItem>,
    pub top_products: Vec<RankedItem>,
}

/// A headline stat with its change line, e.g. `"↗ +20.1% from last month"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCardView {
    pub title: String,
    pub value: String,
    pub change: String,
}

/// A numbered row in a ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedItem {
    pub rank: usize,
    pub name: String,
    pub detail: String,
    pub amount: String,
}

/// The settings page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsViewModel {
    pub title: String,
    pub sections: Vec<SettingsSection>,
    /// Whether edits are pending a save.
    pub is_dirty: bool,
}

/// A titled group of settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSection {
    pub title: String,
    pub rows: Vec<SettingRow>,
}

/// One setting with the key used to edit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingRow {
    pub key: String,
    pub label: String,
    pub value: String,
}
