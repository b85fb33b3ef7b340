//! Page navigation state.
//!
//! The console shows exactly one page at a time. List pages (orders, products,
//! users) own a filter session; the dashboard and settings pages do not.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::Page;
//!
//! let page: Page = "orders".parse()?;
//! assert!(page.is_list());
//! assert_eq!(page.title(), "Orders");
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

use crate::domain::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A console page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Overview with headline stats, recent orders and best sellers.
    #[default]
    Dashboard,

    /// Product catalogue, searchable by name and category.
    Products,

    /// Order list with status tabs.
    Orders,

    /// Account list with role tabs.
    Users,

    /// Store preferences form.
    Settings,
}

impl Page {
    /// Pages in sidebar order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Products,
        Self::Orders,
        Self::Users,
        Self::Settings,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Products => "Products",
            Self::Orders => "Orders",
            Self::Users => "Users",
            Self::Settings => "Settings",
        }
    }

    /// Identifier accepted by [`FromStr`].
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Users => "users",
            Self::Settings => "settings",
        }
    }

    /// Whether the page shows a filterable record list.
    #[must_use]
    pub const fn is_list(self) -> bool {
        matches!(self, Self::Products | Self::Orders | Self::Users)
    }
}

impl FromStr for Page {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| ConsoleError::InvalidInput(format!("unknown page: {s}")))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
