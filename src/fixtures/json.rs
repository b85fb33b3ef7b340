//! JSON fixture store.
//!
//! Reads the whole fixture document once and serves clones of its collections.
//! A default document is compiled into the crate; a file can replace it.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "orders": [
//!     {
//!       "id": "#ORD-12345",
//!       "customer": "John Doe",
//!       "email": "john@example.com",
//!       "products": ["Premium Headphones"],
//!       "total": "$299.99",
//!       "status": "shipped",
//!       "date": "2024-01-15"
//!     }
//!   ],
//!   "products": [],
//!   "users": [],
//!   "dashboard": { "stats": [], "recent_orders": [], "top_products": [] },
//!   "settings": { "store_name": "My E-Commerce Store" }
//! }
//! ```
//!
//! Every section except `version` may be omitted.

use crate::domain::error::{ConsoleError, Result};
use crate::domain::{DashboardSnapshot, Order, Product, StoreSettings, User};
use crate::fixtures::backend::FixtureStore;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::{Path, PathBuf};

/// Fixture document compiled into the crate.
const EMBEDDED_FIXTURES: &str = include_str!("../../fixtures/store.json");

/// Only supported document version.
const FIXTURE_VERSION: u32 = 1;

/// Top-level fixture document.
#[derive(Debug, Clone, Deserialize)]
struct FixtureData {
    version: u32,

    #[serde(default)]
    orders: Vec<Order>,

    #[serde(default)]
    products: Vec<Product>,

    #[serde(default)]
    users: Vec<User>,

    #[serde(default)]
    dashboard: DashboardSnapshot,

    #[serde(default)]
    settings: StoreSettings,
}

/// Fixture store backed by a JSON document.
#[derive(Debug, Clone)]
pub struct JsonFixtures {
    /// Where the document came from, `None` for the embedded one.
    source: Option<PathBuf>,

    data: FixtureData,
}

impl JsonFixtures {
    /// Loads the fixture document compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded document is malformed.
    pub fn embedded() -> Result<Self> {
        tracing::debug!("loading embedded fixtures");
        Ok(Self {
            source: None,
            data: Self::parse(EMBEDDED_FIXTURES)?,
        })
    }

    /// Loads a fixture document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The file is not valid JSON or does not match the fixture schema
    /// - The document version is unsupported
    /// - A collection repeats a record id
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use storefront_console::fixtures::JsonFixtures;
    ///
    /// let store = JsonFixtures::from_path("/srv/console/store.json")?;
    /// # Ok::<(), storefront_console::ConsoleError>(())
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading fixtures from file");

        let contents = std::fs::read_to_string(path)?;
        let data = Self::parse(&contents)?;

        Ok(Self {
            source: Some(path.to_path_buf()),
            data,
        })
    }

    /// Parses a fixture document from a string.
    ///
    /// # Errors
    ///
    /// Same validation as [`from_path`](Self::from_path), minus file access.
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(Self {
            source: None,
            data: Self::parse(contents)?,
        })
    }

    /// Path the document was loaded from, `None` if embedded or in-memory.
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn parse(contents: &str) -> Result<FixtureData> {
        let data: FixtureData = serde_json::from_str(contents)
            .map_err(|e| ConsoleError::Fixture(format!("failed to parse JSON: {e}")))?;

        if data.version != FIXTURE_VERSION {
            return Err(ConsoleError::Fixture(format!(
                "unsupported fixture version {} (expected {FIXTURE_VERSION})",
                data.version
            )));
        }

        ensure_unique("order", data.orders.iter().map(|o| o.id.as_str()))?;
        ensure_unique("product", data.products.iter().map(|p| p.id))?;
        ensure_unique("user", data.users.iter().map(|u| u.id))?;

        tracing::debug!(
            orders = data.orders.len(),
            products = data.products.len(),
            users = data.users.len(),
            "fixtures loaded"
        );

        Ok(data)
    }
}

fn ensure_unique<K: Eq + Hash + Display>(kind: &str, ids: impl Iterator<Item = K>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(ConsoleError::Fixture(format!("duplicate {kind} id: {id}")));
        }
        seen.insert(id);
    }
    Ok(())
}

impl FixtureStore for JsonFixtures {
    fn orders(&self) -> Result<Vec<Order>> {
        Ok(self.data.orders.clone())
    }

    fn products(&self) -> Result<Vec<Product>> {
        Ok(self.data.products.clone())
    }

    fn users(&self) -> Result<Vec<User>> {
        Ok(self.data.users.clone())
    }

    fn dashboard(&self) -> Result<DashboardSnapshot> {
        Ok(self.data.dashboard.clone())
    }

    fn settings(&self) -> Result<StoreSettings> {
        Ok(self.data.settings.clone())
    }
}
