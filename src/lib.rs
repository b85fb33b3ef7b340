//! Storefront Console: a terminal store management console.
//!
//! The console shows the pages of a small e-commerce admin dashboard:
//! - A dashboard overview with headline stats, recent orders and best sellers
//! - Order, product and user lists with free-text search and facet tabs
//! - A store settings form
//!
//! Every list page runs on one generic filter engine ([`filter`]) that narrows
//! an immutable record collection by a case-insensitive query and exact-match
//! facet selections, and counts facet values over the whole collection.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - Per-page list sessions                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Filter Engine │   │ Fixtures      │
//! │ (ui/)         │   │ (filter/)     │   │ (fixtures/)   │
//! │ - View models │   │ - Query match │   │ - JSON load   │
//! │ - Text render │   │ - Facets      │   │ - Store trait │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Orders, products, users, settings, dashboard     │
//! │  - Money, error types                               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup, rotating log file      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Record types, money, errors
//! - [`filter`]: Generic record filter and facet counting
//! - [`fixtures`]: Fixture data loading
//! - [`ui`]: View models and text rendering
//! - [`observability`]: Tracing setup
//!
//! # Configuration
//!
//! ```toml
//! # storefront.toml
//! fixtures_path = "fixtures/store.json"
//! trace_level = "debug"
//! log_file = "logs/console.log"
//! default_page = "orders"
//! ```
//!
//! # Example
//!
//! ```rust
//! use storefront_console::{handle_event, initialize, Config, Event, Page};
//!
//! let config = Config {
//!     default_page: Page::Orders,
//!     ..Default::default()
//! };
//! let mut state = initialize(&config)?;
//!
//! let events = vec![
//!     Event::FacetSelected { facet: "status".into(), value: "pending".into() },
//!     Event::SelectRecord,
//! ];
//! for event in events {
//!     let (_render, actions) = handle_event(&mut state, &event)?;
//!     // Execute actions...
//! }
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

pub mod app;
pub mod domain;
pub mod filter;
pub mod fixtures;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ListView, Page};
pub use domain::{ConsoleError, Result};
pub use filter::{facet_counts, filter, FacetCounts, FacetSelection, FilterState, FilteredResult, Record};

use fixtures::JsonFixtures;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Console configuration.
///
/// Loaded from a TOML file; every field is optional. Command-line flags take
/// precedence over file values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Fixture document to load instead of the built-in one.
    pub fixtures_path: Option<PathBuf>,

    /// Tracing filter directive.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to this file instead of stderr.
    pub log_file: Option<PathBuf>,

    /// Page shown when none is given on the command line.
    pub default_page: Page,
}

impl Config {
    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the file cannot be read and
    /// [`ConsoleError::Config`] if it is not valid configuration.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
            .map_err(|e| ConsoleError::Config(format!("{}: {e}", path.display())))
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] for malformed TOML, unknown keys, or an
    /// unknown `default_page`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use storefront_console::{Config, Page};
    ///
    /// let config = Config::from_toml_str(r#"default_page = "users""#)?;
    /// assert_eq!(config.default_page, Page::Users);
    /// assert!(config.fixtures_path.is_none());
    /// # Ok::<(), storefront_console::ConsoleError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| ConsoleError::Config(e.message().to_string()))
    }
}

/// Loads fixtures and builds the initial application state.
///
/// Uses `config.fixtures_path` when set, the built-in fixtures otherwise, and
/// starts on `config.default_page`.
///
/// # Errors
///
/// Returns fixture loading errors.
pub fn initialize(config: &Config) -> Result<AppState> {
    tracing::debug!(fixtures_path = ?config.fixtures_path, "initializing console");

    let store = match &config.fixtures_path {
        Some(path) => JsonFixtures::from_path(path)?,
        None => JsonFixtures::embedded()?,
    };

    AppState::from_store(&store, config.default_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Config::from_toml_str("scan_depth = 4").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn unknown_page_is_rejected() {
        assert!(Config::from_toml_str(r#"default_page = "reports""#).is_err());
    }
}
