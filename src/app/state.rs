//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! console. It owns one [`ListSession`] per list page, the settings form, and
//! the dashboard snapshot, and it knows which page is currently shown.
//!
//! # State Components
//!
//! - **Page**: The page currently shown
//! - **List sessions**: Base records and filter state for orders, products, users
//! - **Settings form**: Saved preferences plus the in-progress draft
//! - **Dashboard**: Read-only overview snapshot
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{AppState, Page};
//! use storefront_console::fixtures::JsonFixtures;
//!
//! let store = JsonFixtures::embedded()?;
//! let mut state = AppState::from_store(&store, Page::Orders)?;
//! state.active_list_mut().unwrap().set_query("jane");
//!
//! let vm = state.compute_viewmodel();
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

use super::modes::Page;
use super::session::{ListSession, ListView};
use crate::domain::error::Result;
use crate::domain::{DashboardSnapshot, Order, Product, SettingField, SettingToggle, StoreSettings, User};
use crate::fixtures::FixtureStore;
use crate::ui::helpers::capitalize;
use crate::ui::viewmodel::{
    DashboardViewModel, DisplayItem, PageViewModel, RankedItem, SettingRow, SettingsSection, SettingsViewModel,
    StatCardView,
};

/// Saved store preferences plus the draft being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    saved: StoreSettings,
    draft: StoreSettings,
}

impl SettingsForm {
    #[must_use]
    pub fn new(settings: StoreSettings) -> Self {
        Self {
            saved: settings.clone(),
            draft: settings,
        }
    }

    /// The values currently shown in the form.
    #[must_use]
    pub const fn draft(&self) -> &StoreSettings {
        &self.draft
    }

    /// The values as of the last save.
    #[must_use]
    pub const fn saved(&self) -> &StoreSettings {
        &self.saved
    }

    /// Whether the draft differs from the saved values.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.saved
    }

    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Flips one switch in the draft and returns its new value.
    pub fn toggle(&mut self, toggle: SettingToggle) -> bool {
        self.draft.toggle(toggle)
    }

    /// Commits the draft and returns the committed values.
    pub fn save(&mut self) -> StoreSettings {
        self.saved = self.draft.clone();
        self.saved.clone()
    }

    /// Drops unsaved edits.
    pub fn discard(&mut self) {
        self.draft = self.saved.clone();
    }

    fn compute_viewmodel(&self) -> SettingsViewModel {
        let s = &self.draft;
        let row = |key: &str, label: &str, value: String| SettingRow {
            key: key.to_string(),
            label: label.to_string(),
            value,
        };
        let switch = |on: bool| if on { "On" } else { "Off" }.to_string();

        SettingsViewModel {
            title: Page::Settings.title().to_string(),
            sections: vec![
                SettingsSection {
                    title: "Store Information".to_string(),
                    rows: vec![
                        row("store_name", "Store Name", s.store_name.clone()),
                        row("store_email", "Store Email", s.store_email.clone()),
                        row("currency", "Currency", s.currency.clone()),
                        row("language", "Language", s.language.clone()),
                    ],
                },
                SettingsSection {
                    title: "Notifications".to_string(),
                    rows: vec![
                        row("email_notifications", "Email Notifications", switch(s.email_notifications)),
                        row("order_notifications", "Order Notifications", switch(s.order_notifications)),
                        row("low_stock_alerts", "Low Stock Alerts", switch(s.low_stock_alerts)),
                    ],
                },
                SettingsSection {
                    title: "Security".to_string(),
                    rows: vec![row("two_factor_auth", "Two-Factor Authentication", switch(s.two_factor_auth))],
                },
                SettingsSection {
                    title: "Store Visibility".to_string(),
                    rows: vec![row("public_store", "Public Store", switch(s.public_store))],
                },
            ],
            is_dirty: self.is_dirty(),
        }
    }
}

/// Central application state container.
///
/// Mutated by the event handler in response to user input. View models are
/// computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page currently shown.
    pub page: Page,

    pub orders: ListSession<Order>,

    pub products: ListSession<Product>,

    pub users: ListSession<User>,

    pub settings: SettingsForm,

    /// Overview data for the dashboard page. Never filtered.
    pub dashboard: DashboardSnapshot,
}

impl AppState {
    /// Creates state from already-loaded data, starting on `page`.
    #[must_use]
    pub fn new(
        page: Page,
        orders: Vec<Order>,
        products: Vec<Product>,
        users: Vec<User>,
        dashboard: DashboardSnapshot,
        settings: StoreSettings,
    ) -> Self {
        Self {
            page,
            orders: ListSession::new(orders),
            products: ListSession::new(products),
            users: ListSession::new(users),
            settings: SettingsForm::new(settings),
            dashboard,
        }
    }

    /// Loads every collection from `store` and starts on `page`.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by the store.
    pub fn from_store(store: &impl FixtureStore, page: Page) -> Result<Self> {
        let _span = tracing::debug_span!("load_state", page = %page).entered();

        let state = Self::new(
            page,
            store.orders()?,
            store.products()?,
            store.users()?,
            store.dashboard()?,
            store.settings()?,
        );

        tracing::debug!(
            orders = state.orders.records().len(),
            products = state.products.records().len(),
            users = state.users.records().len(),
            "state loaded"
        );
        Ok(state)
    }

    /// The session behind the current page, if it is a list page.
    #[must_use]
    pub fn active_list(&self) -> Option<&dyn ListView> {
        self.list(self.page)
    }

    /// The session behind `page`, if it is a list page.
    #[must_use]
    pub fn list(&self, page: Page) -> Option<&dyn ListView> {
        match page {
            Page::Orders => Some(&self.orders),
            Page::Products => Some(&self.products),
            Page::Users => Some(&self.users),
            Page::Dashboard | Page::Settings => None,
        }
    }

    /// Mutable counterpart of [`active_list`](Self::active_list).
    pub fn active_list_mut(&mut self) -> Option<&mut dyn ListView> {
        match self.page {
            Page::Orders => Some(&mut self.orders),
            Page::Products => Some(&mut self.products),
            Page::Users => Some(&mut self.users),
            Page::Dashboard | Page::Settings => None,
        }
    }

    /// Switches to `page`, starting it fresh.
    ///
    /// A list page gets a new filter state; the settings page drops unsaved
    /// edits. Navigating to the current page also resets it.
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.page, to = %page, "navigating");
        self.page = page;

        match page {
            Page::Orders => self.orders.reset(),
            Page::Products => self.products.reset(),
            Page::Users => self.users.reset(),
            Page::Settings => self.settings.discard(),
            Page::Dashboard => {}
        }
    }

    /// Computes the view model of the current page.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        match self.page {
            Page::Dashboard => PageViewModel::Dashboard(self.compute_dashboard()),
            Page::Orders => PageViewModel::List(self.orders.compute_viewmodel()),
            Page::Products => PageViewModel::List(self.products.compute_viewmodel()),
            Page::Users => PageViewModel::List(self.users.compute_viewmodel()),
            Page::Settings => PageViewModel::Settings(self.settings.compute_viewmodel()),
        }
    }

    fn compute_dashboard(&self) -> DashboardViewModel {
        let snapshot = &self.dashboard;

        let stats = snapshot
            .stats
            .iter()
            .map(|card| StatCardView {
                title: card.title.clone(),
                value: card.value.clone(),
                change: format!("{} {}", card.trend.arrow(), card.change),
            })
            .collect();

        let recent_orders = snapshot
            .recent_orders
            .iter()
            .map(|order| DisplayItem {
                id: order.id.clone(),
                title: order.customer.clone(),
                subtitle: order.product.clone(),
                detail: order.date.clone(),
                badge: capitalize(order.status.as_str()),
                amount: order.amount.to_string(),
                is_selected: false,
                highlight_ranges: vec![],
            })
            .collect();

        let top_products = snapshot
            .top_products
            .iter()
            .enumerate()
            .map(|(i, product)| RankedItem {
                rank: i + 1,
                name: product.name.clone(),
                detail: format!("{} sales", product.sales),
                amount: product.revenue.to_string(),
            })
            .collect();

        DashboardViewModel {
            title: Page::Dashboard.title().to_string(),
            greeting: "Welcome back! Here's what's happening with your store today.".to_string(),
            stats,
            recent_orders_caption: format!("You have {} new orders today.", snapshot.recent_orders.len()),
            recent_orders,
            top_products,
        }
    }
}
