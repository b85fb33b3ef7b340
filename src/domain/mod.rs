//! Domain layer for the storefront console.
//!
//! This module contains the record types shown by the console and the crate
//! error type. Records implement [`Record`](crate::filter::Record) so the
//! generic filter engine can search and facet them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`money`]: Cent-based currency amounts
//! - [`order`], [`product`], [`user`]: Filterable list records
//! - [`dashboard`]: Overview stats, recent orders, top products
//! - [`settings`]: Store preferences

pub mod dashboard;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
pub mod settings;
pub mod user;

pub use dashboard::{DashboardSnapshot, RecentOrder, StatCard, TopProduct, Trend};
pub use error::{ConsoleError, Result};
pub use money::Money;
pub use order::{Order, OrderStatus};
pub use product::{ListingStatus, Product, StockLevel, LOW_STOCK_THRESHOLD};
pub use settings::{SettingField, SettingToggle, StoreSettings};
pub use user::{AccountStatus, Role, User};
