//! Fixture source abstraction.
//!
//! This module defines the [`FixtureStore`] trait, the only contract between the
//! console and whatever provides its record collections. The shipped
//! implementation reads a JSON document; a networked data layer would
//! implement the same trait.
//!
//! Each method returns a fresh, ordered collection. Callers treat the result as
//! immutable for the lifetime of a view session.

use crate::domain::error::Result;
use crate::domain::{DashboardSnapshot, Order, Product, StoreSettings, User};

/// Provider of the console's record collections.
///
/// # Examples
///
/// ```
/// use storefront_console::fixtures::{FixtureStore, JsonFixtures};
///
/// let store = JsonFixtures::embedded()?;
/// let orders = store.orders()?;
/// assert!(!orders.is_empty());
/// # Ok::<(), storefront_console::ConsoleError>(())
/// ```
pub trait FixtureStore {
    /// All orders, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot produce the collection.
    fn orders(&self) -> Result<Vec<Order>>;

    /// All products, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot produce the collection.
    fn products(&self) -> Result<Vec<Product>>;

    /// All user accounts, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot produce the collection.
    fn users(&self) -> Result<Vec<User>>;

    /// Dashboard overview data.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot produce the snapshot.
    fn dashboard(&self) -> Result<DashboardSnapshot>;

    /// Initial store settings shown on the settings page.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing source cannot produce the settings.
    fn settings(&self) -> Result<StoreSettings>;
}
