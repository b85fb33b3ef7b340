//! Record presenters.
//!
//! [`Present`] adds display concerns on top of [`Record`]: page titles, the
//! facet shown as tabs, row formatting and the quick-stat figures computed
//! over the base collection.

use crate::domain::{AccountStatus, Order, OrderStatus, Product, Role, StockLevel, User};
use crate::filter::Record;
use crate::ui::helpers::capitalize;
use crate::ui::viewmodel::QuickStat;

/// Row content before selection and highlighting are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub detail: String,
    pub badge: String,
    pub amount: String,
}

/// Display rules for a list page's records.
pub trait Present: Record + Sized {
    /// Page title, e.g. `"Orders"`.
    const TITLE: &'static str;

    /// Lowercase plural used in summaries, e.g. `"orders"`.
    const PLURAL: &'static str;

    /// Search box placeholder.
    const PLACEHOLDER: &'static str;

    /// Facet rendered as a tab row, if any.
    const TAB_FACET: Option<&'static str>;

    /// Formats one record.
    fn item_view(&self) -> ItemView;

    /// Summary figures over the unfiltered collection.
    fn quick_stats(records: &[Self]) -> Vec<QuickStat>;

    /// Tab label for a facet value.
    fn facet_label(_facet: &str, value: &str) -> String {
        capitalize(value)
    }
}

fn count_where<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}

impl Present for Order {
    const TITLE: &'static str = "Orders";
    const PLURAL: &'static str = "orders";
    const PLACEHOLDER: &'static str = "Search orders, customers...";
    const TAB_FACET: Option<&'static str> = Some("status");

    fn item_view(&self) -> ItemView {
        ItemView {
            id: self.id.clone(),
            title: self.customer.clone(),
            subtitle: self.email.clone(),
            detail: self.items_summary(),
            badge: capitalize(self.status.as_str()),
            amount: format!("{} {}", self.total, self.date.format("%Y-%m-%d")),
        }
    }

    fn quick_stats(records: &[Self]) -> Vec<QuickStat> {
        let with = |status: OrderStatus| count_where(records, |o| o.status == status);
        vec![
            QuickStat::new("Total Orders", records.len()),
            QuickStat::new("Completed", with(OrderStatus::Completed)),
            QuickStat::new("Processing", with(OrderStatus::Pending) + with(OrderStatus::Processing)),
            QuickStat::new("Cancelled", with(OrderStatus::Cancelled)),
        ]
    }
}

impl Present for Product {
    const TITLE: &'static str = "Products";
    const PLURAL: &'static str = "products";
    const PLACEHOLDER: &'static str = "Search products...";
    const TAB_FACET: Option<&'static str> = Some("category");

    fn item_view(&self) -> ItemView {
        ItemView {
            id: self.id.to_string(),
            title: self.name.clone(),
            subtitle: self.category.clone(),
            detail: format!("Stock: {} units, {} sales this month", self.stock, self.sales),
            badge: self.stock_level().label().to_string(),
            amount: self.price.to_string(),
        }
    }

    // Mirrors the inventory summary cards, which use raw unit counts rather
    // than the badge classification.
    fn quick_stats(records: &[Self]) -> Vec<QuickStat> {
        use crate::domain::{ListingStatus, LOW_STOCK_THRESHOLD};

        vec![
            QuickStat::new("Total Products", records.len()),
            QuickStat::new(
                "In Stock",
                count_where(records, |p| p.status == ListingStatus::Active && p.stock > LOW_STOCK_THRESHOLD),
            ),
            QuickStat::new(
                "Low Stock",
                count_where(records, |p| p.stock > 0 && p.stock <= LOW_STOCK_THRESHOLD),
            ),
            QuickStat::new("Out of Stock", count_where(records, |p| p.stock == 0)),
        ]
    }

    fn facet_label(facet: &str, value: &str) -> String {
        let level = match (facet, value) {
            ("stock", "in_stock") => Some(StockLevel::InStock),
            ("stock", "low_stock") => Some(StockLevel::LowStock),
            ("stock", "out_of_stock") => Some(StockLevel::OutOfStock),
            _ => None,
        };
        level.map_or_else(|| capitalize(value), |l| l.label().to_string())
    }
}

impl Present for User {
    const TITLE: &'static str = "Users";
    const PLURAL: &'static str = "users";
    const PLACEHOLDER: &'static str = "Search users...";
    const TAB_FACET: Option<&'static str> = Some("role");

    fn item_view(&self) -> ItemView {
        ItemView {
            id: self.id.to_string(),
            title: self.name.clone(),
            subtitle: format!("{} · {}", self.initials(), self.email),
            detail: format!(
                "{} orders, joined {}, active {}",
                self.orders,
                self.join_date.format("%Y-%m-%d"),
                self.last_active
            ),
            badge: format!("{} / {}", capitalize(self.role.as_str()), capitalize(self.status.as_str())),
            amount: self.total_spent.to_string(),
        }
    }

    fn quick_stats(records: &[Self]) -> Vec<QuickStat> {
        vec![
            QuickStat::new("Total Users", records.len()),
            QuickStat::new("Active Users", count_where(records, |u| u.status == AccountStatus::Active)),
            QuickStat::new("Customers", count_where(records, |u| u.role == Role::Customer)),
            QuickStat::new("Staff", count_where(records, |u| u.role.is_staff())),
        ]
    }
}
