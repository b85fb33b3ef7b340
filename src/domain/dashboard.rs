//! Dashboard overview data: headline stats, recent orders, best sellers.

use super::money::Money;
use super::order::OrderStatus;
use serde::{Deserialize, Serialize};

/// Direction of a stat's change relative to the previous period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    #[must_use]
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↗",
            Self::Down => "↘",
        }
    }
}

/// One headline figure such as "Total Revenue".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatCard {
    pub title: String,
    /// Pre-formatted value, e.g. `"$45,231.89"` or `"2,350"`.
    pub value: String,
    /// Change description, e.g. `"+20.1% from last month"`.
    pub change: String,
    pub trend: Trend,
}

/// Compact order summary shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentOrder {
    pub id: String,
    pub customer: String,
    pub product: String,
    pub amount: Money,
    pub status: OrderStatus,
    /// Relative time text, e.g. `"2 hours ago"`.
    pub date: String,
}

/// Best-selling product of the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub name: String,
    pub sales: u32,
    pub revenue: Money,
}

/// Everything the dashboard page displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub stats: Vec<StatCard>,
    #[serde(default)]
    pub recent_orders: Vec<RecentOrder>,
    #[serde(default)]
    pub top_products: Vec<TopProduct>,
}
