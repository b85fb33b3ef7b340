//! Customer order records.

use super::money::Money;
use crate::filter::{FacetDef, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// All statuses in tab order.
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Facet value of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

const STATUS_VALUES: &[&str] = &["pending", "processing", "shipped", "completed", "cancelled"];

const ORDER_FACETS: &[FacetDef] = &[FacetDef {
    name: "status",
    values: STATUS_VALUES,
}];

/// A customer order.
///
/// Searchable by customer name, order id and email; faceted by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Display identifier such as `#ORD-12345`.
    pub id: String,
    pub customer: String,
    pub email: String,
    /// Product names in the order.
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub total: Money,
    pub status: OrderStatus,
    pub date: NaiveDate,
}

impl Order {
    /// Creates an order with no line items and a zero total.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        customer: impl Into<String>,
        email: impl Into<String>,
        status: OrderStatus,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            customer: customer.into(),
            email: email.into(),
            products: Vec::new(),
            total: Money::default(),
            status,
            date,
        }
    }

    /// Sets the line items and total.
    #[must_use]
    pub fn with_items(mut self, products: Vec<String>, total: Money) -> Self {
        self.products = products;
        self.total = total;
        self
    }

    /// Line item summary, e.g. `"2 items: Premium Headphones, Wireless Mouse"`.
    #[must_use]
    pub fn items_summary(&self) -> String {
        let count = self.products.len();
        let plural = if count == 1 { "" } else { "s" };
        format!("{count} item{plural}: {}", self.products.join(", "))
    }
}

impl Record for Order {
    const KIND: &'static str = "order";

    fn facets() -> &'static [FacetDef] {
        ORDER_FACETS
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.customer.as_str(), self.id.as_str(), self.email.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}
