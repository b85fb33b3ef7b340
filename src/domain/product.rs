//! Catalogue product records and stock classification.

use super::money::Money;
use crate::filter::{FacetDef, Record};
use serde::{Deserialize, Serialize};

/// Stock count below which an active listing is considered low.
pub const LOW_STOCK_THRESHOLD: u32 = 20;

/// Listing status as recorded in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    Active,
    LowStock,
    OutOfStock,
}

/// Stock level derived from listing status and units on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StockLevel {
    InStock,
    LowStock,
    OutOfStock,
}

impl StockLevel {
    /// Facet value of this level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::LowStock => "low_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }

    /// Badge label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InStock => "In Stock",
            Self::LowStock => "Low Stock",
            Self::OutOfStock => "Out of Stock",
        }
    }
}

const CATEGORY_VALUES: &[&str] = &["Electronics", "Accessories", "Health"];
const STOCK_VALUES: &[&str] = &["in_stock", "low_stock", "out_of_stock"];

const PRODUCT_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "category",
        values: CATEGORY_VALUES,
    },
    FacetDef {
        name: "stock",
        values: STOCK_VALUES,
    },
];

/// A catalogue product.
///
/// Searchable by name and category; faceted by `category` and derived `stock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Money,
    /// Units on hand.
    pub stock: u32,
    pub category: String,
    pub status: ListingStatus,
    /// Units sold this month.
    #[serde(default)]
    pub sales: u32,
}

impl Product {
    /// Classifies stock for display and faceting.
    ///
    /// An explicit listing status wins over the unit count, then zero units
    /// means out of stock and fewer than [`LOW_STOCK_THRESHOLD`] means low.
    #[must_use]
    pub const fn stock_level(&self) -> StockLevel {
        if matches!(self.status, ListingStatus::OutOfStock) || self.stock == 0 {
            StockLevel::OutOfStock
        } else if matches!(self.status, ListingStatus::LowStock) || self.stock < LOW_STOCK_THRESHOLD {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }
}

impl Record for Product {
    const KIND: &'static str = "product";

    fn facets() -> &'static [FacetDef] {
        PRODUCT_FACETS
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "category" => Some(self.category.as_str()),
            "stock" => Some(self.stock_level().as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: u32, status: ListingStatus) -> Product {
        Product {
            id: 1,
            name: "USB-C Hub 7-in-1".into(),
            price: Money::from_cents(8_999),
            stock,
            category: "Accessories".into(),
            status,
            sales: 0,
        }
    }

    #[test]
    fn stock_level_rules() {
        assert_eq!(product(45, ListingStatus::Active).stock_level(), StockLevel::InStock);
        assert_eq!(product(15, ListingStatus::Active).stock_level(), StockLevel::LowStock);
        assert_eq!(product(200, ListingStatus::LowStock).stock_level(), StockLevel::LowStock);
        assert_eq!(product(0, ListingStatus::Active).stock_level(), StockLevel::OutOfStock);
        assert_eq!(product(50, ListingStatus::OutOfStock).stock_level(), StockLevel::OutOfStock);
    }
}
