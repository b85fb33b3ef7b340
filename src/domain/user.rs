//! Store account records.

use super::money::Money;
use crate::filter::{FacetDef, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Moderator,
    Customer,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Moderator => "moderator",
            Self::Customer => "customer",
        }
    }

    /// Admins and moderators.
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Moderator)
    }
}

/// Whether the account is in use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

const USER_FACETS: &[FacetDef] = &[
    FacetDef {
        name: "role",
        values: &["admin", "moderator", "customer"],
    },
    FacetDef {
        name: "status",
        values: &["active", "inactive"],
    },
];

/// A store account.
///
/// Searchable by name and email; faceted by `role` and `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    /// Number of orders placed.
    #[serde(default)]
    pub orders: u32,
    #[serde(default)]
    pub total_spent: Money,
    pub join_date: NaiveDate,
    /// Free-form recency text such as `"2 hours ago"`.
    #[serde(default)]
    pub last_active: String,
}

impl User {
    /// Uppercase first letters of each name part, e.g. `"JD"` for John Doe.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

impl Record for User {
    const KIND: &'static str = "user";

    fn facets() -> &'static [FacetDef] {
        USER_FACETS
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }

    fn facet_value(&self, facet: &str) -> Option<&str> {
        match facet {
            "role" => Some(self.role.as_str()),
            "status" => Some(self.status.as_str()),
            _ => None,
        }
    }
}
