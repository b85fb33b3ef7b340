//! Store preferences edited on the settings page.

use super::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Store-wide preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreSettings {
    pub store_name: String,
    pub store_email: String,
    pub currency: String,
    pub language: String,
    pub email_notifications: bool,
    pub order_notifications: bool,
    pub low_stock_alerts: bool,
    pub two_factor_auth: bool,
    pub public_store: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            store_name: "My E-Commerce Store".to_string(),
            store_email: "admin@mystore.com".to_string(),
            currency: "USD".to_string(),
            language: "English".to_string(),
            email_notifications: true,
            order_notifications: true,
            low_stock_alerts: true,
            two_factor_auth: false,
            public_store: true,
        }
    }
}

/// Free-text settings fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    StoreName,
    StoreEmail,
    Currency,
    Language,
}

/// Boolean settings switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    EmailNotifications,
    OrderNotifications,
    LowStockAlerts,
    TwoFactorAuth,
    PublicStore,
}

impl StoreSettings {
    /// Replaces one text field.
    pub fn set(&mut self, field: SettingField, value: impl Into<String>) {
        let slot = match field {
            SettingField::StoreName => &mut self.store_name,
            SettingField::StoreEmail => &mut self.store_email,
            SettingField::Currency => &mut self.currency,
            SettingField::Language => &mut self.language,
        };
        *slot = value.into();
    }

    /// Flips one switch and returns its new value.
    pub fn toggle(&mut self, toggle: SettingToggle) -> bool {
        let slot = match toggle {
            SettingToggle::EmailNotifications => &mut self.email_notifications,
            SettingToggle::OrderNotifications => &mut self.order_notifications,
            SettingToggle::LowStockAlerts => &mut self.low_stock_alerts,
            SettingToggle::TwoFactorAuth => &mut self.two_factor_auth,
            SettingToggle::PublicStore => &mut self.public_store,
        };
        *slot = !*slot;
        *slot
    }
}

impl FromStr for SettingField {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "store_name" => Ok(Self::StoreName),
            "store_email" => Ok(Self::StoreEmail),
            "currency" => Ok(Self::Currency),
            "language" => Ok(Self::Language),
            other => Err(ConsoleError::InvalidInput(format!("unknown setting field: {other}"))),
        }
    }
}

impl FromStr for SettingToggle {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email_notifications" => Ok(Self::EmailNotifications),
            "order_notifications" => Ok(Self::OrderNotifications),
            "low_stock_alerts" => Ok(Self::LowStockAlerts),
            "two_factor_auth" => Ok(Self::TwoFactorAuth),
            "public_store" => Ok(Self::PublicStore),
            other => Err(ConsoleError::InvalidInput(format!("unknown setting toggle: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_reports() {
        let mut settings = StoreSettings::default();
        assert!(settings.toggle(SettingToggle::TwoFactorAuth));
        assert!(!settings.toggle(SettingToggle::TwoFactorAuth));
    }

    #[test]
    fn parses_field_names() {
        assert_eq!("currency".parse::<SettingField>().unwrap(), SettingField::Currency);
        assert!("colour".parse::<SettingField>().is_err());
    }
}
