//! Fixed-point currency amounts.
//!
//! Amounts are held as integer cents and use the `$1,234.56` display format
//! for both fixtures and rendering.

use super::error::ConsoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dollar amount in cents.
///
/// ```rust
/// use storefront_console::domain::Money;
///
/// let total: Money = "$2,459.00".parse()?;
/// assert_eq!(total.cents(), 245_900);
/// assert_eq!(total.to_string(), "$2,459.00");
/// # Ok::<(), storefront_console::ConsoleError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Money(i64);

impl Money {
    /// Creates an amount from cents.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Amount in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }
}

impl FromStr for Money {
    type Err = ConsoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConsoleError::Fixture(format!("invalid amount: {s:?}"));

        let trimmed = s.trim();
        let (negative, rest) = trimmed
            .strip_prefix('-')
            .map_or((false, trimmed), |rest| (true, rest));
        let digits: String = rest
            .strip_prefix('$')
            .unwrap_or(rest)
            .chars()
            .filter(|c| *c != ',')
            .collect();

        let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "0"));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || fraction.len() > 2 || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| invalid())?;
        let fraction: i64 = format!("{fraction:0<2}").parse().map_err(|_| invalid())?;
        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl TryFrom<String> for Money {
    type Error = ConsoleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let whole = (abs / 100).to_string();

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        write!(f, "{sign}${grouped}.{:02}", abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fixture_amounts() {
        assert_eq!("$379.98".parse::<Money>().unwrap().cents(), 37_998);
        assert_eq!("$0.00".parse::<Money>().unwrap().cents(), 0);
        assert_eq!("$1,230".parse::<Money>().unwrap().cents(), 123_000);
        assert_eq!("$4.5".parse::<Money>().unwrap().cents(), 450);
    }

    #[test]
    fn rejects_garbage() {
        assert!("abc".parse::<Money>().is_err());
        assert!("$1.234".parse::<Money>().is_err());
        assert!("$".parse::<Money>().is_err());
        assert!("$1.-5".parse::<Money>().is_err());
        assert!("$-5.50".parse::<Money>().is_err());
        assert!("$+3.+4".parse::<Money>().is_err());
        assert!("--$5".parse::<Money>().is_err());
    }

    #[test]
    fn leading_minus_negates() {
        assert_eq!("-$5.50".parse::<Money>().unwrap().cents(), -550);
    }

    #[test]
    fn formats_with_grouping() {
        assert_eq!(Money::from_cents(4_523_189).to_string(), "$45,231.89");
        assert_eq!(Money::from_cents(3_999).to_string(), "$39.99");
        assert_eq!(Money::from_cents(100_000_000).to_string(), "$1,000,000.00");
    }
}
