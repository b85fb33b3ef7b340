//! Line commands for the interactive `browse` session.
//!
//! Each input line maps to zero or more [`Event`]s:
//!
//! | Line                | Events                                 |
//! |---------------------|----------------------------------------|
//! | `query TEXT`        | `QueryChanged(TEXT)` (`query` clears)  |
//! | `type TEXT`         | one `Char` per character               |
//! | `back`              | `Backspace`                            |
//! | `facet NAME VALUE`  | `FacetSelected`                        |
//! | `clear`             | `ClearFilters`                         |
//! | `down` / `up`       | `KeyDown` / `KeyUp`                    |
//! | `open`              | `SelectRecord`                         |
//! | `go PAGE`           | `Navigate`                             |
//! | `set FIELD VALUE`   | `SettingEdited`                        |
//! | `toggle NAME`       | `SettingToggled`                       |
//! | `save`              | `SaveSettings`                         |
//! | `quit`              | `Quit`                                 |
//!
//! Blank lines and lines starting with `#` produce no events.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{parse_command, Event};
//!
//! let events = parse_command("facet status pending")?;
//! assert_eq!(events, vec![Event::FacetSelected {
//!     facet: "status".to_string(),
//!     value: "pending".to_string(),
//! }]);
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

use super::handler::Event;
use crate::domain::error::{ConsoleError, Result};

/// Parses one `browse` input line.
///
/// # Errors
///
/// Returns [`ConsoleError::InvalidInput`] for unknown commands, missing
/// arguments, unknown pages, and unknown setting names.
pub fn parse_command(line: &str) -> Result<Vec<Event>> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(vec![]);
    }

    let (command, rest) = trimmed.split_once(' ').unwrap_or((trimmed, ""));

    let event = match command {
        "query" => Event::QueryChanged(rest.to_string()),
        "type" => return Ok(rest.chars().map(Event::Char).collect()),
        "back" => Event::Backspace,
        "facet" => {
            let (facet, value) = two_args(command, rest)?;
            Event::FacetSelected {
                facet: facet.to_string(),
                value: value.to_string(),
            }
        }
        "clear" => Event::ClearFilters,
        "down" => Event::KeyDown,
        "up" => Event::KeyUp,
        "open" => Event::SelectRecord,
        "go" => Event::Navigate(one_arg(command, rest)?.parse()?),
        "set" => {
            let (field, value) = two_args(command, rest)?;
            Event::SettingEdited {
                field: field.parse()?,
                value: value.to_string(),
            }
        }
        "toggle" => Event::SettingToggled(one_arg(command, rest)?.parse()?),
        "save" => Event::SaveSettings,
        "quit" | "exit" => Event::Quit,
        other => return Err(ConsoleError::InvalidInput(format!("unknown command: {other}"))),
    };

    Ok(vec![event])
}

fn one_arg<'a>(command: &str, rest: &'a str) -> Result<&'a str> {
    let arg = rest.trim();
    if arg.is_empty() {
        return Err(ConsoleError::InvalidInput(format!("{command}: missing argument")));
    }
    Ok(arg)
}

/// Splits `NAME VALUE`; the value is the rest of the line and may contain spaces.
fn two_args<'a>(command: &str, rest: &'a str) -> Result<(&'a str, &'a str)> {
    let (name, value) = rest
        .trim_start()
        .split_once(' ')
        .ok_or_else(|| ConsoleError::InvalidInput(format!("{command}: expected NAME VALUE")))?;
    if name.is_empty() {
        return Err(ConsoleError::InvalidInput(format!("{command}: expected NAME VALUE")));
    }
    Ok((name, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Page;
    use crate::domain::{SettingField, SettingToggle};

    #[test]
    fn query_keeps_inner_whitespace() {
        assert_eq!(
            parse_command("query jane smith").unwrap(),
            vec![Event::QueryChanged("jane smith".to_string())]
        );
        assert_eq!(parse_command("query").unwrap(), vec![Event::QueryChanged(String::new())]);
    }

    #[test]
    fn settings_commands() {
        assert_eq!(
            parse_command("set store_name Corner Shop").unwrap(),
            vec![Event::SettingEdited {
                field: SettingField::StoreName,
                value: "Corner Shop".to_string(),
            }]
        );
        assert_eq!(
            parse_command("toggle two_factor_auth").unwrap(),
            vec![Event::SettingToggled(SettingToggle::TwoFactorAuth)]
        );
    }

    #[test]
    fn type_expands_to_chars() {
        assert_eq!(parse_command("type ab").unwrap(), vec![Event::Char('a'), Event::Char('b')]);
    }

    #[test]
    fn navigation_and_comments() {
        assert_eq!(parse_command("go users").unwrap(), vec![Event::Navigate(Page::Users)]);
        assert!(parse_command("# note").unwrap().is_empty());
        assert!(parse_command("   ").unwrap().is_empty());
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(parse_command("go").is_err());
        assert!(parse_command("go reports").is_err());
        assert!(parse_command("facet status").is_err());
        assert!(parse_command("dance").is_err());
    }
}
