//! Event handling and state transition logic.
//!
//! This module implements the event handler that turns user input into state
//! changes and action sequences. It is the primary control flow coordinator
//! of the console.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the runtime (CLI flags or the `browse` command loop)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via [`AppState`] and [`ListView`] methods
//! 4. Actions are collected and returned for execution
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`, `KeyDown`, `KeyUp`, `SelectRecord`
//! - **Filtering**: `QueryChanged`, `Char`, `Backspace`, `FacetSelected`, `ClearFilters`
//! - **Settings**: `SettingEdited`, `SettingToggled`, `SaveSettings`
//! - **Lifecycle**: `Quit`
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{handle_event, AppState, Event, Page};
//! use storefront_console::fixtures::JsonFixtures;
//!
//! let mut state = AppState::from_store(&JsonFixtures::embedded()?, Page::Dashboard)?;
//! let (render, actions) = handle_event(&mut state, &Event::Navigate(Page::Orders))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

use super::session::ListView;
use crate::app::{Action, AppState, Page};
use crate::domain::error::Result;
use crate::domain::{SettingField, SettingToggle};

/// Events triggered by user input.
///
/// The handler processes these sequentially, so state transitions are
/// deterministic for a given event sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Shows another page with a fresh filter state.
    Navigate(Page),

    /// Replaces the whole search query.
    QueryChanged(String),
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,

    /// Selects a value for one facet; `"all"` removes the restriction.
    FacetSelected {
        /// Facet name, e.g. `"status"`.
        facet: String,
        /// Facet value, e.g. `"pending"`.
        value: String,
    },
    /// Empties the query and resets every facet to "all".
    ClearFilters,

    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Opens the currently highlighted record.
    SelectRecord,

    /// Edits a text field in the settings draft.
    SettingEdited {
        field: SettingField,
        value: String,
    },
    /// Flips a switch in the settings draft.
    SettingToggled(SettingToggle),
    /// Commits the settings draft.
    SaveSettings,

    Quit,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
///
/// # Returns
///
/// A tuple of a re-render flag and the actions to execute in sequence.
/// List events on the dashboard or settings page are ignored and return
/// `(false, [])`, as are settings events away from the settings page.
///
/// # Errors
///
/// Returns [`ConsoleError::UnknownFacet`](crate::ConsoleError::UnknownFacet)
/// when `FacetSelected` names a facet the active page's records do not have.
/// State is left unchanged in that case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, page = %state.page).entered();

    match event {
        Event::Navigate(page) => {
            state.navigate(*page);
            Ok((true, vec![]))
        }
        Event::QueryChanged(query) => Ok(with_list(state, |list| {
            list.set_query(query);
            true
        })),
        Event::Char(c) => Ok(with_list(state, |list| {
            list.push_char(*c);
            true
        })),
        Event::Backspace => Ok(with_list(state, |list| list.pop_char())),
        Event::FacetSelected { facet, value } => {
            let Some(list) = state.active_list_mut() else {
                return Ok((false, vec![]));
            };
            list.select_facet(facet, value)?;
            tracing::debug!(facet = %facet, value = %value, "facet selected");
            Ok((true, vec![]))
        }
        Event::ClearFilters => Ok(with_list(state, |list| {
            let changed = list.is_filtered();
            list.clear_filters();
            changed
        })),
        Event::KeyDown => Ok(with_list(state, |list| {
            list.move_selection_down();
            true
        })),
        Event::KeyUp => Ok(with_list(state, |list| {
            list.move_selection_up();
            true
        })),
        Event::SelectRecord => {
            let page = state.page;
            let Some(id) = state.active_list().and_then(|list| list.selected_id()) else {
                tracing::debug!("no record selected");
                return Ok((false, vec![]));
            };
            tracing::debug!(page = %page, record_id = %id, "record selected");
            Ok((false, vec![Action::OpenRecord { page, id }]))
        }
        Event::SettingEdited { field, value } => {
            if state.page != Page::Settings {
                return Ok((false, vec![]));
            }
            state.settings.set(*field, value.clone());
            Ok((true, vec![]))
        }
        Event::SettingToggled(toggle) => {
            if state.page != Page::Settings {
                return Ok((false, vec![]));
            }
            let on = state.settings.toggle(*toggle);
            tracing::debug!(toggle = ?toggle, on, "setting toggled");
            Ok((true, vec![]))
        }
        Event::SaveSettings => {
            if state.page != Page::Settings {
                return Ok((false, vec![]));
            }
            let saved = state.settings.save();
            tracing::info!(store_name = %saved.store_name, "settings saved");
            Ok((true, vec![Action::SaveSettings(saved)]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

/// Runs `f` on the active list, or does nothing on pages without one.
fn with_list(state: &mut AppState, f: impl FnOnce(&mut dyn ListView) -> bool) -> (bool, Vec<Action>) {
    state.active_list_mut().map_or((false, vec![]), |list| (f(list), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::JsonFixtures;

    fn state(page: Page) -> AppState {
        AppState::from_store(&JsonFixtures::embedded().unwrap(), page).unwrap()
    }

    #[test]
    fn list_events_are_ignored_on_dashboard() {
        let mut state = state(Page::Dashboard);
        let result = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert_eq!(result, (false, vec![]));
    }

    #[test]
    fn backspace_on_empty_query_does_not_render() {
        let mut state = state(Page::Orders);
        let (render, _) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(!render);
    }

    #[test]
    fn unknown_facet_is_an_error() {
        let mut state = state(Page::Users);
        let event = Event::FacetSelected {
            facet: "status".into(),
            value: "inactive".into(),
        };
        assert!(handle_event(&mut state, &event).is_ok());

        let event = Event::FacetSelected {
            facet: "category".into(),
            value: "Electronics".into(),
        };
        assert!(handle_event(&mut state, &event).is_err());
    }

    #[test]
    fn quit_emits_action() {
        let mut state = state(Page::Settings);
        assert_eq!(handle_event(&mut state, &Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}
