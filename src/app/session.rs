//! Per-page list sessions.
//!
//! A [`ListSession`] owns one page's immutable base collection together with
//! the [`FilterState`] driving it. The filtered view is stored as positions into
//! the base collection and recomputed after every filter change. Facet counts
//! are computed once, from the base collection, when the session starts.
//!
//! [`ListView`] erases the record type so the event handler can drive
//! whichever list page is active.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{ListSession, ListView};
//! use storefront_console::fixtures::{FixtureStore, JsonFixtures};
//!
//! let store = JsonFixtures::embedded()?;
//! let mut orders = ListSession::new(store.orders()?);
//!
//! orders.set_query("jane");
//! assert_eq!(orders.visible_len(), 1);
//!
//! let vm = orders.compute_viewmodel();
//! assert_eq!(vm.summary, "Showing 1 of 5 orders");
//! # Ok::<(), storefront_console::ConsoleError>(())
//! ```

use crate::domain::error::{ConsoleError, Result};
use crate::filter::{count_facet, filter_indices, FacetCounts, FacetSelection, FilterState, Record};
use crate::ui::helpers::{count_label, highlight_ranges};
use crate::ui::present::Present;
use crate::ui::viewmodel::{DisplayItem, EmptyState, FacetTab, ListViewModel, SearchBarInfo};
use serde::Serialize;

/// Filter session over one page's records.
#[derive(Debug, Clone)]
pub struct ListSession<R> {
    /// Base collection, immutable for the session.
    records: Vec<R>,

    filter: FilterState,

    /// Positions into `records` passing the current filter, in order.
    visible: Vec<usize>,

    /// One entry per declared facet, over the base collection.
    counts: Vec<FacetCounts>,

    /// Zero-based index into `visible`.
    ///
    /// Clamped after every filter pass; wraps during navigation.
    selected_index: usize,
}

impl<R: Record> ListSession<R> {
    /// Starts a session with an empty query and every facet at "all".
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        let counts = R::facets().iter().map(|def| count_facet(&records, def)).collect();
        let visible = (0..records.len()).collect();

        tracing::debug!(record_kind = R::KIND, total = records.len(), "list session started");

        Self {
            records,
            filter: FilterState::for_record::<R>(),
            visible,
            counts,
            selected_index: 0,
        }
    }

    /// The unfiltered base collection.
    #[must_use]
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Current filter state.
    #[must_use]
    pub const fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Records passing the current filter, in base order.
    pub fn visible(&self) -> impl Iterator<Item = &R> {
        self.visible.iter().map(|&i| &self.records[i])
    }

    /// Number of records passing the current filter.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Base-collection counts for one facet.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`] if `R` does not declare `facet`.
    pub fn facet_counts(&self, facet: &str) -> Result<&FacetCounts> {
        self.counts
            .iter()
            .find(|counts| counts.facet() == facet)
            .ok_or_else(|| ConsoleError::UnknownFacet {
                record: R::KIND,
                facet: facet.to_string(),
            })
    }

    /// Replaces the query and refilters.
    pub fn set_query(&mut self, query: &str) {
        self.filter.set_query(query);
        self.apply_filter();
    }

    /// Appends a character to the query and refilters.
    pub fn push_char(&mut self, c: char) {
        self.filter.push_char(c);
        tracing::trace!(query = %self.filter.query(), "search query updated");
        self.apply_filter();
    }

    /// Removes the last query character. Returns `false` if the query was empty.
    pub fn pop_char(&mut self) -> bool {
        if !self.filter.pop_char() {
            return false;
        }
        self.apply_filter();
        true
    }

    /// Replaces one facet selection and refilters.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`] if `R` does not declare `facet`;
    /// the session is left unchanged.
    pub fn select_facet(&mut self, facet: &str, selection: FacetSelection) -> Result<()> {
        self.filter.select::<R>(facet, selection)?;
        self.apply_filter();
        Ok(())
    }

    /// Empties the query and sets every facet back to "all".
    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.apply_filter();
    }

    /// Discards the filter state and selection, as when the page is left.
    pub fn reset(&mut self) {
        self.filter = FilterState::for_record::<R>();
        self.selected_index = 0;
        self.apply_filter();
    }

    /// Moves selection down by one, wrapping to the top. No-op when empty.
    pub fn move_selection_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.visible.len();
    }

    /// Moves selection up by one, wrapping to the bottom. No-op when empty.
    pub fn move_selection_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.visible.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Currently selected record, if any is visible.
    #[must_use]
    pub fn selected_record(&self) -> Option<&R> {
        self.visible.get(self.selected_index).map(|&i| &self.records[i])
    }

    /// Recomputes the visible positions and clamps the selection.
    fn apply_filter(&mut self) {
        self.visible = match filter_indices(&self.records, &self.filter) {
            Ok(indices) => indices,
            Err(e) => {
                // Selections are validated on entry, so this is a broken invariant.
                tracing::error!(error = %e, "filter state rejected");
                Vec::new()
            }
        };

        if self.visible.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.visible.len() - 1);
        }
    }
}

impl<R: Present> ListSession<R> {
    /// Computes the page view model from the current session state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> ListViewModel {
        let query = self.filter.query();

        let display_items: Vec<DisplayItem> = self
            .visible
            .iter()
            .enumerate()
            .map(|(position, &i)| {
                let item = self.records[i].item_view();
                DisplayItem {
                    highlight_ranges: highlight_ranges(&item.title, query),
                    id: item.id,
                    title: item.title,
                    subtitle: item.subtitle,
                    detail: item.detail,
                    badge: item.badge,
                    amount: item.amount,
                    is_selected: position == self.selected_index,
                }
            })
            .collect();

        let shown = self.visible.len();
        let total = self.records.len();

        let empty_state = (shown == 0).then(|| EmptyState {
            message: format!("No {} found", R::PLURAL),
            subtitle: if self.filter.is_identity() {
                format!("There are no {} yet", R::PLURAL)
            } else {
                "Try a different search or filter".to_string()
            },
        });

        ListViewModel {
            title: R::TITLE.to_string(),
            heading: count_label(R::TITLE, shown),
            summary: format!("Showing {shown} of {total} {}", R::PLURAL),
            search_bar: SearchBarInfo {
                query: query.to_string(),
                placeholder: R::PLACEHOLDER.to_string(),
            },
            facet_tabs: self.compute_tabs(),
            display_items,
            selected_index: (shown > 0).then_some(self.selected_index),
            quick_stats: R::quick_stats(&self.records),
            empty_state,
        }
    }

    fn compute_tabs(&self) -> Vec<FacetTab> {
        let Some(facet) = R::TAB_FACET else {
            return vec![];
        };
        let Ok(counts) = self.facet_counts(facet) else {
            tracing::error!(facet, "tab facet is not declared");
            return vec![];
        };

        let selected = self.filter.selection(facet).as_str();
        counts
            .iter()
            .map(|(value, count)| FacetTab {
                facet: facet.to_string(),
                value: value.to_string(),
                label: count_label(&R::facet_label(facet, value), count),
                count,
                is_active: value == selected,
            })
            .collect()
    }
}

/// Type-erased interface to the active list page.
pub trait ListView {
    /// Current query text.
    fn query(&self) -> &str;

    /// Replaces the query axis.
    fn set_query(&mut self, query: &str);

    fn push_char(&mut self, c: char);

    /// Returns `false` if there was nothing to remove.
    fn pop_char(&mut self) -> bool;

    /// Replaces one facet selection; `value` `"all"` removes the restriction.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`] for facets the page's records do
    /// not declare.
    fn select_facet(&mut self, facet: &str, value: &str) -> Result<()>;

    fn clear_filters(&mut self);

    fn reset(&mut self);

    fn move_selection_down(&mut self);

    fn move_selection_up(&mut self);

    /// Display id of the selected record.
    fn selected_id(&self) -> Option<String>;

    /// Whether any filter axis is restricting the view.
    fn is_filtered(&self) -> bool;

    /// Looks up a base record by display id, as JSON.
    fn find_record(&self, id: &str) -> Option<serde_json::Value>;

    fn compute_viewmodel(&self) -> ListViewModel;
}

impl<R: Present + Serialize> ListView for ListSession<R> {
    fn query(&self) -> &str {
        self.filter.query()
    }

    fn set_query(&mut self, query: &str) {
        Self::set_query(self, query);
    }

    fn push_char(&mut self, c: char) {
        Self::push_char(self, c);
    }

    fn pop_char(&mut self) -> bool {
        Self::pop_char(self)
    }

    fn select_facet(&mut self, facet: &str, value: &str) -> Result<()> {
        Self::select_facet(self, facet, FacetSelection::parse(value))
    }

    fn clear_filters(&mut self) {
        Self::clear_filters(self);
    }

    fn reset(&mut self) {
        Self::reset(self);
    }

    fn move_selection_down(&mut self) {
        Self::move_selection_down(self);
    }

    fn move_selection_up(&mut self) {
        Self::move_selection_up(self);
    }

    fn selected_id(&self) -> Option<String> {
        self.selected_record().map(|record| record.item_view().id)
    }

    fn is_filtered(&self) -> bool {
        !self.filter.is_identity()
    }

    fn find_record(&self, id: &str) -> Option<serde_json::Value> {
        self.records
            .iter()
            .find(|record| record.item_view().id == id)
            .and_then(|record| serde_json::to_value(record).ok())
    }

    fn compute_viewmodel(&self) -> ListViewModel {
        Self::compute_viewmodel(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Money, Order, OrderStatus};
    use crate::filter::ALL;
    use chrono::NaiveDate;

    fn orders() -> Vec<Order> {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        vec![
            Order::new("#ORD-1", "John Doe", "john@example.com", OrderStatus::Shipped, date)
                .with_items(vec!["Wireless Mouse".into()], Money::from_cents(7_999)),
            Order::new("#ORD-2", "Jane Smith", "jane@example.com", OrderStatus::Pending, date),
            Order::new("#ORD-3", "Janet Lee", "janet@example.com", OrderStatus::Pending, date),
        ]
    }

    #[test]
    fn selection_clamps_after_narrowing() {
        let mut session = ListSession::new(orders());
        session.move_selection_down();
        session.move_selection_down();
        assert_eq!(session.selected_record().unwrap().id, "#ORD-3");

        session.set_query("jane smith");
        assert_eq!(session.selected_record().unwrap().id, "#ORD-2");
    }

    #[test]
    fn tabs_keep_base_counts_while_narrowed() {
        let mut session = ListSession::new(orders());
        session.set_query("john");
        let vm = session.compute_viewmodel();

        let pending = vm.facet_tabs.iter().find(|t| t.value == "pending").unwrap();
        assert_eq!(pending.label, "Pending (2)");
        assert_eq!(vm.active_tab().unwrap().value, ALL);
        assert_eq!(vm.summary, "Showing 1 of 3 orders");
    }

    #[test]
    fn highlights_query_in_title() {
        let mut session = ListSession::new(orders());
        session.set_query("JAN");
        let vm = session.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 2);
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(0, 3)]);
    }

    #[test]
    fn empty_view_has_message() {
        let mut session = ListSession::new(orders());
        session.set_query("nobody");
        let vm = session.compute_viewmodel();
        assert_eq!(vm.summary, "Showing 0 of 3 orders");
        assert_eq!(vm.selected_index, None);
        assert_eq!(vm.empty_state.unwrap().message, "No orders found");
    }
}
