//! Record filter and facet aggregation.
//!
//! [`filter`] computes the visible subset of a base collection for a
//! [`FilterState`]; [`facet_counts`] summarises one facet over the unfiltered
//! base collection. Both are pure: the same inputs always produce equal
//! outputs and nothing is mutated.
//!
//! # Matching Rules
//!
//! 1. **Text**: passes if the query is empty, or any text field contains the
//!    query as a case-insensitive substring.
//! 2. **Facets**: every non-"all" selection must equal the record's value
//!    exactly (case-sensitive).
//! 3. A record is kept if it passes both; input order is preserved.

use super::record::{FacetDef, Record};
use super::state::{FilterState, ALL};
use crate::domain::error::Result;
use serde::Serialize;

/// Ordered subset of a base collection produced by [`filter`].
#[derive(Debug, PartialEq, Eq)]
pub struct FilteredResult<'a, R> {
    matches: Vec<&'a R>,
    total: usize,
}

impl<'a, R> FilteredResult<'a, R> {
    /// Matching records in base-collection order.
    #[must_use]
    pub fn records(&self) -> &[&'a R] {
        &self.matches
    }

    /// Iterates over the matching records.
    pub fn iter(&self) -> impl Iterator<Item = &'a R> + '_ {
        self.matches.iter().copied()
    }

    /// Number of matching records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` when nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Size of the unfiltered base collection.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }
}

impl<R> Clone for FilteredResult<'_, R> {
    fn clone(&self) -> Self {
        Self {
            matches: self.matches.clone(),
            total: self.total,
        }
    }
}

/// Per-value counts of one facet over a base collection.
///
/// Declared values are always present (possibly with a zero count) in
/// declaration order, followed by any undeclared values seen in the data in
/// first-seen order. The synthetic `"all"` entry equals the collection size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetCounts {
    facet: String,
    total: usize,
    values: Vec<(String, usize)>,
}

impl FacetCounts {
    /// Name of the counted facet.
    #[must_use]
    pub fn facet(&self) -> &str {
        &self.facet
    }

    /// Count for the `"all"` entry.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Count for one value; `"all"` returns the total and unseen values zero.
    #[must_use]
    pub fn get(&self, value: &str) -> usize {
        if value == ALL {
            return self.total;
        }
        self.values
            .iter()
            .find(|(v, _)| v == value)
            .map_or(0, |(_, count)| *count)
    }

    /// Iterates `("all", total)` followed by each value and its count.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        std::iter::once((ALL, self.total))
            .chain(self.values.iter().map(|(v, count)| (v.as_str(), *count)))
    }

    /// Iterates over the non-"all" entries only.
    pub fn values(&self) -> impl Iterator<Item = (&str, usize)> {
        self.values.iter().map(|(v, count)| (v.as_str(), *count))
    }
}

/// Filters `records` by `state`, preserving order.
///
/// # Errors
///
/// Returns [`ConsoleError::UnknownFacet`](crate::ConsoleError::UnknownFacet)
/// if `state` selects a facet that `R` does not declare. Unknown facet
/// *values* are not errors; they match nothing.
///
/// # Example
///
/// ```rust
/// use storefront_console::domain::{Order, OrderStatus};
/// use storefront_console::filter::{filter, FilterState};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
/// let orders = vec![
///     Order::new("#ORD-1", "Jane Smith", "jane@example.com", OrderStatus::Pending, date),
///     Order::new("#ORD-2", "Tom Brown", "tom@example.com", OrderStatus::Shipped, date),
/// ];
///
/// let state = FilterState::new().with_query("JANE");
/// let result = filter(&orders, &state)?;
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.total(), 2);
/// # Ok::<(), storefront_console::ConsoleError>(())
/// ```
pub fn filter<'a, R: Record>(records: &'a [R], state: &FilterState) -> Result<FilteredResult<'a, R>> {
    let indices = filter_indices(records, state)?;
    Ok(FilteredResult {
        matches: indices.into_iter().map(|i| &records[i]).collect(),
        total: records.len(),
    })
}

/// Same as [`filter`] but returns positions into `records`.
///
/// Used by owners of a base collection that cannot hold borrows of it.
///
/// # Errors
///
/// Same as [`filter`].
pub fn filter_indices<R: Record>(records: &[R], state: &FilterState) -> Result<Vec<usize>> {
    state.validate::<R>()?;

    let _span = tracing::debug_span!("filter_records",
        record_kind = R::KIND,
        total_records = records.len(),
        query_len = state.query().len(),
    )
    .entered();

    let needle = state.query().to_lowercase();
    let indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| passes(*record, &needle, state))
        .map(|(i, _)| i)
        .collect();

    tracing::debug!(matched = indices.len(), "records filtered");
    Ok(indices)
}

/// Returns `true` if one record passes `state`.
///
/// Does not validate facet names; unknown facets read as absent values.
#[must_use]
pub fn matches<R: Record>(record: &R, state: &FilterState) -> bool {
    passes(record, &state.query().to_lowercase(), state)
}

fn passes<R: Record>(record: &R, needle: &str, state: &FilterState) -> bool {
    text_matches(&record.text_fields(), needle)
        && state
            .selections()
            .all(|(facet, selection)| selection.matches(record.facet_value(facet)))
}

/// Case-insensitive substring match across fields; `needle` must be lowercase.
///
/// An empty needle matches everything, including a record with no text fields.
#[must_use]
pub fn text_matches(fields: &[&str], needle: &str) -> bool {
    needle.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(needle))
}

/// Counts each value of `facet` over the unfiltered `records`.
///
/// # Errors
///
/// Returns [`ConsoleError::UnknownFacet`](crate::ConsoleError::UnknownFacet)
/// if `R` does not declare `facet`.
pub fn facet_counts<R: Record>(records: &[R], facet: &str) -> Result<FacetCounts> {
    Ok(count_facet(records, R::facet(facet)?))
}

/// Counts one declared facet. Infallible counterpart of [`facet_counts`].
#[must_use]
pub fn count_facet<R: Record>(records: &[R], def: &FacetDef) -> FacetCounts {
    let mut values: Vec<(String, usize)> = def.values.iter().map(|v| ((*v).to_string(), 0)).collect();

    for record in records {
        let Some(value) = record.facet_value(def.name) else {
            continue;
        };
        if let Some(entry) = values.iter_mut().find(|(v, _)| v == value) {
            entry.1 += 1;
        } else {
            tracing::trace!(facet = def.name, value = %value, "undeclared facet value");
            values.push((value.to_string(), 1));
        }
    }

    FacetCounts {
        facet: def.name.to_string(),
        total: records.len(),
        values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FacetSelection;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        tag: &'static str,
    }

    impl Record for Row {
        const KIND: &'static str = "row";

        fn facets() -> &'static [FacetDef] {
            &[FacetDef { name: "tag", values: &["red", "blue"] }]
        }

        fn text_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn facet_value(&self, facet: &str) -> Option<&str> {
            (facet == "tag").then_some(self.tag)
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", tag: "red" },
            Row { name: "beta", tag: "blue" },
            Row { name: "Alphabet", tag: "green" },
        ]
    }

    #[test]
    fn identity_state_keeps_everything_in_order() {
        let rows = rows();
        let result = filter(&rows, &FilterState::new()).unwrap();
        let names: Vec<_> = result.iter().map(|r| r.name).collect();
        assert_eq!(names, ["Alpha", "beta", "Alphabet"]);
    }

    #[test]
    fn query_and_facet_combine_with_and() {
        let rows = rows();
        let state = FilterState::new().with_query("ALPHA").with_facet("tag", "red");
        let result = filter(&rows, &state).unwrap();
        assert_eq!(result.records(), [&rows[0]]);
    }

    #[test]
    fn facet_value_match_is_case_sensitive() {
        let rows = rows();
        let state = FilterState::new().with_facet("tag", "Red");
        assert!(filter(&rows, &state).unwrap().is_empty());
    }

    #[test]
    fn unknown_facet_name_is_rejected() {
        let rows = rows();
        let state = FilterState::new().with_facet("colour", FacetSelection::All);
        assert!(filter(&rows, &state).is_err());
        assert!(facet_counts(&rows, "colour").is_err());
    }

    #[test]
    fn counts_include_declared_zeroes_and_undeclared_values() {
        let rows = rows();
        let counts = facet_counts(&rows, "tag").unwrap();
        let entries: Vec<_> = counts.iter().collect();
        assert_eq!(entries, [("all", 3), ("red", 1), ("blue", 1), ("green", 1)]);
        assert_eq!(counts.get("purple"), 0);
    }

    #[test]
    fn empty_needle_matches_record_without_text() {
        assert!(text_matches(&[], ""));
        assert!(!text_matches(&[], "a"));
    }
}
