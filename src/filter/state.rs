//! Filter state owned by a single view session.
//!
//! [`FilterState`] has two independent axes: the free-text query and the facet
//! selections. Every combination is valid. Each mutation replaces the value of
//! one axis and leaves the other untouched.

use super::record::Record;
use crate::domain::error::Result;
use std::collections::BTreeMap;
use std::fmt;

/// Sentinel facet value meaning "no restriction".
pub const ALL: &str = "all";

/// Selected value for one facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FacetSelection {
    /// No restriction; every record passes.
    #[default]
    All,

    /// Records must hold exactly this value (case-sensitive).
    Value(String),
}

impl FacetSelection {
    /// Parses a selection, mapping the `"all"` sentinel to [`FacetSelection::All`].
    ///
    /// ```rust
    /// use storefront_console::filter::FacetSelection;
    ///
    /// assert_eq!(FacetSelection::parse("all"), FacetSelection::All);
    /// assert_eq!(
    ///     FacetSelection::parse("pending"),
    ///     FacetSelection::Value("pending".to_string())
    /// );
    /// ```
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Value(value.to_string())
        }
    }

    /// Returns `true` if a record holding `value` passes this selection.
    #[must_use]
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Value(selected) => value == Some(selected.as_str()),
        }
    }

    /// Returns the selection as it would appear in a facet tab key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Value(value) => value,
        }
    }

    /// Returns `true` for the sentinel selection.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl From<&str> for FacetSelection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for FacetSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text query plus facet selections driving which records are visible.
///
/// A fresh state has an empty query and no facet restrictions, which makes
/// filtering the identity.
///
/// # Example
///
/// ```rust
/// use storefront_console::filter::{FacetSelection, FilterState};
///
/// let state = FilterState::new()
///     .with_query("jane")
///     .with_facet("status", "pending");
///
/// assert_eq!(state.query(), "jane");
/// assert_eq!(
///     state.selection("status"),
///     &FacetSelection::Value("pending".to_string())
/// );
/// assert_eq!(state.selection("role"), &FacetSelection::All);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    query: String,
    facets: BTreeMap<String, FacetSelection>,
}

static ALL_SELECTION: FacetSelection = FacetSelection::All;

impl FilterState {
    /// Creates the identity state: empty query, no facet restrictions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state with every facet of `R` explicitly set to "all".
    #[must_use]
    pub fn for_record<R: Record>() -> Self {
        let facets = R::facets()
            .iter()
            .map(|def| (def.name.to_string(), FacetSelection::All))
            .collect();
        Self {
            query: String::new(),
            facets,
        }
    }

    /// Builder form of [`set_query`](Self::set_query).
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder form of an unchecked facet selection.
    ///
    /// The facet name is validated when the state is used for filtering.
    #[must_use]
    pub fn with_facet(mut self, facet: impl Into<String>, selection: impl Into<FacetSelection>) -> Self {
        self.facets.insert(facet.into(), selection.into());
        self
    }

    /// Current free-text query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the query axis.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Appends one character to the query.
    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    /// Removes the last character of the query. Returns `false` if it was empty.
    pub fn pop_char(&mut self) -> bool {
        self.query.pop().is_some()
    }

    /// Current selection for a facet; facets never selected read as "all".
    #[must_use]
    pub fn selection(&self, facet: &str) -> &FacetSelection {
        self.facets.get(facet).unwrap_or(&ALL_SELECTION)
    }

    /// Replaces the selection of one facet after checking `R` declares it.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`](crate::ConsoleError::UnknownFacet)
    /// when `facet` is not part of `R`'s vocabulary. The state is left
    /// unchanged in that case.
    pub fn select<R: Record>(&mut self, facet: &str, selection: FacetSelection) -> Result<()> {
        let def = R::facet(facet)?;
        self.facets.insert(def.name.to_string(), selection);
        Ok(())
    }

    /// Iterates over all explicit facet selections, including "all" entries.
    pub fn selections(&self) -> impl Iterator<Item = (&str, &FacetSelection)> {
        self.facets.iter().map(|(name, selection)| (name.as_str(), selection))
    }

    /// Returns `true` if filtering with this state returns every record.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.query.is_empty() && self.facets.values().all(FacetSelection::is_all)
    }

    /// Checks every selected facet name against `R`'s vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`](crate::ConsoleError::UnknownFacet)
    /// for the first facet name `R` does not declare.
    pub fn validate<R: Record>(&self) -> Result<()> {
        for name in self.facets.keys() {
            R::facet(name)?;
        }
        Ok(())
    }

    /// Resets both axes: empty query, every facet back to "all".
    pub fn clear(&mut self) {
        self.query.clear();
        for selection in self.facets.values_mut() {
            *selection = FacetSelection::All;
        }
    }
}
