//! Record shape consumed by the filter engine.
//!
//! A record exposes two kinds of fields: free-text fields eligible for
//! case-insensitive substring search, and facet fields holding one value from
//! a small fixed vocabulary. The vocabulary is declared statically per record
//! type through [`FacetDef`] so facet names can be validated before filtering.

use crate::domain::error::{ConsoleError, Result};

/// Declaration of one categorical facet of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetDef {
    /// Facet name used in filter selections (e.g. `"status"`).
    pub name: &'static str,

    /// Known values in display order.
    ///
    /// Counts are reported for every declared value, including those that do
    /// not occur in the current collection.
    pub values: &'static [&'static str],
}

/// A uniformly-shaped item that can be searched and faceted.
///
/// # Example
///
/// ```rust
/// use storefront_console::filter::{FacetDef, Record};
///
/// struct Ticket {
///     title: String,
///     state: &'static str,
/// }
///
/// impl Record for Ticket {
///     const KIND: &'static str = "ticket";
///
///     fn facets() -> &'static [FacetDef] {
///         &[FacetDef { name: "state", values: &["open", "closed"] }]
///     }
///
///     fn text_fields(&self) -> Vec<&str> {
///         vec![self.title.as_str()]
///     }
///
///     fn facet_value(&self, facet: &str) -> Option<&str> {
///         (facet == "state").then_some(self.state)
///     }
/// }
///
/// assert!(Ticket::facet("state").is_ok());
/// assert!(Ticket::facet("owner").is_err());
/// ```
pub trait Record {
    /// Singular record kind, used in error messages and summaries.
    const KIND: &'static str;

    /// Facets declared by this record type.
    fn facets() -> &'static [FacetDef];

    /// Text fields searched by the free-text query, in priority order.
    fn text_fields(&self) -> Vec<&str>;

    /// Value of the named facet, or `None` if the facet is not declared.
    fn facet_value(&self, facet: &str) -> Option<&str>;

    /// Looks up a facet declaration by name.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::UnknownFacet`] if the record type does not
    /// declare a facet with that name.
    fn facet(name: &str) -> Result<&'static FacetDef> {
        Self::facets()
            .iter()
            .find(|def| def.name == name)
            .ok_or_else(|| ConsoleError::UnknownFacet {
                record: Self::KIND,
                facet: name.to_string(),
            })
    }
}
