//! Generic record filter and search engine.
//!
//! Every list page of the console (orders, products, users) runs the same
//! pipeline: hold an immutable base collection, narrow it with a free-text
//! query and facet selections, and show per-facet counts computed over the
//! base collection. This module implements that pipeline once for any type
//! implementing [`Record`].
//!
//! # Modules
//!
//! - [`record`]: The [`Record`] trait and facet declarations
//! - [`state`]: [`FilterState`] and [`FacetSelection`]
//! - [`engine`]: [`filter`] and [`facet_counts`]

pub mod engine;
pub mod record;
pub mod state;

pub use engine::{count_facet, facet_counts, filter, filter_indices, matches, text_matches, FacetCounts, FilteredResult};
pub use record::{FacetDef, Record};
pub use state::{FacetSelection, FilterState, ALL};
