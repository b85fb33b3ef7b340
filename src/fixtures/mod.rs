//! Fixture layer supplying the console's record collections.
//!
//! # Modules
//!
//! - `backend`: [`FixtureStore`] trait abstraction
//! - `json`: JSON document implementation with an embedded default

pub mod backend;
pub mod json;

pub use backend::FixtureStore;
pub use json::JsonFixtures;
