//! Error types for the storefront console.
//!
//! This module defines the centralized error type [`ConsoleError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for storefront console operations.
///
/// The filter engine itself is total over its declared inputs; the only error it
/// raises is [`ConsoleError::UnknownFacet`], which marks a mismatch between the
/// caller's facet vocabulary and the record schema. The remaining variants cover
/// fixture loading, configuration and user input at the outer surfaces.
///
/// # Examples
///
/// ```
/// use storefront_console::ConsoleError;
///
/// fn load_config() -> Result<(), ConsoleError> {
///     Err(ConsoleError::Config("missing fixtures_path".to_string()))
/// }
///
/// assert!(load_config().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A facet name was used that the record type does not declare.
    ///
    /// This is a programming fault: the UI's facet vocabulary disagrees with the
    /// record schema. It is surfaced immediately instead of being ignored.
    #[error("Unknown facet '{facet}' for {record} records")]
    UnknownFacet {
        /// Record kind the facet was looked up on (e.g. `"order"`).
        record: &'static str,
        /// The facet name that was not recognised.
        facet: String,
    },

    /// Fixture data could not be parsed or is inconsistent.
    #[error("Fixture error: {0}")]
    Fixture(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed user input at the command-line or browse prompt.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A specialized `Result` type for storefront console operations.
///
/// This is a type alias for `std::result::Result<T, ConsoleError>`.
pub type Result<T> = std::result::Result<T, ConsoleError>;
