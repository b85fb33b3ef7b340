//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` and the
//! runtime (the CLI in `main.rs`) executes them in sequence.
//!
//! # Example
//!
//! ```rust
//! use storefront_console::app::{Action, Page};
//!
//! let actions = vec![Action::OpenRecord {
//!     page: Page::Orders,
//!     id: "#ORD-12346".to_string(),
//! }];
//! assert_eq!(actions.len(), 1);
//! ```

use super::modes::Page;
use crate::domain::StoreSettings;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows the details of one record.
    ///
    /// Emitted when the user selects the highlighted row of a list page.
    OpenRecord {
        /// Page the record belongs to.
        page: Page,
        /// Display identifier of the record.
        id: String,
    },

    /// Stores edited settings.
    ///
    /// There is no persistence layer; the runtime only reports the values.
    SaveSettings(StoreSettings),

    /// Ends the session.
    Quit,
}
