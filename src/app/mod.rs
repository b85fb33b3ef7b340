//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the runtime (`main.rs`) and the domain and filter
//! layers. It implements the event-driven architecture behind both the
//! one-shot CLI and the interactive `browse` loop.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                            ↓
//!                                       View Models → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`commands`]: Line commands of the interactive `browse` session
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Page navigation
//! - [`session`]: Per-page list sessions over the filter engine
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod commands;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::Action;
pub use commands::parse_command;
pub use handler::{handle_event, Event};
pub use modes::Page;
pub use session::{ListSession, ListView};
pub use state::{AppState, SettingsForm};
