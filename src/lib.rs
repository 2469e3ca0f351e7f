//! Core library surface for the Book Club Manager CLI.
//!
//! The public modules exposed here provide an intentionally small API so the
//! `bin` target as well as the integration tests can reuse the same pieces:
//! connection settings, the value types the database routines exchange, and
//! the menu loop itself.

pub mod config;
pub mod db;
pub mod models;
pub mod ui;

/// Connection settings resolved from defaults and the environment.
pub use config::DbConfig;

/// The value types exchanged with the database routines.
pub use models::{BookMatch, NewBook, NewUser, Role};

/// The interactive application entry point and its stream container.
pub use ui::{run_app, App};
