//! Painel Storage Layer
//!
//! SQLite-backed key/value persistence for session state.
//! Plays the role browser local storage played for the web client:
//! string entries that survive a restart and are removed on logout.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
