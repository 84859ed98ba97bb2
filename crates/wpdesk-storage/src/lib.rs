//! WordPress.com Desktop storage layer
//!
//! SQLite-backed key/value settings that survive an app relaunch
//! (last visited location, window preferences).

mod database;
mod error;
mod migrations;

pub mod keys;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
