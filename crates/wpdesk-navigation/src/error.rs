//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid rule pattern: {0}")]
    InvalidRule(String),

    #[error("Cannot rewrite URL: {0}")]
    Rewrite(String),

    #[error("Dialog failed: {0}")]
    Dialog(String),

    #[error("Failed to open external browser: {0}")]
    Open(String),

    #[error("Storage error: {0}")]
    Storage(#[from] wpdesk_storage::StorageError),
}
