//! WordPress.com Desktop core
//!
//! Configuration, logging and the shell state that hands each window a
//! navigation dispatcher backed by the shared policy and settings database.

mod config;
mod error;
mod opener;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use opener::SystemOpener;
pub use shell::DesktopShell;

// Re-export the crates a host binding needs
pub use wpdesk_navigation::{
    ConfirmDialog, Decision, Disposition, ExternalOpener, MessageBox, NavigationConfig,
    NavigationDispatcher, NavigationError, NavigationEvent, NavigationPolicy, ShellCommands,
    WindowGeometry,
};
pub use wpdesk_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
