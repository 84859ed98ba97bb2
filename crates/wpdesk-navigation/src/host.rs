//! Capabilities the navigation dispatcher borrows from the desktop host

use std::sync::Arc;

use wpdesk_storage::Database;

use crate::decision::MessageBox;
use crate::Result;

/// Hands a URL to the operating system's default browser.
pub trait ExternalOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

pub trait SettingsStore: Send + Sync {
    fn save_setting(&self, key: &str, value: &str) -> Result<()>;
    fn load_setting(&self, key: &str) -> Result<Option<String>>;
}

/// App-level commands sent to the Calypso front end of a window.
pub trait ShellCommands: Send + Sync {
    fn show_my_sites(&self, window: &str);
}

/// Blocking modal dialog. Returns the index of the chosen button.
pub trait ConfirmDialog: Send + Sync {
    fn confirm(&self, window: &str, message: &MessageBox) -> Result<usize>;
}

impl SettingsStore for Database {
    fn save_setting(&self, key: &str, value: &str) -> Result<()> {
        Ok(self.set_setting(key, value)?)
    }

    fn load_setting(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_setting(key)?)
    }
}

#[derive(Clone)]
pub struct HostCapabilities {
    pub opener: Arc<dyn ExternalOpener>,
    pub settings: Arc<dyn SettingsStore>,
    pub commands: Arc<dyn ShellCommands>,
    pub dialog: Arc<dyn ConfirmDialog>,
}
