//! Desktop shell state
//!
//! Owns the configuration, the settings database and the navigation policy
//! shared by every window. Windows get their own dispatcher bound to the
//! host's dialog and command implementations.

use std::sync::Arc;

use wpdesk_navigation::{
    ConfirmDialog, ExternalOpener, HostCapabilities, NavigationDispatcher, NavigationPolicy,
    ShellCommands,
};
use wpdesk_storage::{keys, Database};

use crate::config::Config;
use crate::opener::SystemOpener;
use crate::Result;

pub struct DesktopShell {
    config: Config,
    db: Database,
    policy: Arc<NavigationPolicy>,
    opener: Arc<dyn ExternalOpener>,
}

impl DesktopShell {
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::open(&config.database_path)?;
        Self::with_database(config, db)
    }

    pub fn with_database(config: Config, db: Database) -> Result<Self> {
        let policy = NavigationPolicy::new(&config.navigation)?;

        tracing::info!(
            server = %config.navigation.server_url(),
            public_host = %config.navigation.public_host,
            "Desktop shell initialized"
        );

        Ok(Self {
            config,
            db,
            policy: Arc::new(policy),
            opener: Arc::new(SystemOpener),
        })
    }

    /// Replace the system browser launcher.
    pub fn with_opener(mut self, opener: Arc<dyn ExternalOpener>) -> Self {
        self.opener = opener;
        self
    }

    /// Navigation dispatcher for one window.
    pub fn dispatcher_for(
        &self,
        window: &str,
        commands: Arc<dyn ShellCommands>,
        dialog: Arc<dyn ConfirmDialog>,
    ) -> NavigationDispatcher {
        NavigationDispatcher::new(
            window,
            Arc::clone(&self.policy),
            HostCapabilities {
                opener: Arc::clone(&self.opener),
                settings: Arc::new(self.db.clone()),
                commands,
                dialog,
            },
        )
    }

    /// Path the main view should load on launch, if one was saved.
    pub fn last_location(&self) -> Result<Option<String>> {
        Ok(self.db.get_setting(keys::LAST_LOCATION)?)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }
}
