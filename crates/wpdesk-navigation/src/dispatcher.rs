//! Applies navigation decisions for one window
//!
//! The policy only classifies; this is where the browser gets opened, the
//! user gets prompted and settings get written. Every failure here is logged
//! and absorbed so a bad event never takes the window down.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use wpdesk_storage::keys;

use crate::decision::{Decision, Disposition, LoginPrompt, PromptChoice, WindowGeometry};
use crate::host::HostCapabilities;
use crate::policy::{is_openably_valid, NavigationPolicy};
use crate::Result;

/// A navigation notification raised by the embedded view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum NavigationEvent {
    WillNavigate { url: String },
    NewWindow { url: String, geometry: WindowGeometry },
    WillRedirect { url: String },
}

impl NavigationEvent {
    pub fn url(&self) -> &str {
        match self {
            NavigationEvent::WillNavigate { url }
            | NavigationEvent::NewWindow { url, .. }
            | NavigationEvent::WillRedirect { url } => url,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NavigationEvent::WillNavigate { .. } => "will-navigate",
            NavigationEvent::NewWindow { .. } => "new-window",
            NavigationEvent::WillRedirect { .. } => "will-redirect",
        }
    }
}

pub struct NavigationDispatcher {
    window: String,
    policy: Arc<NavigationPolicy>,
    host: HostCapabilities,
}

impl NavigationDispatcher {
    pub fn new(window: impl Into<String>, policy: Arc<NavigationPolicy>, host: HostCapabilities) -> Self {
        Self {
            window: window.into(),
            policy,
            host,
        }
    }

    pub fn window(&self) -> &str {
        &self.window
    }

    pub fn policy(&self) -> &NavigationPolicy {
        &self.policy
    }

    /// Decide and act on one event. Events whose URL can't be parsed are left
    /// to the host's default handling.
    pub fn handle(&self, event: &NavigationEvent) -> Disposition {
        let decision = match event {
            NavigationEvent::WillNavigate { url } => self.policy.will_navigate(url),
            NavigationEvent::NewWindow { url, geometry } => self.policy.new_window(url, *geometry),
            NavigationEvent::WillRedirect { url } => self.policy.will_redirect(url),
        };

        match decision {
            Ok(decision) => self.apply(decision),
            Err(e) => {
                tracing::error!(
                    window = %self.window,
                    event = event.name(),
                    url = event.url(),
                    error = %e,
                    "Failed to evaluate navigation event"
                );
                Disposition::Proceed
            }
        }
    }

    pub fn apply(&self, decision: Decision) -> Disposition {
        match decision {
            Decision::Allow => Disposition::Proceed,
            Decision::Suppress => Disposition::Cancel,
            Decision::OpenExternal(url) => {
                // The embedded view must not show this page even if the
                // browser couldn't be opened.
                self.open_in_browser(&url);
                Disposition::Cancel
            }
            Decision::OpenInNewAppWindow(geometry) => Disposition::ProceedWith(geometry),
            Decision::PromptUser(prompt) => {
                if let Err(e) = self.prompt_login(&prompt) {
                    tracing::error!(
                        window = %self.window,
                        error = %e,
                        "Failed to prompt for Jetpack authorization"
                    );
                }
                Disposition::Cancel
            }
        }
    }

    /// Open `url` in the system browser if it is http(s). Returns whether the
    /// opener was invoked successfully.
    pub fn open_in_browser(&self, url: &str) -> bool {
        let Some(url) = is_openably_valid(url) else {
            tracing::debug!(url = url, "Not opening non-http(s) URL");
            return false;
        };

        tracing::info!(url = url, "Using system default handler for URL");
        match self.host.opener.open(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(url = url, error = %e, "Failed to open URL in browser");
                false
            }
        }
    }

    fn prompt_login(&self, prompt: &LoginPrompt) -> Result<()> {
        let selected = self
            .host
            .dialog
            .confirm(&self.window, &prompt.message_box())?;

        match PromptChoice::from_index(selected) {
            Some(PromptChoice::ProceedInBrowser) => {
                tracing::info!("User selected 'Proceed in Browser'");
                self.open_in_browser(&prompt.url);
            }
            Some(PromptChoice::Cancel) => {
                tracing::info!("User selected 'Cancel'");
            }
            None => {
                tracing::warn!(selected = selected, "Unknown prompt selection");
            }
        }

        // Both choices land back on My Sites; the saved location keeps the
        // redirect from firing again when the app relaunches.
        self.host.commands.show_my_sites(&self.window);
        let location = keys::stats_location(&prompt.host);
        if let Err(e) = self.host.settings.save_setting(keys::LAST_LOCATION, &location) {
            tracing::error!(error = %e, "Failed to save last location");
        }

        Ok(())
    }
}
