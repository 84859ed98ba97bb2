//! WordPress.com Desktop navigation policy
//!
//! Decides what happens when the embedded Calypso view tries to leave the
//! current page:
//! - stay in the app (allow-listed hosts and paths)
//! - open in the system browser (everything else, http(s) only)
//! - open a new, smaller app window (connect flows)
//! - ask the user (wp-login reauth redirects that need Jetpack SSO)
//!
//! [`NavigationPolicy`] classifies events without side effects;
//! [`NavigationDispatcher`] carries out its decisions through the host's
//! [`HostCapabilities`].

mod decision;
mod dispatcher;
mod error;
mod host;
mod policy;
mod rules;
mod target;

pub use decision::{
    Decision, Disposition, LoginPrompt, MessageBox, MessageKind, PromptChoice, WindowGeometry,
    NEW_WINDOW_OFFSET, NEW_WINDOW_SCALE,
};
pub use dispatcher::{NavigationDispatcher, NavigationEvent};
pub use error::NavigationError;
pub use host::{ConfirmDialog, ExternalOpener, HostCapabilities, SettingsStore, ShellCommands};
pub use policy::{is_login_redirect, is_openably_valid, NavigationConfig, NavigationPolicy};
pub use rules::{MatchRule, RuleSet, WILDCARD_PATH};
pub use target::NavigationTarget;

pub type Result<T> = std::result::Result<T, NavigationError>;
