//! Decisions returned by the navigation policy and their host-facing results

use serde::{Deserialize, Serialize};

/// Pixels added to both axes of a new in-app window's position.
pub const NEW_WINDOW_OFFSET: f64 = 50.0;
/// Factor applied to both dimensions of a new in-app window.
pub const NEW_WINDOW_SCALE: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl WindowGeometry {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shift and shrink a requested window so it doesn't sit exactly on top of
    /// the main window and read as a page change.
    pub fn offset_and_scale(self) -> Self {
        Self {
            x: self.x + NEW_WINDOW_OFFSET,
            y: self.y + NEW_WINDOW_OFFSET,
            width: self.width * NEW_WINDOW_SCALE,
            height: self.height * NEW_WINDOW_SCALE,
        }
    }
}

/// What to do with a single navigation event.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    /// Let the embedded view navigate
    Allow,
    /// Cancel the navigation, nothing else
    Suppress,
    /// Cancel and hand the URL to the system browser
    OpenExternal(String),
    /// Let the host create the window with this geometry
    OpenInNewAppWindow(WindowGeometry),
    /// Cancel and ask the user how to continue
    PromptUser(LoginPrompt),
}

/// How the host should finish the event once side effects have run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Disposition {
    Proceed,
    Cancel,
    ProceedWith(WindowGeometry),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    None,
    Info,
    Warning,
    Error,
    Question,
}

/// Modal message box contents handed to the host's dialog facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBox {
    pub kind: MessageKind,
    pub title: String,
    pub message: String,
    pub detail: String,
    pub buttons: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptChoice {
    ProceedInBrowser,
    Cancel,
}

impl PromptChoice {
    pub const BUTTONS: [PromptChoice; 2] = [PromptChoice::ProceedInBrowser, PromptChoice::Cancel];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::BUTTONS.get(index).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            PromptChoice::ProceedInBrowser => "Proceed in Browser",
            PromptChoice::Cancel => "Cancel",
        }
    }
}

/// A server-driven redirect to a wp-login page that needs Jetpack SSO.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginPrompt {
    /// The redirect target as raised by the event
    pub url: String,
    pub host: String,
    pub origin: String,
}

impl LoginPrompt {
    pub fn message_box(&self) -> MessageBox {
        MessageBox {
            kind: MessageKind::Info,
            title: "Jetpack Authorization Required".to_string(),
            message: format!(
                "This feature requires that Single Sign-On is enabled in the Jetpack settings of the site:\n\n{}",
                self.origin
            ),
            detail: "You may try again after changing the site's Jetpack settings, \
                     or you can proceed in an external browser."
                .to_string(),
            buttons: PromptChoice::BUTTONS
                .iter()
                .map(|choice| choice.label().to_string())
                .collect(),
        }
    }
}
