//! Optional controller features.

use serde::{Deserialize, Serialize};

/// Feature switches for a controller.
///
/// Both features are on by default; a plain two-human game turns them off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Accept [`InputEvent::RequestAutoMove`](crate::InputEvent::RequestAutoMove).
    pub enable_auto_move: bool,
    /// Accept [`InputEvent::ShowHelp`](crate::InputEvent::ShowHelp).
    pub enable_help_screen: bool,
}

impl Capabilities {
    /// Every feature switched off.
    pub fn minimal() -> Self {
        Self {
            enable_auto_move: false,
            enable_help_screen: false,
        }
    }

    /// Sets whether random auto moves are accepted.
    pub fn with_auto_move(mut self, enabled: bool) -> Self {
        self.enable_auto_move = enabled;
        self
    }

    /// Sets whether the help screen can be opened.
    pub fn with_help_screen(mut self, enabled: bool) -> Self {
        self.enable_help_screen = enabled;
        self
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            enable_auto_move: true,
            enable_help_screen: true,
        }
    }
}
