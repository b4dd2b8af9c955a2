//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Capabilities, Controller};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings shared by every front-end.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Optional features of the controller.
    capabilities: Capabilities,

    /// Seed for the random auto mover; seeded from the OS when absent.
    seed: Option<u64>,

    /// Log file used by the terminal UI.
    log_file: PathBuf,

    /// Default log filter when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            capabilities: Capabilities::default(),
            seed: None,
            log_file: PathBuf::from("noughts_tui.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(capabilities = ?config.capabilities, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, otherwise returns the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Applies command-line overrides on top of the file values.
    ///
    /// Flags can only switch features off; a seed replaces the file's seed.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, seed: Option<u64>, no_auto_move: bool, no_help: bool) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        if no_auto_move {
            self.capabilities.enable_auto_move = false;
        }
        if no_help {
            self.capabilities.enable_help_screen = false;
        }
        self
    }

    /// Creates a controller with these capabilities and seed.
    #[instrument(skip(self))]
    pub fn controller(&self) -> Controller {
        match self.seed {
            Some(seed) => Controller::with_seed(self.capabilities, seed),
            None => Controller::new(self.capabilities),
        }
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
