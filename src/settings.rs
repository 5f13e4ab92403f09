//! Viewer settings.
//!
//! Settings are layered: built-in defaults, then an optional config file, then
//! `PACKET_DOCTOR_*` environment variables. Command-line flags are applied on
//! top by the binary.
//!
//! ```toml
//! variant = "two-panel"
//! theme = "light"
//! log_level = "debug"
//! ```

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::data::Variant;

/// Environment variable prefix for settings overrides.
pub const ENV_PREFIX: &str = "PACKET_DOCTOR";

/// Which colour theme to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Panel layout and empty-list handling.
    pub variant: Variant,
    pub theme: ThemeChoice,
    /// Filter directive for log output when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            theme: ThemeChoice::default(),
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()
    }

    /// Apply command-line values on top of the loaded settings.
    ///
    /// Each `Some` replaces whatever the file or environment provided.
    pub fn apply_overrides(
        &mut self,
        variant: Option<Variant>,
        theme: Option<ThemeChoice>,
        log_level: Option<String>,
    ) {
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(theme) = theme {
            self.theme = theme;
        }
        if let Some(level) = log_level {
            self.log_level = level;
        }
    }
}
