//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treescope/treescope.toml`
//! 3. Local config: `<dir>/.treescope.toml` (working directory)
//! 4. Environment variables: `TREESCOPE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

const LOCAL_CONFIG_NAME: &str = ".treescope.toml";

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified", so partial files inherit from the layer below).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub chart_width: Option<usize>,
    pub value_precision: Option<usize>,
}

/// Unified configuration for treescope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Dataset file loaded when no --file argument is given
    /// (default: none, the built-in sample tree is used)
    pub data_file: Option<PathBuf>,
    /// Width of the widest chart bar, in characters
    pub chart_width: usize,
    /// Decimal places when displaying node values
    pub value_precision: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: None,
            chart_width: 40,
            value_precision: 2,
        }
    }
}

/// Get the XDG config directory for treescope.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treescope").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treescope.toml"))
}

/// Get the path to the local config file in a working directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(LOCAL_CONFIG_NAME)
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR`, and `${VAR}` in a path string.
fn expand_str(s: &str) -> String {
    shellexpand::full(s)
        .map(|expanded| expanded.into_owned())
        .unwrap_or_else(|_| s.to_string())
}

impl Settings {
    /// Expand shell variables and tilde in path-like fields.
    fn expand_paths(&mut self) {
        if let Some(path) = &self.data_file {
            let expanded = expand_str(path.to_string_lossy().as_ref());
            self.data_file = Some(PathBuf::from(expanded));
        }
    }

    /// Merge overlay config onto self (base): overlay wins where
    /// specified, the rest is inherited.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            chart_width: overlay.chart_width.unwrap_or(self.chart_width),
            value_precision: overlay.value_precision.unwrap_or(self.value_precision),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.treescope.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/treescope/treescope.toml`
    /// 3. Local config: `<local_dir>/.treescope.toml`
    /// 4. Environment variables: `TREESCOPE_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                let raw = load_raw_settings(&local_path)?;
                current = current.merge_with(&raw);
            }
        }

        // 4. Environment variables (explicit override)
        current = Self::apply_env_overrides(current)?;

        // Expand ~ and $VAR in path-like fields
        current.expand_paths();

        Ok(current)
    }

    /// Apply TREESCOPE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder = Config::builder()
            .add_source(Environment::with_prefix("TREESCOPE").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_int("chart_width") {
            settings.chart_width = val.max(0) as usize;
        }
        if let Ok(val) = config.get_int("value_precision") {
            settings.value_precision = val.max(0) as usize;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treescope configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treescope/treescope.toml
#   Local:  ./.treescope.toml
#   Env:    TREESCOPE_* environment variables (explicit overrides)

# Dataset file with the record hierarchy (JSON). When unset, the
# built-in sample tree is shown.
# data_file = "~/data/records.json"

# Width of the widest chart bar, in characters
# chart_width = 40

# Decimal places when displaying node values
# value_precision = 2
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
