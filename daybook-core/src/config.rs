//! Global daybook configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::Deserialize;

use crate::error::{DaybookError, DaybookResult};
use crate::store::DEFAULT_STORE_FILE;

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

/// Configuration at ~/.config/daybook/config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct DaybookConfig {
    /// Where calendars are stored. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_store_path")]
    pub store_path: PathBuf,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            store_path: default_store_path(),
        }
    }
}

impl DaybookConfig {
    pub fn config_path() -> DaybookResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DaybookError::Config("Could not determine config directory".into()))?
            .join("daybook");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config from its default location, creating a commented
    /// default file on first run.
    pub fn load() -> DaybookResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load the config from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> DaybookResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| DaybookError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DaybookError::Config(e.to_string()))
    }

    /// Store path with `~` expanded.
    pub fn store_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.store_path.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> DaybookResult<()> {
        let contents = format!(
            "\
# daybook configuration

# Where calendars are stored (one JSON object per line):
# store_path = \"{}\"
",
            DEFAULT_STORE_FILE
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DaybookError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| DaybookError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
