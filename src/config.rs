//! Application configuration.

use crate::consts::watch_consts::sheet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::{fs, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub spreadsheet_id: String,
    pub api_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            spreadsheet_id: sheet::DEFAULT_SPREADSHEET_ID.to_string(),
            api_key: sheet::PLACEHOLDER_API_KEY.to_string(),
        }
    }
}

impl Config {
    /// Create Config with the given spreadsheet id and API key.
    pub fn new(spreadsheet_id: String, api_key: String) -> Self {
        Config {
            spreadsheet_id,
            api_key,
        }
    }

    /// Whether a usable credential is present. The placeholder key shipped in
    /// the defaults counts as unconfigured.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != sheet::PLACEHOLDER_API_KEY
    }

    /// Loads configuration from a JSON file at the given path.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if reading from file fails or JSON is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    ///
    /// # Errors
    /// Returns an `std::io::Error` if writing to file fails or serialization fails.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization failed: {}", e),
            )
        })?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the configuration file, if present.
    pub fn clear(path: &Path) -> Result<(), std::io::Error> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

/// Path of the persisted configuration: `~/.sheetwatch/config.json`.
pub fn get_config_path() -> Result<PathBuf, std::io::Error> {
    let home = home::home_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Home directory not found")
    })?;
    Ok(home.join(".sheetwatch").join("config.json"))
}
