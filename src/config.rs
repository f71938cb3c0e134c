//! Configuration file handling
//!
//! ```toml
//! [api]
//! timeout_secs = 10
//! base_url = "https://www.cbr.ru/scripts/XML_daily.asp?date_req="
//! user_agent = "Mozilla/5.0 (compatible; daily-rates)"
//!
//! [dates]
//! date_format = "%d/%m/%Y"
//!
//! [run]
//! failure_policy = "abort"
//! ```

use crate::calendar::DateFormat;
use crate::error::{RatesError, Result};
use crate::pipeline::FailurePolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Subdirectory of the user config dir
pub const CONFIG_DIR_NAME: &str = "daily-rates";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub dates: DateConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Endpoint settings for the rate fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateConfig {
    /// chrono strftime pattern for request tokens
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_base_url() -> String {
    "https://www.cbr.ru/scripts/XML_daily.asp?date_req=".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (compatible; daily-rates)".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
        }
    }
}

impl DateConfig {
    pub fn format(&self) -> Result<DateFormat> {
        DateFormat::parse(&self.date_format)
    }
}

impl Config {
    /// Parse and validate TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)
            .map_err(|e| RatesError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            RatesError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. Without one, `./config.toml` and
    /// then the user config dir are tried, falling back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(config_path) = path {
            log::debug!("loading config from {}", config_path.display());
            return Self::from_file(config_path);
        }

        for candidate in default_locations() {
            if candidate.exists() {
                log::debug!("loading config from {}", candidate.display());
                return Self::from_file(&candidate);
            }
        }

        log::debug!("no config file found, using defaults");
        Ok(Config::default())
    }

    /// Reject settings that would make every request fail
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(RatesError::Config("api.base_url must not be empty".to_string()));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(RatesError::Config("api.user_agent must not be empty".to_string()));
        }
        if self.api.timeout_secs == 0 {
            return Err(RatesError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        self.dates.format()?;
        Ok(())
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| RatesError::Config(format!("Failed to serialize config: {}", e)))
    }
}

/// Candidate config files, in lookup order
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    locations
}
