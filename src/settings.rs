//! # Settings Module
//!
//! ## Purpose
//! Runtime configuration of the Joback Cp service: where to listen, how much to log
//! and which integration method the estimator uses.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "host": "127.0.0.1",
//!   "port": 5000,
//!   "log_level": "info",
//!   "log_file": null,
//!   "integration": { "method": "analytic" },
//!   "default_temperature": 298.15
//! }
//! ```
//! Every field is optional; missing fields take the defaults above. The file is read from
//! `joback_config.json` in the working directory unless another path is given. When the
//! file does not exist the defaults are used.

use crate::Joback::joback_api::Integrator;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "joback_config.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot access config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown log level '{0}'")]
    LogLevel(String),
}

/// Configuration of the server and the estimator.
///
/// # Fields
/// * `host`, `port` - socket address of the HTTP server
/// * `log_level` - one of off, error, warn, info, debug, trace
/// * `log_file` - if set, log records are also written to this file
/// * `integration` - integration method for Cp(T)
/// * `default_temperature` - used for `temperatura_min`/`temperatura_max` when a request omits them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub log_file: Option<String>,
    pub integration: Integrator,
    pub default_temperature: f64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            log_file: None,
            integration: Integrator::default(),
            default_temperature: 298.15,
        }
    }
}

impl ServerSettings {
    /// Loads settings from a JSON file, or the defaults if the file does not exist.
    ///
    /// # Returns
    /// * `Ok(ServerSettings)` - loaded or default settings
    /// * `Err(SettingsError)` - the file exists but cannot be read or parsed
    pub fn load(config_file: &str) -> Result<Self, SettingsError> {
        if !Path::new(config_file).exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_file).map_err(|source| SettingsError::Io {
            path: config_file.to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: config_file.to_string(),
            source,
        })
    }

    /// Writes the settings as pretty-printed JSON.
    pub fn save(&self, config_file: &str) -> Result<(), SettingsError> {
        let content =
            serde_json::to_string_pretty(self).map_err(|source| SettingsError::Parse {
                path: config_file.to_string(),
                source,
            })?;
        fs::write(config_file, content).map_err(|source| SettingsError::Io {
            path: config_file.to_string(),
            source,
        })
    }

    pub fn level_filter(&self) -> Result<LevelFilter, SettingsError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| SettingsError::LogLevel(self.log_level.clone()))
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
