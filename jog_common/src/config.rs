//! TOML configuration loading for the jogging console.
//!
//! The only machine-dependent value is the parallel-port location: the
//! base address differs between on-board ports and add-on cards, and the
//! device node can vary. Pulse timing and jog distance are fixed
//! constants, not configuration.
//!
//! # TOML Example
//!
//! ```toml
//! [port]
//! base_address = 0x378
//! device = "/dev/lp0"
//! ```

use crate::consts::{DEFAULT_BASE_ADDRESS, DEFAULT_PARPORT_DEVICE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error type for configuration loading operations.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Configuration file not found at the specified path.
    #[error("configuration file not found")]
    FileNotFound,

    /// File read or TOML parsing failed.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Parallel-port section of `jog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortConfig {
    /// I/O base address of the data register.
    #[serde(default = "default_base_address")]
    pub base_address: u16,

    /// Device node opened write-only as the exclusivity handle.
    #[serde(default = "default_device")]
    pub device: String,
}

fn default_base_address() -> u16 {
    DEFAULT_BASE_ADDRESS
}

fn default_device() -> String {
    DEFAULT_PARPORT_DEVICE.to_string()
}

impl Default for PortConfig {
    fn default() -> Self {
        Self {
            base_address: default_base_address(),
            device: default_device(),
        }
    }
}

/// Top-level configuration for the jogging console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JogConfig {
    /// Parallel-port location.
    #[serde(default)]
    pub port: PortConfig,
}

impl JogConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileNotFound`] if the file does not exist
    /// - [`ConfigError::Parse`] if the TOML is invalid
    /// - [`ConfigError::Validation`] if semantic validation fails
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::FileNotFound
            } else {
                ConfigError::Parse(e.to_string())
            }
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if:
    /// - `port.base_address` is zero
    /// - `port.device` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port.base_address == 0 {
            return Err(ConfigError::Validation(
                "port.base_address cannot be zero".to_string(),
            ));
        }
        if self.port.device.is_empty() {
            return Err(ConfigError::Validation(
                "port.device cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
