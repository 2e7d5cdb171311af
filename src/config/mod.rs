use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::store::{StoreOptions, UpdateOrder};

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  #[serde(default = "default_log_level")]
  pub level: String,
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: default_log_level(),
    }
  }
}

/// movied configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
  /// HTTP listening address
  #[serde(default = "default_server_addr")]
  pub server_addr: String,

  /// Start with the two sample movies
  #[serde(default = "default_seed")]
  pub seed: bool,

  /// Where `PUT /movies/:id` places the updated movie
  #[serde(default)]
  pub update_order: UpdateOrder,

  /// Log configuration
  #[serde(default)]
  pub log: LogConfig,
}

fn default_server_addr() -> String {
  "0.0.0.0:8000".to_string()
}

fn default_seed() -> bool {
  true
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: default_server_addr(),
      seed: default_seed(),
      update_order: UpdateOrder::default(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from TOML file
  pub fn from_file(path: &str) -> anyhow::Result<Self> {
    let config_str = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file '{}'", path))?;

    Self::from_toml(&config_str)
      .with_context(|| format!("Failed to parse config file '{}'", path))
  }

  /// Parse configuration from a TOML string
  pub fn from_toml(config_str: &str) -> anyhow::Result<Self> {
    Ok(toml::from_str(config_str)?)
  }

  /// Store tunables derived from this configuration
  pub fn store_options(&self) -> StoreOptions {
    StoreOptions {
      update_order: self.update_order,
      ..StoreOptions::default()
    }
  }
}
