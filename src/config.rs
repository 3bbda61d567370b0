//! Configuration for the SDK and its command-line tools
//!
//! Supports loading configuration from:
//! - Default values
//! - Config file (wonzimer.toml)
//! - Environment variables (WONZIMER_*)
//!
//! ## Example config file (wonzimer.toml):
//! ```toml
//! [registry]
//! schema_dir = "./schemas"
//!
//! [network]
//! name = "mainnet"
//!
//! [fetch]
//! timeout_secs = 10
//! ```

use config_crate::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::registry::SchemaRegistry;

/// Main configuration for the SDK tools
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SdkConfig {
    /// Schema registry settings
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Network selection
    #[serde(default)]
    pub network: NetworkConfig,

    /// Content fetch settings
    #[serde(default)]
    pub fetch: FetchConfig,
}

/// Schema registry configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Load schemas from this directory instead of the bundled set
    #[serde(default)]
    pub schema_dir: Option<PathBuf>,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Network to resolve contract addresses on
    #[serde(default = "default_network")]
    pub name: String,
}

/// Content fetch configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout for content fetches, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_network() -> String {
    "mainnet".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            name: default_network(),
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SdkConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        let config_locations = ["wonzimer.toml", ".wonzimer.toml", "config/wonzimer.toml"];
        for location in config_locations {
            builder = builder.add_source(File::with_name(location).required(false));
        }

        // XDG config directory
        if let Some(config_dir) = directories::ProjectDirs::from("com", "wonzimer", "sdk") {
            let xdg_config = config_dir.config_dir().join("wonzimer.toml");
            if xdg_config.exists() {
                builder = builder.add_source(File::from(xdg_config).required(false));
            }
        }

        if let Some(path) = config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // Environment variables (WONZIMER_*)
        builder = builder.add_source(
            Environment::with_prefix("WONZIMER")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Save configuration to a file
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        std::fs::write(path, content)
    }

    /// Build the schema registry this configuration selects: a filesystem
    /// tree when `schema_dir` is set, the bundled set otherwise.
    pub fn schema_registry(&self) -> crate::error::Result<SchemaRegistry> {
        match &self.registry.schema_dir {
            Some(dir) => SchemaRegistry::from_directory(dir),
            None => SchemaRegistry::bundled(),
        }
    }

    /// The configured per-request fetch timeout
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch.timeout_secs)
    }
}
