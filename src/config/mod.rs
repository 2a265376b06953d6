//! Configuration management for rxlookup

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Default RxClass API root
pub const DEFAULT_RXCLASS_BASE_URL: &str = "https://rxnav.nlm.nih.gov/REST";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base URL of the RxClass REST API
    #[serde(default = "default_rxclass_base_url")]
    pub rxclass_base_url: String,

    /// Speech program to invoke for /speak (espeak, say, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speech_command: Option<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_rxclass_base_url() -> String {
    DEFAULT_RXCLASS_BASE_URL.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            rxclass_base_url: default_rxclass_base_url(),
            speech_command: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Socket address string for the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
