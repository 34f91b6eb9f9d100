use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid timeout '{value}': {message}")]
    Timeout { value: String, message: String },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,
    #[serde(default = "default_timeout")]
    pub timeout: String,
}

/// Base URLs of the three upstream services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Endpoints {
    #[serde(default = "default_ip")]
    pub ip: String,
    #[serde(default = "default_geo")]
    pub geo: String,
    #[serde(default = "default_flyover")]
    pub flyover: String,
}

fn default_ip() -> String {
    "https://api.ipify.org?format=json".to_string()
}

fn default_geo() -> String {
    "http://ipwho.is".to_string()
}

fn default_flyover() -> String {
    "https://iss-flyover.herokuapp.com/json/".to_string()
}

fn default_timeout() -> String {
    "30s".to_string()
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ip: default_ip(),
            geo: default_geo(),
            flyover: default_flyover(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.timeout()?;
        Ok(config)
    }

    pub fn timeout(&self) -> Result<Duration, ConfigError> {
        humantime::parse_duration(self.timeout.trim()).map_err(|e| ConfigError::Timeout {
            value: self.timeout.clone(),
            message: e.to_string(),
        })
    }
}
