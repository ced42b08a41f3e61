use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

/// Main configuration aggregate, loaded from an optional TOML file and
/// merged with command-line overrides (CLI wins).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values the command line may override on top of the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_server: Option<String>,
    pub trace: Option<bool>,
}

impl Config {
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_string(),
                    source,
                })?;
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_string(),
                    source,
                })?
            }
            None => Config::default(),
        };

        if let Some(root_server) = overrides.root_server {
            config.resolver.root_server = Some(root_server);
        }
        if let Some(trace) = overrides.trace {
            config.resolver.trace = trace;
        }

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let root_server = self
            .resolver
            .root_server
            .as_deref()
            .ok_or_else(|| ConfigError::Invalid("no root server configured".to_string()))?;

        root_server.parse::<IpAddr>().map_err(|_| {
            ConfigError::Invalid(format!("invalid root server address '{}'", root_server))
        })?;

        if self.resolver.query_timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "query_timeout_ms must be greater than zero".to_string(),
            ));
        }

        if !self.logging.is_valid_level() {
            return Err(ConfigError::Invalid(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }
}
