//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use crate::config::schema::{
    DisburseConfig, Settings, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR,
};
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
    Env(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ConfigError::Env(msg) => write!(f, "Environment error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<DisburseConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DisburseConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl Settings {
    /// Assemble runtime settings from a config plus the environment.
    ///
    /// The RPC endpoint falls back to `DISBURSER_RPC_URL` when the
    /// config leaves it empty; the private key is read from
    /// `DISBURSER_PRIVATE_KEY` if present. Expects `.env` loading to
    /// have happened already (the binary does it at startup).
    pub fn from_env(mut config: DisburseConfig) -> Result<Self, ConfigError> {
        if config.rpc_url.is_empty() {
            if let Ok(url) = std::env::var(RPC_URL_ENV_VAR) {
                config.rpc_url = url;
            }
        }

        validate_config(&config).map_err(ConfigError::Validation)?;

        if config.rpc_url.is_empty() {
            return Err(ConfigError::Env(format!(
                "RPC endpoint not configured; set {} or rpc_url",
                RPC_URL_ENV_VAR
            )));
        }

        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).ok();

        Ok(Self {
            config,
            private_key,
        })
    }
}
