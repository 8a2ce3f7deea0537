use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Env var that supplies the backend base URL when the config file doesn't.
pub const BACKEND_URL_ENV: &str = "BREVITY_BACKEND_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(
        "No backend URL configured. Set backend.base_url in the config file, \
         the BREVITY_BACKEND_URL env var, or pass --backend-url"
    )]
    MissingBaseUrl,

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/brevity/config.toml` on Unix/macOS, or the
    /// equivalent on other platforms via `dirs::config_dir()`.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("brevity").join("config.toml")
    }

    /// Loads configuration, applying overrides in precedence order:
    /// `--backend-url` flag, then `BREVITY_BACKEND_URL`, then the file.
    ///
    /// A missing file is not an error; a missing base URL is.
    pub fn load(path: Option<&Path>, flag_url: Option<&str>) -> Result<Self, ConfigError> {
        let env_url = std::env::var(BACKEND_URL_ENV).ok();
        Self::load_with(path, flag_url, env_url.as_deref())
    }

    /// Same as [`Config::load`] but with the env value passed explicitly,
    /// so tests don't have to mutate process-global state.
    pub fn load_with(
        path: Option<&Path>,
        flag_url: Option<&str>,
        env_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_path);

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
                path: path.clone(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?
        } else {
            Config::default()
        };

        if let Some(url) = env_url {
            if !url.trim().is_empty() {
                config.backend.base_url = url.to_string();
            }
        }
        if let Some(url) = flag_url {
            config.backend.base_url = url.to_string();
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.backend.base_url.trim();
        if url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                message: format!("backend.base_url must be an http(s) URL, got '{}'", url),
            });
        }

        if self.backend.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "backend.timeout_seconds must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
