use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Connection settings for the summarization service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the service (e.g. "http://127.0.0.1:8000").
    ///
    /// Required. May come from the config file, the `BREVITY_BACKEND_URL`
    /// env var, or the `--backend-url` flag.
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
}

/// Behavior toggles for the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Clear the input area after a successful summary.
    #[serde(default = "default_clear_input")]
    pub clear_input_on_success: bool,
}

fn default_timeout() -> u32 {
    30
}

fn default_clear_input() -> bool {
    true
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_seconds: default_timeout(),
        }
    }
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            clear_input_on_success: default_clear_input(),
        }
    }
}
