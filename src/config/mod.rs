mod loader;
mod types;

pub use loader::{ConfigError, BACKEND_URL_ENV};
pub use types::{BackendConfig, BehaviorConfig, Config};
