//! Configuration: TOML file under the user config dir plus env overrides.

mod loader;
mod types;

pub use loader::{ConfigError, ENV_BACKEND_URL, ENV_USE_BACKEND};
pub use types::{BackendConfig, ClientConfig, Config, ServerConfig};
