use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// Generate service settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address for the HTTP server (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// How many following ports to try when the configured one is busy.
    #[serde(default = "default_port_fallback")]
    pub port_fallback: u16,
}

/// External letter-processing service the generate service forwards to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Forward requests before falling back to the local drafter.
    #[serde(default = "default_backend_enabled")]
    pub enabled: bool,
    /// Full URL of the processing endpoint.
    #[serde(default = "default_backend_url")]
    pub url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_backend_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Settings for the form front ends (`compose`, `generate`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full URL of `POST /api/generate`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_port_fallback() -> u16 {
    10
}

fn default_backend_enabled() -> bool {
    true
}

fn default_backend_url() -> String {
    "http://localhost:5001/process".to_string()
}

fn default_backend_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000/api/generate".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port_fallback: default_port_fallback(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: default_backend_enabled(),
            url: default_backend_url(),
            timeout_seconds: default_backend_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}
