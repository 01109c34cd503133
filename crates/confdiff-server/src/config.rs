use std::net::SocketAddr;
use std::path::Path;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use confdiff_store::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_SECS};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// Every field has a default, so a TOML config file only needs to name the
/// settings it overrides.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Base URL used when building shareable permalink URLs.
    pub public_base_url: String,
    /// API key required in the `x-api-key` header; `None` disables auth.
    pub api_key: Option<String>,
    /// Permalink lifetime in seconds.
    pub permalink_ttl_secs: i64,
    /// Maximum number of stored permalinks.
    pub max_permalinks: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8750".parse().unwrap(),
            public_base_url: "http://127.0.0.1:8750".to_string(),
            api_key: None,
            permalink_ttl_secs: DEFAULT_TTL_SECS,
            max_permalinks: DEFAULT_MAX_ENTRIES,
        }
    }
}

impl ServerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> ServerResult<Self> {
        toml::from_str(text).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load a config from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Permalink lifetime as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::seconds(self.permalink_ttl_secs)
    }

    /// Shareable URL for a permalink id.
    pub fn permalink_url(&self, id: &str) -> String {
        format!(
            "{}/?permalink={}",
            self.public_base_url.trim_end_matches('/'),
            id
        )
    }
}
