//! Application configuration.
//!
//! Layers, later ones winning:
//! 1. built-in defaults
//! 2. an optional YAML file
//! 3. `VILLA_`-prefixed environment variables, `__` separating nested keys
//!    (e.g. `VILLA_SERVER__BIND_ADDR=0.0.0.0:8080`)

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    /// Load the demo villas at start-up.
    pub seed_demo_data: bool,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Pending requests each store actor queues before callers wait. Must be at least 1.
    pub buffer_size: NonZeroUsize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            seed_demo_data: false,
            log_level: "info".to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            buffer_size: NonZeroUsize::MIN.saturating_add(31),
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `path` (if given), then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(Env::prefixed("VILLA_").split("__"))
            .extract()
    }
}
