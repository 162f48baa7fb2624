//! Environment-driven configuration.

use figment::Figment;
use figment::providers::Env;
use serde::{Deserialize, Serialize};

fn default_port() -> u16 {
    8080
}

fn default_catalog_path() -> String {
    "data/coursedb.json".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path to the catalog snapshot JSON.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,
    /// Base level for this crate's log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Extracts configuration from `WORKLIST_`-prefixed environment
    /// variables, falling back to the serde defaults.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new().merge(Env::prefixed("WORKLIST_")).extract()
    }
}
