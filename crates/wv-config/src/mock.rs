//! Local scenario-catalog service configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MockConfig {
    /// Path to the TOML scenario catalog.
    #[serde(default)]
    pub catalog_path: String,

    /// Simulated response latency in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
}

impl MockConfig {
    /// Check if a catalog file has been configured.
    pub fn is_configured(&self) -> bool {
        !self.catalog_path.is_empty()
    }
}
