//! AI service endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_base_url() -> String {
    "http://localhost:3001/ai".to_string()
}

const fn default_use_mock() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the AI service layer; endpoints are appended (`/chat`, ...).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Answer from the local scenario catalog instead of the remote service.
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,

    /// Request timeout for the remote service.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            use_mock: default_use_mock(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Whether requests go to the remote service.
    #[must_use]
    pub const fn is_remote(&self) -> bool {
        !self.use_mock
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
