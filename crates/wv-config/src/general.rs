//! General application configuration.

use serde::{Deserialize, Serialize};

/// Level assumed when a command does not pass one.
const fn default_level() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default user level (1-4) for commands that take `--level`.
    #[serde(default = "default_level")]
    pub default_level: u8,

    /// User id sent with service requests.
    #[serde(default)]
    pub user_id: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_level: default_level(),
            user_id: String::new(),
        }
    }
}
