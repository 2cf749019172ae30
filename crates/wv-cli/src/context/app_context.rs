use std::time::Duration;

use anyhow::Context;
use wv_config::WagerConfig;
use wv_core::Level;
use wv_intel::{HttpIntelClient, IntelBackend, LocalIntelService};

use crate::cli::GlobalFlags;

/// User id sent when `general.user_id` is not set.
const ANONYMOUS_USER_ID: &str = "local";

/// Everything a command handler needs: resolved config and level.
#[derive(Debug)]
pub struct AppContext {
    pub config: WagerConfig,
    pub level: Level,
}

impl AppContext {
    /// Resolve the effective level: `--level` wins over `general.default_level`.
    pub fn init(config: WagerConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let level = match flags.level {
            Some(level) => level,
            None => config.default_level()?,
        };
        tracing::debug!(%level, "resolved user level");
        Ok(Self { config, level })
    }

    pub fn user_id(&self) -> &str {
        if self.config.general.user_id.is_empty() {
            ANONYMOUS_USER_ID
        } else {
            &self.config.general.user_id
        }
    }

    /// Build the insight source. Only service commands call this, so the
    /// purely local commands work without a catalog.
    pub fn backend(&self) -> anyhow::Result<IntelBackend> {
        let backend = if self.config.api.is_remote() {
            IntelBackend::Remote(
                HttpIntelClient::new(&self.config.api.base_url, self.config.api.timeout())
                    .context("failed to build AI service client")?,
            )
        } else {
            let path = self
                .config
                .require_catalog_path()
                .context("local mode needs a scenario catalog (mock.catalog_path)")?;
            let service = LocalIntelService::from_path(&path)
                .with_context(|| format!("failed to load catalog {}", path.display()))?;
            IntelBackend::Local(
                service.with_latency(Duration::from_millis(self.config.mock.latency_ms)),
            )
        };
        tracing::debug!(backend = backend.kind(), "intel backend ready");
        Ok(backend)
    }
}
