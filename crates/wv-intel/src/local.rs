//! Catalog-backed insight source.
//!
//! Answers every endpoint from a [`Catalog`] without network access. Used in
//! development and whenever `api.use_mock` is set.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use wv_core::api::{
    ChatRequest, ChatResponse, GenerateUserWagerRequest, GenerateUserWagerResponse,
    InsightRequest, InsightResponse,
};

use crate::catalog::{Catalog, Routed};
use crate::error::IntelError;
use crate::service::IntelService;
use crate::shape::{self, ScenarioReply};

#[derive(Debug, Clone)]
pub struct LocalIntelService {
    catalog: Arc<Catalog>,
    latency: Duration,
}

impl LocalIntelService {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            latency: Duration::ZERO,
        }
    }

    /// Load the catalog at `path`.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Catalog::load`].
    pub fn from_path(path: &Path) -> Result<Self, IntelError> {
        Catalog::load(path).map(Self::new)
    }

    /// Delay every answer by `latency`, mimicking a model round-trip.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl IntelService for LocalIntelService {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, IntelError> {
        self.simulate_latency().await;
        let level = request.level;

        let response = match self.catalog.route(&request.message) {
            Routed::Scenario {
                scenario,
                lead_in,
                upset_alert,
            } => {
                tracing::debug!(scenario = %scenario.key, %level, "chat routed to scenario");
                shape::chat_response(
                    level,
                    &ScenarioReply {
                        scenario,
                        lead_in,
                        upset_alert,
                    },
                )
            }
            Routed::Info(text) => {
                tracing::debug!(%level, "chat routed to platform info");
                shape::info_response(level, text, &self.catalog.info_quick_prompts)
            }
            Routed::Fallback(fallback) => {
                tracing::debug!(%level, "chat matched no route");
                shape::fallback_response(
                    level,
                    fallback.message_for(level),
                    &fallback.quick_prompts,
                )
            }
        };

        Ok(response)
    }

    async fn insight(&self, request: &InsightRequest) -> Result<InsightResponse, IntelError> {
        self.simulate_latency().await;
        let scenario = self
            .catalog
            .scenario(&request.pool_id)
            .ok_or_else(|| IntelError::UnknownPool(request.pool_id.clone()))?;
        Ok(shape::insight_response(
            request.level,
            &request.pool_id,
            scenario,
        ))
    }

    async fn draft_user_wager(
        &self,
        request: &GenerateUserWagerRequest,
    ) -> Result<GenerateUserWagerResponse, IntelError> {
        self.simulate_latency().await;
        let scenario = match self.catalog.route(&request.prompt) {
            Routed::Scenario { scenario, .. } => Some(scenario),
            Routed::Info(_) | Routed::Fallback(_) => None,
        };
        tracing::debug!(
            level = %request.level,
            scenario = scenario.map(|s| s.key.as_str()),
            "drafting user wager"
        );
        Ok(shape::user_wager_response(request.level, || {
            shape::draft_wager(&request.prompt, request.duration.as_deref(), scenario)
        }))
    }
}
