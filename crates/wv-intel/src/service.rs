//! The AI service seam.
//!
//! Frontends talk to an [`IntelService`]; whether the answer comes from the
//! local scenario catalog or the remote AI service is a configuration
//! decision made once, when the [`IntelBackend`] is built.

use std::future::Future;

use wv_core::api::{
    ChatRequest, ChatResponse, GenerateUserWagerRequest, GenerateUserWagerResponse,
    InsightRequest, InsightResponse,
};

use crate::client::HttpIntelClient;
use crate::error::IntelError;
use crate::local::LocalIntelService;

/// The three AI endpoints every insight source answers.
pub trait IntelService {
    /// Answer a chat message, gated to the requester's level.
    fn chat(
        &self,
        request: &ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, IntelError>> + Send;

    /// Structured intel for one pool.
    fn insight(
        &self,
        request: &InsightRequest,
    ) -> impl Future<Output = Result<InsightResponse, IntelError>> + Send;

    /// Draft a user-hosted wager from a free-form prompt.
    fn draft_user_wager(
        &self,
        request: &GenerateUserWagerRequest,
    ) -> impl Future<Output = Result<GenerateUserWagerResponse, IntelError>> + Send;
}

/// Either insight source, picked at startup.
#[derive(Debug, Clone)]
pub enum IntelBackend {
    Local(LocalIntelService),
    Remote(HttpIntelClient),
}

impl IntelBackend {
    /// Short name for logs and diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Local(_) => "local",
            Self::Remote(_) => "remote",
        }
    }
}

impl IntelService for IntelBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, IntelError> {
        match self {
            Self::Local(service) => service.chat(request).await,
            Self::Remote(client) => client.chat(request).await,
        }
    }

    async fn insight(&self, request: &InsightRequest) -> Result<InsightResponse, IntelError> {
        match self {
            Self::Local(service) => service.insight(request).await,
            Self::Remote(client) => client.insight(request).await,
        }
    }

    async fn draft_user_wager(
        &self,
        request: &GenerateUserWagerRequest,
    ) -> Result<GenerateUserWagerResponse, IntelError> {
        match self {
            Self::Local(service) => service.draft_user_wager(request).await,
            Self::Remote(client) => client.draft_user_wager(request).await,
        }
    }
}
