//! HTTP client for the remote AI service.

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use wv_core::api::{
    ChatRequest, ChatResponse, GenerateUserWagerRequest, GenerateUserWagerResponse,
    InsightRequest, InsightResponse,
};

use crate::error::IntelError;
use crate::http::check_response;
use crate::service::IntelService;

/// Posts contract JSON to `{base_url}/chat`, `/insight` and
/// `/generate-user-wager`.
#[derive(Debug, Clone)]
pub struct HttpIntelClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpIntelClient {
    /// Build a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError::Http`] if the underlying `reqwest::Client` fails
    /// to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, IntelError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("wvai/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, IntelError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "calling AI service");
        let resp = check_response(self.http.post(&url).json(body).send().await?).await?;
        Ok(resp.json().await?)
    }
}

impl IntelService for HttpIntelClient {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, IntelError> {
        self.post("chat", request).await
    }

    async fn insight(&self, request: &InsightRequest) -> Result<InsightResponse, IntelError> {
        self.post("insight", request).await
    }

    async fn draft_user_wager(
        &self,
        request: &GenerateUserWagerRequest,
    ) -> Result<GenerateUserWagerResponse, IntelError> {
        self.post("generate-user-wager", request).await
    }
}
