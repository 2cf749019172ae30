//! Insight service error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while answering or forwarding intel requests.
#[derive(Debug, Error)]
pub enum IntelError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The AI service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The AI service returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The scenario catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The scenario catalog is not valid TOML for the catalog format.
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// The scenario catalog parsed but is inconsistent.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// No scenario backs the requested pool.
    #[error("unknown pool: {0}")]
    UnknownPool(String),
}
