//! # wv-intel
//!
//! Insight sources and response shaping for WagerVS intel.
//!
//! - [`IntelService`]: the chat / insight / draft-wager seam
//! - [`LocalIntelService`]: answers from an operator-supplied [`Catalog`]
//! - [`HttpIntelClient`]: forwards to the remote AI service
//! - [`shape`]: builds level-gated API responses from ungated insights
//!
//! Every level-dependent decision is delegated to `wv_core::gate`; this crate
//! never decides on its own what a level may see.

pub mod catalog;
pub mod client;
pub mod local;
pub mod service;
pub mod shape;

mod error;
mod http;

pub use catalog::{Catalog, Fallback, Route, Routed, Scenario};
pub use client::HttpIntelClient;
pub use error::IntelError;
pub use local::LocalIntelService;
pub use service::{IntelBackend, IntelService};
