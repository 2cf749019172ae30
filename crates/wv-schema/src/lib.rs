//! # wv-schema
//!
//! JSON Schema generation, validation, and registry for WagerVS intel.
//!
//! Contract types are defined in `wv-core` with `#[derive(JsonSchema)]`.
//! This crate owns the registry built from them and the boundary helpers
//! used wherever untrusted JSON enters the system, most importantly the
//! hand-off from an insight source to the visibility gate.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
