//! # wv-core
//!
//! Core types and the level-gated visibility rules for WagerVS intel.
//!
//! This crate provides the pieces every other crate builds on:
//! - [`Level`]: the user's progression tier (Contender, Creator, Strategist, Elite)
//! - [`FullInsight`] / [`VisibleInsight`]: ungated ground truth and its gated projection
//! - [`gate`]: the visibility gate mapping `(level, full insight)` to what the user sees
//! - [`tone`]: voice selection and wager-creation eligibility per level
//! - [`perks`]: the static per-level perks and unlock-teaser catalog
//! - [`api`]: request/response contract of the AI service layer
//! - Cross-cutting error types
//!
//! The gate and its helpers are pure: no I/O, no shared state, no panics.

pub mod api;
pub mod errors;
pub mod gate;
pub mod insight;
pub mod level;
pub mod perks;
pub mod tone;

pub use errors::CoreError;
pub use gate::{visible_insight, visible_insight_raw};
pub use insight::{
    CrowdSplit, FullInsight, InsightIssue, InsightItem, InsightKind, LockedInsight,
    VisibleInsight,
};
pub use level::Level;
pub use tone::{ai_tone, ai_tone_raw, can_create_wager_from_ai, can_create_wager_from_ai_raw};
