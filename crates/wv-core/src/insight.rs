//! Insight data model: the ungated [`FullInsight`] an insight source produces
//! and the [`VisibleInsight`] projection the gate hands to callers.
//!
//! Wire form is camelCase JSON, matching the service contract field for field.

use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::level::Level;

// ---------------------------------------------------------------------------
// InsightKind
// ---------------------------------------------------------------------------

/// Type tag of an [`InsightItem`]. Unknown tags are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InsightKind {
    Line,
    Crowd,
    Timer,
    Risk,
    Confidence,
    Other(String),
}

impl InsightKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Line => "line",
            Self::Crowd => "crowd",
            Self::Timer => "timer",
            Self::Risk => "risk",
            Self::Confidence => "confidence",
            Self::Other(tag) => tag,
        }
    }

    /// Kinds that carry crowd or confidence data, hidden from the lowest tier.
    #[must_use]
    pub const fn is_crowd_or_confidence(&self) -> bool {
        matches!(self, Self::Crowd | Self::Confidence)
    }
}

impl From<String> for InsightKind {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "line" => Self::Line,
            "crowd" => Self::Crowd,
            "timer" => Self::Timer,
            "risk" => Self::Risk,
            "confidence" => Self::Confidence,
            _ => Self::Other(tag),
        }
    }
}

impl From<&str> for InsightKind {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<InsightKind> for String {
    fn from(kind: InsightKind) -> Self {
        match kind {
            InsightKind::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for InsightKind {
    fn schema_name() -> Cow<'static, str> {
        "InsightKind".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({ "type": "string" })
    }
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

/// One labeled, typed piece of advisory data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct InsightItem {
    pub label: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
}

impl InsightItem {
    pub fn new(
        label: impl Into<String>,
        value: impl Into<String>,
        kind: impl Into<InsightKind>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            kind: kind.into(),
        }
    }
}

/// Over/under participation percentages. Producers must keep the sum at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CrowdSplit {
    pub over: u32,
    pub under: u32,
}

impl CrowdSplit {
    #[must_use]
    pub fn sums_to_hundred(self) -> bool {
        u64::from(self.over) + u64::from(self.under) == 100
    }
}

/// A feature the next tier would reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LockedInsight {
    pub unlock_level: Level,
    pub feature: String,
}

// ---------------------------------------------------------------------------
// FullInsight
// ---------------------------------------------------------------------------

/// Ungated ground truth for one advisory moment.
///
/// Every optional field means "feature not available" when absent; the gate
/// never treats absence as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FullInsight {
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_numeric: Option<f64>,
    #[serde(default)]
    pub time_horizon: Option<String>,
    #[serde(default)]
    pub upset_alert: bool,
    #[serde(default)]
    pub insights: Vec<InsightItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crowd_split: Option<CrowdSplit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub historical_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap_callout: Option<String>,
    #[serde(default)]
    pub can_create_wager: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wager_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wager_description: Option<String>,
}

/// A producer-side data problem found by [`FullInsight::check`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InsightIssue {
    #[error("crowd split {over}/{under} does not sum to 100")]
    CrowdSplitSum { over: u32, under: u32 },

    #[error("numeric confidence {0} is outside 0-100")]
    ConfidenceOutOfRange(f64),
}

impl FullInsight {
    /// Report invariants the producer was supposed to uphold.
    ///
    /// The gate does not call this; it tolerates bad data. Callers at the
    /// source boundary decide whether issues are warnings or rejections.
    #[must_use]
    pub fn check(&self) -> Vec<InsightIssue> {
        let mut issues = Vec::new();

        if let Some(split) = self.crowd_split.filter(|s| !s.sums_to_hundred()) {
            issues.push(InsightIssue::CrowdSplitSum {
                over: split.over,
                under: split.under,
            });
        }

        if let Some(value) = self
            .confidence_numeric
            .filter(|v| !(0.0..=100.0).contains(v))
        {
            issues.push(InsightIssue::ConfidenceOutOfRange(value));
        }

        issues
    }
}

// ---------------------------------------------------------------------------
// VisibleInsight
// ---------------------------------------------------------------------------

/// Gated projection of a [`FullInsight`] for one level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisibleInsight {
    pub confidence: Option<String>,
    pub time_horizon: Option<String>,
    pub upset_alert: bool,
    pub insights: Vec<InsightItem>,
    pub locked_insights: Vec<LockedInsight>,
}
