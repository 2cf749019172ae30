//! The insight visibility gate.
//!
//! Maps `(level, FullInsight)` to the [`VisibleInsight`] that level may see.
//! Each tier's rules live in one row of [`POLICIES`]; the gate walks the row
//! rather than branching per level, so monotonic disclosure can be checked
//! against the table itself.
//!
//! | Level | confidence | items | extras | locked teaser |
//! |---|---|---|---|---|
//! | 1 | qualitative only | no crowd/confidence | - | level 2 |
//! | 2 | verbatim | all | - | level 3 |
//! | 3 | verbatim | all | time horizon, volatility | level 4 |
//! | 4 | verbatim | all | + historical edge | none |

use crate::insight::{FullInsight, InsightItem, InsightKind, LockedInsight, VisibleInsight};
use crate::level::Level;

/// Qualitative label shown to the lowest tier in place of the real one.
pub const QUALITATIVE_CONFIDENCE: &str = "High Confidence";

/// Label of the injected volatility item.
pub const VOLATILITY_LABEL: &str = "Volatility";

/// Label of the injected historical pattern item.
pub const HISTORICAL_EDGE_LABEL: &str = "Historical Edge";

/// What one tier is allowed to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    pub level: Level,
    /// Pass `confidence` through verbatim instead of the qualitative label.
    pub exact_confidence: bool,
    /// Keep `crowd` and `confidence` items.
    pub crowd_and_confidence_items: bool,
    pub time_horizon: bool,
    /// Append a risk item built from `volatility`.
    pub volatility: bool,
    /// Append a confidence item built from `historicalPattern`.
    pub historical_edge: bool,
    /// Feature teaser for the next tier, if there is one.
    pub locked_feature: Option<&'static str>,
}

/// One row per level, ascending.
pub static POLICIES: [TierPolicy; 4] = [
    TierPolicy {
        level: Level::Contender,
        exact_confidence: false,
        crowd_and_confidence_items: false,
        time_horizon: false,
        volatility: false,
        historical_edge: false,
        locked_feature: Some("AI Confidence % and Crowd Split Data"),
    },
    TierPolicy {
        level: Level::Creator,
        exact_confidence: true,
        crowd_and_confidence_items: true,
        time_horizon: false,
        volatility: false,
        historical_edge: false,
        locked_feature: Some("Time Windows & Volatility Analysis"),
    },
    TierPolicy {
        level: Level::Strategist,
        exact_confidence: true,
        crowd_and_confidence_items: true,
        time_horizon: true,
        volatility: true,
        historical_edge: false,
        locked_feature: Some("Insider View & Historical Patterns"),
    },
    TierPolicy {
        level: Level::Elite,
        exact_confidence: true,
        crowd_and_confidence_items: true,
        time_horizon: true,
        volatility: true,
        historical_edge: true,
        locked_feature: None,
    },
];

/// Gating policy for a level.
#[must_use]
pub fn policy(level: Level) -> &'static TierPolicy {
    &POLICIES[usize::from(level.as_u8() - 1)]
}

/// Lowest level whose policy satisfies `rule`, or `None` if no level does.
///
/// Presentation code uses this to label locked data with the level that
/// unlocks it, straight from the policy table.
#[must_use]
pub fn first_level_where(rule: impl Fn(&TierPolicy) -> bool) -> Option<Level> {
    POLICIES.iter().find(|p| rule(p)).map(|p| p.level)
}

impl TierPolicy {
    /// Whether an item of this kind survives the base filter.
    #[must_use]
    pub const fn shows_kind(&self, kind: &InsightKind) -> bool {
        self.crowd_and_confidence_items || !kind.is_crowd_or_confidence()
    }

    /// The locked-feature manifest for this tier.
    #[must_use]
    pub fn locked_insights(&self) -> Vec<LockedInsight> {
        match (self.level.next(), self.locked_feature) {
            (Some(unlock_level), Some(feature)) => vec![LockedInsight {
                unlock_level,
                feature: feature.to_string(),
            }],
            _ => Vec::new(),
        }
    }
}

/// Project `full` down to what `level` may see.
///
/// Pure and total: the input is only borrowed, missing optional fields just
/// mean the matching extra is not added.
#[must_use]
pub fn visible_insight(level: Level, full: &FullInsight) -> VisibleInsight {
    let policy = policy(level);

    let confidence = if policy.exact_confidence {
        full.confidence.clone()
    } else {
        full.confidence
            .as_deref()
            .filter(|label| !label.is_empty())
            .map(|_| QUALITATIVE_CONFIDENCE.to_string())
    };

    let mut insights: Vec<InsightItem> = full
        .insights
        .iter()
        .filter(|item| policy.shows_kind(&item.kind))
        .cloned()
        .collect();

    if policy.volatility {
        if let Some(volatility) = &full.volatility {
            insights.push(InsightItem::new(
                VOLATILITY_LABEL,
                volatility.clone(),
                InsightKind::Risk,
            ));
        }
    }

    if policy.historical_edge {
        if let Some(pattern) = &full.historical_pattern {
            insights.push(InsightItem::new(
                HISTORICAL_EDGE_LABEL,
                pattern.clone(),
                InsightKind::Confidence,
            ));
        }
    }

    VisibleInsight {
        confidence,
        time_horizon: if policy.time_horizon {
            full.time_horizon.clone()
        } else {
            None
        },
        upset_alert: full.upset_alert,
        insights,
        locked_insights: policy.locked_insights(),
    }
}

/// Gate using an unchecked integer level.
///
/// Levels at or above 4 get the Elite view; zero or negative levels get the
/// Contender view rather than an empty one. See [`Level::gate_tier`].
#[must_use]
pub fn visible_insight_raw(raw_level: i64, full: &FullInsight) -> VisibleInsight {
    visible_insight(Level::gate_tier(raw_level), full)
}
