//! Static per-level perks and unlock-teaser catalog.
//!
//! Read-only process-wide data. Presentation code renders it next to a
//! [`VisibleInsight`](crate::VisibleInsight) to explain what the next tier adds.

use serde::Serialize;

use crate::insight::LockedInsight;
use crate::level::Level;

/// Perks summary for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelPerks {
    pub level: Level,
    pub name: &'static str,
    pub current_perks: &'static [&'static str],
    pub next_level: Option<Level>,
    pub next_perks: &'static [&'static str],
}

static LEVEL_PERKS: [LevelPerks; 4] = [
    LevelPerks {
        level: Level::Contender,
        name: Level::Contender.name(),
        current_perks: &[
            "Access to all public PvP and PvE wagers",
            "Basic AI reasoning (short summary only)",
            "Eligible for biweekly prize pool",
            "Can generate referral links",
        ],
        next_level: Some(Level::Creator),
        next_perks: &[
            "Create wagers (costs $30 VS Chips per wager)",
            "Set platform fee 1%–5%, earn 50% of it",
            "See numeric AI confidence %",
            "View crowd split data",
        ],
    },
    LevelPerks {
        level: Level::Creator,
        name: Level::Creator.name(),
        current_perks: &[
            "Create wagers ($30 VS Chips each)",
            "Earn 50% of platform fees you set (1–5%)",
            "See AI confidence percentages",
            "View crowd split data",
        ],
        next_level: Some(Level::Strategist),
        next_perks: &[
            "Host private / invite-only wagers",
            "Access Pro Insights (trend breakdowns)",
            "See recommended time windows",
            "Volatility and risk labels",
        ],
    },
    LevelPerks {
        level: Level::Strategist,
        name: Level::Strategist.name(),
        current_perks: &[
            "Private / invite-only pools",
            "Pro Insights: trends & analytics",
            "AI time window recommendations",
            "Volatility labels on wagers",
        ],
        next_level: Some(Level::Elite),
        next_perks: &[
            "Insider view: historical pattern matching",
            "AI trap/bait callouts (spicy)",
            "Featured creator boost in feed",
            "Elite-only wager categories",
        ],
    },
    LevelPerks {
        level: Level::Elite,
        name: Level::Elite.name(),
        current_perks: &[
            "Full AI intelligence (insider view)",
            "Historical pattern matching",
            "Trap/bait detection",
            "Featured creator boost",
            "Elite-only pools",
        ],
        next_level: None,
        next_perks: &[],
    },
];

/// Perks card data for `level`.
#[must_use]
pub fn level_perks(level: Level) -> &'static LevelPerks {
    &LEVEL_PERKS[usize::from(level.as_u8() - 1)]
}

/// Bullet points shown on a lock teaser for features unlocking at `level`.
///
/// Contender unlocks nothing, so it has no highlights.
#[must_use]
pub const fn unlock_highlights(level: Level) -> &'static [&'static str] {
    match level {
        Level::Contender => &[],
        Level::Creator => &[
            "Numeric AI confidence percentages",
            "Crowd split data (% on each side)",
            "Ability to create wagers from AI insights",
        ],
        Level::Strategist => &[
            "Recommended time windows for best edge",
            "Volatility and risk labels",
            "Crowd sentiment analysis",
            "Private pool access",
        ],
        Level::Elite => &[
            "Insider historical pattern matching",
            "Trap/bait callouts in AI's spicy voice",
            "Featured creator boost",
            "Elite-only pool access",
        ],
    }
}

/// A locked feature paired with what its tier unlocks, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LockTeaser {
    pub current_level: Level,
    pub unlock_level: Level,
    pub feature: String,
    pub highlights: &'static [&'static str],
}

impl LockTeaser {
    #[must_use]
    pub fn for_locked(current_level: Level, locked: &LockedInsight) -> Self {
        Self {
            current_level,
            unlock_level: locked.unlock_level,
            feature: locked.feature.clone(),
            highlights: unlock_highlights(locked.unlock_level),
        }
    }
}
