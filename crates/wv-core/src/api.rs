//! Request/response contract of the AI service layer.
//!
//! These structs match the REST API JSON exactly (camelCase), for:
//! - `POST /ai/chat`
//! - `POST /ai/insight`
//! - `POST /ai/generate-user-wager`

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::level::Level;

/// Platform fee preset on newly created wagers, in percent.
pub const DEFAULT_PLATFORM_FEE_PCT: u8 = 1;

/// Highest platform fee a creator may set, in percent.
pub const MAX_PLATFORM_FEE_PCT: u8 = 5;

/// Chip cost of turning a chat insight into a wager.
pub const CHAT_WAGER_COST_CHIPS: u32 = 30;

/// Chip cost of the "Create with AI" drafting flow.
pub const AI_DRAFT_COST_CHIPS: u32 = 50;

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// A rendered piece of intel, possibly locked behind a higher level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IntelCard {
    /// `ai_line`, `crowd_split`, `lock_timer`, `volatility`, `historical_edge`, ...
    #[serde(rename = "type")]
    pub kind: String,
    pub label: String,
    pub value: String,
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_at_level: Option<Level>,
}

// ---------------------------------------------------------------------------
// POST /ai/chat
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub user_id: String,
    pub level: Level,
    pub message: String,
    /// `nba`, `crypto`, `events`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_pool_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssistantMessage {
    pub text: String,
    pub tone_tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Badge {
    pub label: String,
    pub value: String,
}

impl Badge {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightMeta {
    pub exposure_level_shown: Level,
    pub max_exposure_level: Level,
    pub badges: Vec<Badge>,
}

/// Call-to-action for turning the answer into a hosted wager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct WagerCreateCta {
    pub can_create: bool,
    pub why: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_platform_fee_pct: Option<u8>,
    /// e.g. `30m`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_preset: Option<String>,
    #[serde(
        rename = "costChipsUSD",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_chips_usd: Option<u32>,
}

impl WagerCreateCta {
    /// A CTA that cannot be acted on, with the reason shown to the user.
    #[must_use]
    pub fn disabled(why: impl Into<String>) -> Self {
        Self {
            can_create: false,
            why: why.into(),
            suggested_title: None,
            suggested_description: None,
            default_platform_fee_pct: None,
            duration_preset: None,
            cost_chips_usd: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub assistant_message: AssistantMessage,
    pub insight_meta: InsightMeta,
    pub intel_cards: Vec<IntelCard>,
    #[serde(rename = "wagerCreateCTA")]
    pub wager_create_cta: WagerCreateCta,
    pub quick_prompts: Vec<String>,
}

// ---------------------------------------------------------------------------
// POST /ai/insight
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    pub user_id: String,
    pub level: Level,
    pub pool_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CrowdSplitPct {
    pub over: u32,
    pub under: u32,
    pub locked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConfidencePct {
    pub value: f64,
    pub locked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsightResponse {
    pub pool_id: String,
    /// e.g. `SOL 30m Pool`
    pub label: String,
    /// e.g. `SOL +3.0%`
    pub ai_line: String,
    pub lock_timer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_window: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volatility: Option<String>,
    pub crowd_split_pct: CrowdSplitPct,
    pub ai_confidence_pct: ConfidencePct,
    pub upset_alert: bool,
    pub can_create_from_this: bool,
}

// ---------------------------------------------------------------------------
// POST /ai/generate-user-wager
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUserWagerRequest {
    pub user_id: String,
    pub level: Level,
    pub prompt: String,
    /// e.g. `1h`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DraftWager {
    pub title: String,
    pub description: String,
    pub category: String,
    pub duration: String,
    pub default_platform_fee_pct: u8,
    pub max_platform_fee_pct: u8,
    pub resolution_source: String,
    pub payout_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateUserWagerResponse {
    pub can_create: bool,
    pub requires_level: Level,
    pub user_level: Level,
    #[serde(
        rename = "costChipsUSD",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cost_chips_usd: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_wager: Option<DraftWager>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upgrade_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn chat_request_rejects_out_of_range_level() {
        let err = serde_json::from_str::<ChatRequest>(
            r#"{"userId":"u1","level":7,"message":"sol?"}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn cta_uses_contract_field_names() {
        let response = ChatResponse {
            assistant_message: AssistantMessage {
                text: "hi".into(),
                tone_tags: vec!["helpful".into()],
            },
            insight_meta: InsightMeta {
                exposure_level_shown: Level::Creator,
                max_exposure_level: Level::MAX,
                badges: vec![],
            },
            intel_cards: vec![],
            wager_create_cta: WagerCreateCta {
                cost_chips_usd: Some(CHAT_WAGER_COST_CHIPS),
                ..WagerCreateCta::disabled("nope")
            },
            quick_prompts: vec![],
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["wagerCreateCTA"]["costChipsUSD"], 30);
        assert_eq!(json["insightMeta"]["maxExposureLevel"], 4);
        assert!(json["wagerCreateCTA"].get("suggestedTitle").is_none());
    }

    #[test]
    fn intel_card_omits_missing_unlock_level() {
        let card = IntelCard {
            kind: "ai_line".into(),
            label: "AI Line".into(),
            value: "SOL +3.0%".into(),
            locked: false,
            unlock_at_level: None,
        };
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["type"], "ai_line");
        assert!(json.get("unlockAtLevel").is_none());
    }
}
