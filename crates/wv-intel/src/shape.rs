//! Response shaping: turn gated insights into API responses.
//!
//! Everything level-dependent goes through the visibility gate and its
//! policy table first; this module only decides how the result is
//! presented (badges, intel cards, calls-to-action).

use std::borrow::Cow;

use wv_core::api::{
    AI_DRAFT_COST_CHIPS, AssistantMessage, Badge, CHAT_WAGER_COST_CHIPS, ChatResponse,
    ConfidencePct, CrowdSplitPct, DEFAULT_PLATFORM_FEE_PCT, DraftWager, GenerateUserWagerResponse,
    InsightMeta, InsightResponse, IntelCard, MAX_PLATFORM_FEE_PCT, WagerCreateCta,
};
use wv_core::gate::{
    HISTORICAL_EDGE_LABEL, TierPolicy, VOLATILITY_LABEL, first_level_where, policy,
};
use wv_core::tone::WAGER_CREATION_LEVEL;
use wv_core::{FullInsight, InsightKind, Level, can_create_wager_from_ai, visible_insight};

use crate::catalog::Scenario;

pub const ELIGIBLE_WHY: &str = "You're Level 2+.";
pub const INELIGIBLE_WHY: &str = "Unlock at Level 2 to host wagers and earn fees.";
pub const NO_WAGER_ANGLE_WHY: &str = "Ask about a specific wager or event to get actionable insights.";
pub const PLATFORM_INFO_WHY: &str = "This is platform info, not a wager opportunity.";
pub const UPGRADE_MESSAGE: &str = "You need Level 2 to publish wagers and collect platform fees. \
     Level up by playing pools, earning points, and staying active this prize cycle.";
pub const PAYOUT_NOTE: &str = "Winners split the losing side's pot after fees. \
     You keep 50% of the fee your pool generates.";
pub const DEFAULT_DRAFT_DURATION: &str = "1h";
pub const UPSET_ALERT_LABEL: &str = "Upset Alert";

/// A routed scenario plus the per-route adjustments.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioReply<'a> {
    pub scenario: &'a Scenario,
    pub lead_in: Option<&'a str>,
    pub upset_alert: Option<bool>,
}

impl ScenarioReply<'_> {
    /// The scenario insight with the route's upset override applied.
    #[must_use]
    pub fn insight(&self) -> Cow<'_, FullInsight> {
        match self.upset_alert {
            Some(flag) if flag != self.scenario.insight.upset_alert => {
                let mut full = self.scenario.insight.clone();
                full.upset_alert = flag;
                Cow::Owned(full)
            }
            _ => Cow::Borrowed(&self.scenario.insight),
        }
    }
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

/// Build a chat answer about a scenario.
#[must_use]
pub fn chat_response(level: Level, reply: &ScenarioReply<'_>) -> ChatResponse {
    let full = reply.insight();
    let scenario = reply.scenario;
    let text = match reply.lead_in {
        Some(lead) => format!("{lead}{}", scenario.message_for(level)),
        None => scenario.message_for(level).to_string(),
    };

    ChatResponse {
        assistant_message: AssistantMessage {
            text,
            tone_tags: scenario.tone_tags.clone(),
        },
        insight_meta: InsightMeta {
            exposure_level_shown: level,
            max_exposure_level: Level::MAX,
            badges: badges(level, &full),
        },
        intel_cards: intel_cards(level, &full),
        wager_create_cta: wager_cta(level, &full, scenario.duration_preset.as_deref()),
        quick_prompts: scenario.quick_prompts.clone(),
    }
}

/// Answer a platform-rules question. No intel, no wager.
#[must_use]
pub fn info_response(level: Level, text: &str, quick_prompts: &[String]) -> ChatResponse {
    plain_response(
        level,
        text,
        &["explanatory", "helpful"],
        PLATFORM_INFO_WHY,
        quick_prompts,
    )
}

/// Answer a message nothing in the source recognised.
#[must_use]
pub fn fallback_response(level: Level, text: &str, quick_prompts: &[String]) -> ChatResponse {
    plain_response(level, text, &["helpful"], NO_WAGER_ANGLE_WHY, quick_prompts)
}

fn plain_response(
    level: Level,
    text: &str,
    tone_tags: &[&str],
    why: &str,
    quick_prompts: &[String],
) -> ChatResponse {
    ChatResponse {
        assistant_message: AssistantMessage {
            text: text.to_string(),
            tone_tags: tone_tags.iter().map(ToString::to_string).collect(),
        },
        insight_meta: InsightMeta {
            exposure_level_shown: level,
            max_exposure_level: Level::MAX,
            badges: Vec::new(),
        },
        intel_cards: Vec::new(),
        wager_create_cta: WagerCreateCta::disabled(why),
        quick_prompts: quick_prompts.to_vec(),
    }
}

fn badges(level: Level, full: &FullInsight) -> Vec<Badge> {
    let visible = visible_insight(level, full);
    let mut badges = vec![Badge::new(
        "Insight Level",
        format!("{level}/{}", Level::MAX),
    )];

    let numeric = full
        .confidence_numeric
        .filter(|_| policy(level).exact_confidence);
    match (numeric, visible.confidence) {
        (Some(pct), _) => badges.push(Badge::new("Confidence", format_pct(pct))),
        (None, Some(label)) => badges.push(Badge::new("Confidence", label)),
        (None, None) => {}
    }

    if let Some(window) = visible.time_horizon {
        badges.push(Badge::new("Best for", window));
    }

    // Shown at every level.
    if visible.upset_alert {
        badges.push(Badge::new(UPSET_ALERT_LABEL, "On"));
    }

    badges
}

fn format_pct(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

/// Card type tag for an insight kind.
fn card_type(kind: &InsightKind) -> String {
    match kind {
        InsightKind::Line => "ai_line".to_string(),
        InsightKind::Crowd => "crowd_split".to_string(),
        InsightKind::Timer => "lock_timer".to_string(),
        other => other.as_str().to_string(),
    }
}

/// Cards for everything visible, plus locked teaser cards for what the very
/// next level would add. Data gated further up is not mentioned at all.
fn intel_cards(level: Level, full: &FullInsight) -> Vec<IntelCard> {
    let next = level.next();
    let mut cards = Vec::new();

    let mut push = |kind: String, label: &str, value: &str, unlock_at: Option<Level>| {
        let value = match unlock_at {
            Some(required) if level < required => {
                if Some(required) != next {
                    return;
                }
                None
            }
            _ => Some(value.to_string()),
        };
        cards.push(IntelCard {
            kind,
            label: label.to_string(),
            locked: value.is_none(),
            value: value.unwrap_or_else(|| {
                format!("Unlock at Level {}", unlock_at.unwrap_or(Level::MAX))
            }),
            unlock_at_level: unlock_at,
        });
    };

    for item in &full.insights {
        let unlock_at = unlock_level(|p| p.shows_kind(&item.kind));
        push(card_type(&item.kind), &item.label, &item.value, unlock_at);
    }

    if let Some(volatility) = &full.volatility {
        push(
            "volatility".to_string(),
            VOLATILITY_LABEL,
            volatility,
            unlock_level(|p| p.volatility),
        );
    }

    if let Some(pattern) = &full.historical_pattern {
        push(
            "historical_edge".to_string(),
            HISTORICAL_EDGE_LABEL,
            pattern,
            unlock_level(|p| p.historical_edge),
        );
    }

    cards
}

/// Level that unlocks data governed by `rule`; `None` if everyone sees it.
fn unlock_level(rule: impl Fn(&TierPolicy) -> bool) -> Option<Level> {
    match first_level_where(rule) {
        Some(Level::Contender) => None,
        Some(level) => Some(level),
        None => Some(Level::MAX),
    }
}

fn wager_cta(level: Level, full: &FullInsight, duration_preset: Option<&str>) -> WagerCreateCta {
    if !full.can_create_wager {
        return WagerCreateCta::disabled(NO_WAGER_ANGLE_WHY);
    }

    let eligible = can_create_wager_from_ai(level);
    WagerCreateCta {
        can_create: eligible,
        why: if eligible { ELIGIBLE_WHY } else { INELIGIBLE_WHY }.to_string(),
        suggested_title: full.wager_title.clone(),
        suggested_description: full.wager_description.clone(),
        default_platform_fee_pct: Some(DEFAULT_PLATFORM_FEE_PCT),
        duration_preset: duration_preset.map(str::to_string),
        cost_chips_usd: Some(CHAT_WAGER_COST_CHIPS),
    }
}

// ---------------------------------------------------------------------------
// Insight
// ---------------------------------------------------------------------------

/// Structured pool intel for one level. Locked numbers are zeroed, not sent.
#[must_use]
pub fn insight_response(level: Level, pool_id: &str, scenario: &Scenario) -> InsightResponse {
    let full = &scenario.insight;
    let tier = policy(level);
    let visible = visible_insight(level, full);

    let crowd_locked = !tier.crowd_and_confidence_items;
    let split = full.crowd_split.filter(|_| !crowd_locked);
    let confidence_locked = !tier.exact_confidence;

    InsightResponse {
        pool_id: pool_id.to_string(),
        label: scenario.pool_label.clone(),
        ai_line: scenario.ai_line.clone(),
        lock_timer: scenario.lock_timer.clone(),
        recommended_window: visible.time_horizon,
        volatility: full.volatility.clone().filter(|_| tier.volatility),
        crowd_split_pct: CrowdSplitPct {
            over: split.map_or(0, |s| s.over),
            under: split.map_or(0, |s| s.under),
            locked: crowd_locked,
        },
        ai_confidence_pct: ConfidencePct {
            value: if confidence_locked {
                0.0
            } else {
                full.confidence_numeric.unwrap_or(0.0)
            },
            locked: confidence_locked,
        },
        upset_alert: visible.upset_alert,
        can_create_from_this: can_create_wager_from_ai(level) && full.can_create_wager,
    }
}

// ---------------------------------------------------------------------------
// User wager drafting
// ---------------------------------------------------------------------------

/// Build a draft wager from what the source knows about the prompt.
#[must_use]
pub fn draft_wager(prompt: &str, duration: Option<&str>, scenario: Option<&Scenario>) -> DraftWager {
    let full = scenario.map(|s| &s.insight);
    DraftWager {
        title: full
            .and_then(|f| f.wager_title.clone())
            .unwrap_or_else(|| prompt.trim().to_string()),
        description: full
            .and_then(|f| f.wager_description.clone())
            .unwrap_or_default(),
        category: scenario
            .map(|s| s.category.clone())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| "Custom".to_string()),
        duration: duration.unwrap_or(DEFAULT_DRAFT_DURATION).to_string(),
        default_platform_fee_pct: DEFAULT_PLATFORM_FEE_PCT,
        max_platform_fee_pct: MAX_PLATFORM_FEE_PCT,
        resolution_source: scenario
            .map(|s| s.resolution_source.clone())
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| "Set by the creator before publishing".to_string()),
        payout_note: PAYOUT_NOTE.to_string(),
    }
}

/// Gate the "Create with AI" flow. The draft is only built when allowed.
#[must_use]
pub fn user_wager_response(
    level: Level,
    draft: impl FnOnce() -> DraftWager,
) -> GenerateUserWagerResponse {
    if can_create_wager_from_ai(level) {
        GenerateUserWagerResponse {
            can_create: true,
            requires_level: WAGER_CREATION_LEVEL,
            user_level: level,
            cost_chips_usd: Some(AI_DRAFT_COST_CHIPS),
            draft_wager: Some(draft()),
            upgrade_message: None,
        }
    } else {
        GenerateUserWagerResponse {
            can_create: false,
            requires_level: WAGER_CREATION_LEVEL,
            user_level: level,
            cost_chips_usd: None,
            draft_wager: None,
            upgrade_message: Some(UPGRADE_MESSAGE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use wv_core::{CrowdSplit, InsightItem};

    fn sol() -> Scenario {
        Scenario {
            key: "sol".into(),
            pool_label: "SOL 30m Pool".into(),
            ai_line: "SOL +3.0%".into(),
            lock_timer: "06:31".into(),
            category: "Crypto".into(),
            duration_preset: Some("30m".into()),
            resolution_source: "Coinbase SOL-USD close".into(),
            messages: vec!["one".into(), "two".into(), "three".into(), "four".into()],
            tone_tags: vec!["confident".into()],
            quick_prompts: vec!["Show crowd split".into()],
            insight: FullInsight {
                confidence: Some("High Confidence (82%)".into()),
                confidence_numeric: Some(82.0),
                time_horizon: Some("30m pool".into()),
                upset_alert: false,
                insights: vec![
                    InsightItem::new("AI Line", "SOL +3.0%", InsightKind::Line),
                    InsightItem::new("Crowd Split", "62% Over", InsightKind::Crowd),
                    InsightItem::new("AI Confidence", "82%", InsightKind::Confidence),
                ],
                crowd_split: Some(CrowdSplit {
                    over: 62,
                    under: 38,
                }),
                volatility: Some("High".into()),
                historical_pattern: Some("Green 6 of last 8".into()),
                trap_callout: None,
                can_create_wager: true,
                wager_title: Some("SOL above +3% in 30m?".into()),
                wager_description: Some("Resolves on the 30m close.".into()),
            },
        }
    }

    fn reply(scenario: &Scenario) -> ScenarioReply<'_> {
        ScenarioReply {
            scenario,
            lead_in: None,
            upset_alert: None,
        }
    }

    fn card<'a>(cards: &'a [IntelCard], label: &str) -> Option<&'a IntelCard> {
        cards.iter().find(|c| c.label == label)
    }

    #[rstest]
    #[case(Level::Contender, 3, 2)]
    #[case(Level::Creator, 4, 1)]
    #[case(Level::Strategist, 5, 1)]
    #[case(Level::Elite, 5, 0)]
    fn intel_cards_tease_only_the_next_level(
        #[case] level: Level,
        #[case] total: usize,
        #[case] locked: usize,
    ) {
        let scenario = sol();
        let response = chat_response(level, &reply(&scenario));
        let cards = &response.intel_cards;
        assert_eq!(cards.len(), total);
        assert_eq!(cards.iter().filter(|c| c.locked).count(), locked);
        for c in cards.iter().filter(|c| c.locked) {
            assert_eq!(c.unlock_at_level, level.next());
            assert!(c.value.starts_with("Unlock at Level "));
        }
    }

    #[test]
    fn locked_cards_never_leak_values() {
        let scenario = sol();
        let response = chat_response(Level::Contender, &reply(&scenario));
        let crowd = card(&response.intel_cards, "Crowd Split").unwrap();
        assert!(crowd.locked);
        assert_eq!(crowd.kind, "crowd_split");
        assert_eq!(crowd.value, "Unlock at Level 2");

        let line = card(&response.intel_cards, "AI Line").unwrap();
        assert!(!line.locked);
        assert_eq!(line.kind, "ai_line");
        assert_eq!(line.unlock_at_level, None);
        assert!(card(&response.intel_cards, VOLATILITY_LABEL).is_none());
    }

    #[test]
    fn elite_sees_volatility_and_history() {
        let scenario = sol();
        let response = chat_response(Level::Elite, &reply(&scenario));
        let history = card(&response.intel_cards, HISTORICAL_EDGE_LABEL).unwrap();
        assert!(!history.locked);
        assert_eq!(history.kind, "historical_edge");
        assert_eq!(history.value, "Green 6 of last 8");
        assert_eq!(history.unlock_at_level, Some(Level::Elite));
        assert_eq!(
            card(&response.intel_cards, VOLATILITY_LABEL).unwrap().value,
            "High"
        );
    }

    #[rstest]
    #[case(Level::Contender, vec![("Insight Level", "1/4"), ("Confidence", "High Confidence")])]
    #[case(Level::Creator, vec![("Insight Level", "2/4"), ("Confidence", "82%")])]
    #[case(
        Level::Strategist,
        vec![("Insight Level", "3/4"), ("Confidence", "82%"), ("Best for", "30m pool")]
    )]
    fn badges_follow_the_gate(#[case] level: Level, #[case] expected: Vec<(&str, &str)>) {
        let scenario = sol();
        let response = chat_response(level, &reply(&scenario));
        let expected: Vec<Badge> = expected
            .into_iter()
            .map(|(label, value)| Badge::new(label, value))
            .collect();
        assert_eq!(response.insight_meta.badges, expected);
        assert_eq!(response.insight_meta.exposure_level_shown, level);
        assert_eq!(response.insight_meta.max_exposure_level, Level::Elite);
    }

    #[test]
    fn fractional_confidence_keeps_one_decimal() {
        assert_eq!(format_pct(82.0), "82%");
        assert_eq!(format_pct(67.5), "67.5%");
    }

    #[test]
    fn cta_depends_on_level_and_wager_angle() {
        let mut scenario = sol();
        let cta = chat_response(Level::Contender, &reply(&scenario)).wager_create_cta;
        assert!(!cta.can_create);
        assert_eq!(cta.why, INELIGIBLE_WHY);
        assert_eq!(cta.suggested_title.as_deref(), Some("SOL above +3% in 30m?"));

        let cta = chat_response(Level::Creator, &reply(&scenario)).wager_create_cta;
        assert!(cta.can_create);
        assert_eq!(cta.why, ELIGIBLE_WHY);
        assert_eq!(cta.default_platform_fee_pct, Some(DEFAULT_PLATFORM_FEE_PCT));
        assert_eq!(cta.cost_chips_usd, Some(CHAT_WAGER_COST_CHIPS));
        assert_eq!(cta.duration_preset.as_deref(), Some("30m"));

        scenario.insight.can_create_wager = false;
        let cta = chat_response(Level::Elite, &reply(&scenario)).wager_create_cta;
        assert_eq!(cta, WagerCreateCta::disabled(NO_WAGER_ANGLE_WHY));
    }

    #[test]
    fn lead_in_and_upset_override_apply() {
        let scenario = sol();
        let routed = ScenarioReply {
            scenario: &scenario,
            lead_in: Some("Underdog flex: "),
            upset_alert: Some(true),
        };
        assert!(routed.insight().upset_alert);
        assert!(!scenario.insight.upset_alert);
        let response = chat_response(Level::Creator, &routed);
        assert_eq!(response.assistant_message.text, "Underdog flex: two");
        assert_eq!(response.assistant_message.tone_tags, vec!["confident"]);
        assert_eq!(
            response.insight_meta.badges.last(),
            Some(&Badge::new(UPSET_ALERT_LABEL, "On"))
        );
    }

    #[rstest]
    #[case(Level::Contender)]
    #[case(Level::Elite)]
    fn upset_badge_follows_the_route_override(#[case] level: Level) {
        let mut scenario = sol();
        let has_upset = |response: &ChatResponse| {
            response
                .insight_meta
                .badges
                .iter()
                .any(|b| b.label == UPSET_ALERT_LABEL)
        };

        assert!(!has_upset(&chat_response(level, &reply(&scenario))));
        let forced_on = ScenarioReply {
            upset_alert: Some(true),
            ..reply(&scenario)
        };
        assert!(has_upset(&chat_response(level, &forced_on)));

        scenario.insight.upset_alert = true;
        assert!(has_upset(&chat_response(level, &reply(&scenario))));
        let forced_off = ScenarioReply {
            upset_alert: Some(false),
            ..reply(&scenario)
        };
        assert!(!has_upset(&chat_response(level, &forced_off)));
    }

    #[test]
    fn matching_override_borrows() {
        let scenario = sol();
        let routed = ScenarioReply {
            upset_alert: Some(false),
            ..reply(&scenario)
        };
        assert!(matches!(routed.insight(), Cow::Borrowed(_)));
    }

    #[test]
    fn info_and_fallback_carry_no_intel() {
        let prompts = vec!["How do payouts work?".to_string()];
        let info = info_response(Level::Elite, "Winners split the pot.", &prompts);
        assert!(info.intel_cards.is_empty());
        assert!(info.insight_meta.badges.is_empty());
        assert_eq!(info.wager_create_cta, WagerCreateCta::disabled(PLATFORM_INFO_WHY));
        assert_eq!(info.assistant_message.tone_tags, vec!["explanatory", "helpful"]);
        assert_eq!(info.quick_prompts, prompts);

        let fallback = fallback_response(Level::Contender, "Ask me about a pool.", &[]);
        assert_eq!(
            fallback.wager_create_cta,
            WagerCreateCta::disabled(NO_WAGER_ANGLE_WHY)
        );
        assert_eq!(fallback.assistant_message.tone_tags, vec!["helpful"]);
    }

    #[test]
    fn insight_response_zeroes_locked_numbers() {
        let scenario = sol();
        let response = insight_response(Level::Contender, "sol", &scenario);
        assert_eq!(
            response.crowd_split_pct,
            CrowdSplitPct {
                over: 0,
                under: 0,
                locked: true
            }
        );
        assert!(response.ai_confidence_pct.locked);
        assert!(response.ai_confidence_pct.value.abs() < f64::EPSILON);
        assert_eq!(response.recommended_window, None);
        assert_eq!(response.volatility, None);
        assert!(!response.can_create_from_this);
        assert_eq!(response.label, "SOL 30m Pool");
    }

    #[test]
    fn insight_response_opens_up_with_level() {
        let scenario = sol();
        let creator = insight_response(Level::Creator, "sol", &scenario);
        assert_eq!(
            creator.crowd_split_pct,
            CrowdSplitPct {
                over: 62,
                under: 38,
                locked: false
            }
        );
        assert!((creator.ai_confidence_pct.value - 82.0).abs() < f64::EPSILON);
        assert_eq!(creator.volatility, None);
        assert!(creator.can_create_from_this);

        let strategist = insight_response(Level::Strategist, "sol", &scenario);
        assert_eq!(strategist.recommended_window.as_deref(), Some("30m pool"));
        assert_eq!(strategist.volatility.as_deref(), Some("High"));
    }

    #[test]
    fn draft_without_scenario_uses_defaults() {
        let draft = draft_wager("  Will it rain in Austin?  ", None, None);
        assert_eq!(draft.title, "Will it rain in Austin?");
        assert_eq!(draft.category, "Custom");
        assert_eq!(draft.duration, DEFAULT_DRAFT_DURATION);
        assert_eq!(draft.max_platform_fee_pct, MAX_PLATFORM_FEE_PCT);
        assert_eq!(draft.payout_note, PAYOUT_NOTE);
    }

    #[test]
    fn draft_from_scenario_copies_its_suggestion() {
        let scenario = sol();
        let draft = draft_wager("sol?", Some("4h"), Some(&scenario));
        assert_eq!(draft.title, "SOL above +3% in 30m?");
        assert_eq!(draft.category, "Crypto");
        assert_eq!(draft.duration, "4h");
        assert_eq!(draft.resolution_source, "Coinbase SOL-USD close");
    }

    #[test]
    fn contender_gets_upgrade_message_and_no_draft() {
        let response = user_wager_response(Level::Contender, || {
            panic!("draft must not be built below the creation level")
        });
        assert!(!response.can_create);
        assert_eq!(response.requires_level, Level::Creator);
        assert_eq!(response.draft_wager, None);
        assert_eq!(response.cost_chips_usd, None);
        assert_eq!(response.upgrade_message.as_deref(), Some(UPGRADE_MESSAGE));
    }

    #[test]
    fn creator_gets_a_draft() {
        let response = user_wager_response(Level::Creator, || draft_wager("x", None, None));
        assert!(response.can_create);
        assert_eq!(response.cost_chips_usd, Some(AI_DRAFT_COST_CHIPS));
        assert_eq!(response.upgrade_message, None);
        assert_eq!(response.draft_wager.unwrap().title, "x");
    }
}
