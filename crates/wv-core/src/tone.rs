//! Voice selection and wager-creation eligibility per level.

use crate::level::Level;

/// Lowest level allowed to turn an AI insight into a hosted wager.
pub const WAGER_CREATION_LEVEL: Level = Level::Creator;

/// Describe the voice a response generator should use at `level`.
#[must_use]
pub const fn ai_tone(level: Level) -> &'static str {
    match level {
        Level::Contender => "friendly but teasing about locked features",
        Level::Creator => "confident and empowering, mentioning creator opportunities",
        Level::Strategist => "strategic and analytical, diving deeper into edge",
        Level::Elite => "insider and spicy, calling out traps and patterns",
    }
}

/// Tone for an unchecked level. Anything outside 1..=4 gets the level 1 voice.
#[must_use]
pub fn ai_tone_raw(raw_level: i64) -> &'static str {
    ai_tone(Level::try_from(raw_level).unwrap_or(Level::Contender))
}

/// Whether a user at `level` may create wagers from AI insights.
#[must_use]
pub fn can_create_wager_from_ai(level: Level) -> bool {
    level >= WAGER_CREATION_LEVEL
}

#[must_use]
pub fn can_create_wager_from_ai_raw(raw_level: i64) -> bool {
    raw_level >= i64::from(WAGER_CREATION_LEVEL.as_u8())
}
